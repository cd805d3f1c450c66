mod consts;
pub mod gregorian;
mod prelude;
mod types;

pub use consts::*;
pub use types::{days_in_month, is_leap_year, Month, Weekday};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A single civil day in the International Fixed Calendar: 13 months
/// of 28 days, each starting on Sunday, plus Year Day (December 29)
/// and, in leap years, Leap Day (June 29).
///
/// The year number is Gregorian-aligned, so every `IfcDate` covers the
/// same civil day as exactly one Gregorian date of the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.number()", day)]
pub struct IfcDate {
    /// Gregorian-aligned year number.
    pub year: i32,
    /// Month of the 13-month year.
    pub month: Month,
    /// Day of month, 1..=28 (29 for December, and for June in leap years).
    pub day: u8,
    // Cached at construction; always consistent with (year, month, day).
    day_of_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month number outside 1..=13.
    #[error("Invalid month: {month} (must be 1-{})", MONTHS_IN_YEAR)]
    InvalidMonth { month: u8 },

    /// Day outside the valid range for the given IFC month and year.
    #[error("Invalid day {day} for {month} {year} (max {max_day})")]
    InvalidDay {
        year: i32,
        month: Month,
        day: u8,
        max_day: u8,
    },

    /// Ordinal day-of-year outside the year's range.
    #[error("Invalid day of year: {ordinal} for year {year} (must be 1-{max_ordinal})")]
    InvalidOrdinal {
        year: i32,
        ordinal: u16,
        max_ordinal: u16,
    },

    /// Gregorian month number outside 1..=12.
    #[error("Invalid Gregorian month: {month} (must be 1-12)")]
    InvalidGregorianMonth { month: u8 },

    /// Day outside the valid range for the given Gregorian month and year.
    #[error("Invalid Gregorian day {day} for month {year}-{month:02} (max {max_day})")]
    InvalidGregorianDay {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// Text that is not a `year-month-day` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,
}

// Ordinal day-of-year for a valid (year, month, day). Leap Day sits
// between June and Sol, so months after June shift by one in leap years.
const fn ordinal_for(year: i32, month: Month, day: u8) -> u16 {
    let mut ordinal = (month.number() as u16 - 1) * DAYS_IN_MONTH as u16 + day as u16;
    if is_leap_year(year) && month.number() > Month::June.number() {
        ordinal += 1;
    }
    ordinal
}

impl IfcDate {
    /// Creates a new date, validating the day against the month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day is 0 or past the end
    /// of the month (e.g. June 29 in a non-leap year).
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month);
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self::from_parts(year, month, day))
    }

    // Infallible constructor for internal paths whose (month, day) is
    // valid by construction.
    fn from_parts(year: i32, month: Month, day: u8) -> Self {
        debug_assert!((MIN_DAY..=days_in_month(year, month)).contains(&day));
        Self {
            year,
            month,
            day,
            day_of_year: ordinal_for(year, month, day),
        }
    }

    /// Converts a Gregorian ordinal day-of-year to the IFC date
    /// covering the same civil day.
    ///
    /// In leap years the 169th day (Gregorian June 17) is Leap Day, and
    /// every later ordinal shifts back by one for the rest of the year.
    /// The 365th day after that compensation is Year Day; everything
    /// else is uniform 28-day-month arithmetic.
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if the ordinal is 0 or past
    /// the end of the year.
    pub fn from_year_ordinal(year: i32, ordinal: u16) -> Result<Self, DateError> {
        let max_ordinal = gregorian::days_in_year(year);
        if !(1..=max_ordinal).contains(&ordinal) {
            return Err(DateError::InvalidOrdinal {
                year,
                ordinal,
                max_ordinal,
            });
        }

        let mut day_of_year = ordinal;
        if is_leap_year(year) {
            if day_of_year == LEAP_DAY_ORDINAL {
                return Ok(Self::from_parts(year, Month::June, INTERCALARY_DAY));
            }

            // Ignore leap day after it has gone by.
            if day_of_year > LEAP_DAY_ORDINAL {
                day_of_year -= 1;
            }
        }

        if day_of_year == DAYS_IN_YEAR {
            return Ok(Self::from_parts(year, Month::December, INTERCALARY_DAY));
        }

        let month_index = (day_of_year - 1) / u16::from(DAYS_IN_MONTH);
        let day = day_of_year - month_index * u16::from(DAYS_IN_MONTH);
        let month = Month::ALL[month_index as usize];
        Ok(Self::from_parts(year, month, day as u8))
    }

    /// Converts a Gregorian civil date to the IFC date covering the
    /// same day. Time-of-day and timezone resolution are the caller's
    /// concern; any instant within one civil day maps to one IFC date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianMonth` or
    /// `DateError::InvalidGregorianDay` if the triple is not a real
    /// Gregorian date.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let ordinal = gregorian::ordinal_from_ymd(year, month, day)?;
        Self::from_year_ordinal(year, ordinal)
    }

    /// Returns the ordinal day-of-year (1..=366), shared with the
    /// Gregorian date covering the same civil day.
    #[inline]
    pub const fn day_of_year(self) -> u16 {
        self.day_of_year
    }

    /// Returns the Gregorian `(year, month, day)` covering the same
    /// civil day.
    pub fn to_gregorian(self) -> (i32, u8, u8) {
        let (month, day) = gregorian::ymd_from_ordinal(self.year, self.day_of_year);
        (self.year, month, day)
    }

    /// Returns true for Leap Day, June 29 (leap years only).
    pub const fn is_leap_day(self) -> bool {
        matches!(self.month, Month::June) && self.day == INTERCALARY_DAY
    }

    /// Returns true for Year Day, December 29.
    pub const fn is_year_day(self) -> bool {
        matches!(self.month, Month::December) && self.day == INTERCALARY_DAY
    }

    /// Returns the weekday, or the intercalary pseudo-weekday for
    /// Leap Day and Year Day. Every month begins on Sunday, so for
    /// ordinary dates this depends only on the day-of-month.
    pub fn weekday(self) -> Weekday {
        if self.is_leap_day() {
            return Weekday::LeapDay;
        }
        if self.is_year_day() {
            return Weekday::YearDay;
        }
        Weekday::from_day_of_month(self.day)
    }

    /// Returns the date `months` months after this one, wrapping the
    /// year as needed.
    ///
    /// An intercalary day 29 clamps to 28 first, since no other month
    /// has a 29th day; the clamp makes that one case non-invertible.
    pub fn plus_months(self, months: i32) -> Self {
        if months == 0 {
            return self;
        }

        let day = if self.day == INTERCALARY_DAY {
            DAYS_IN_MONTH
        } else {
            self.day
        };
        let month = self.month.plus_months(months);

        let months_in_year = i32::from(MONTHS_IN_YEAR);
        let mut change_in_years = months / months_in_year;
        let remainder = months % months_in_year;
        let current = i32::from(self.month.number());
        if current + remainder > months_in_year {
            change_in_years += 1;
        } else if current + remainder < 1 {
            change_in_years -= 1;
        }

        Self::from_parts(self.year + change_in_years, month, day)
    }

    /// Returns the date `months` months before this one.
    pub fn minus_months(self, months: i32) -> Self {
        self.plus_months(-months)
    }
}

impl PartialOrd for IfcDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IfcDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.day_of_year).cmp(&(other.year, other.day_of_year))
    }
}

impl FromStr for IfcDate {
    type Err = DateError;

    /// Parses `year-month-day` with the month as its 1..=13 number,
    /// e.g. `2020-07-01` for Sol 1, 2020. A leading `-` negates the
    /// year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, found {trimmed}"
            )));
        }

        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let year = if negative { -year } else { year };
        let month_number = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        let month = Month::new(month_number)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for IfcDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IfcDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
