use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, GREGORIAN_CYCLE, INTERCALARY_DAY, LEAP_YEAR_CYCLE,
    MIN_DAY, MONTHS_IN_YEAR,
};
use crate::DateError;
use std::fmt;

/// A month of the International Fixed Calendar.
///
/// Thirteen months in calendar order, numbered 1..=13. Sol is the
/// extra month, inserted between June and July; it has no Gregorian
/// counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    Sol = 7,
    July = 8,
    August = 9,
    September = 10,
    October = 11,
    November = 12,
    December = 13,
}

impl Month {
    /// All thirteen months in calendar order.
    pub const ALL: [Self; 13] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::Sol,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a new Month from its 1-based number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > 13.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if !(1..=MONTHS_IN_YEAR).contains(&value) {
            return Err(DateError::InvalidMonth { month: value });
        }
        Ok(Self::ALL[value as usize - 1])
    }

    /// Returns the 1-based month number (January = 1, Sol = 7, December = 13)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the month `months` after this one, wrapping around the
    /// 13-month year. Negative offsets wrap backwards; the result is
    /// always a valid month, never "month 0".
    pub fn plus_months(self, months: i32) -> Self {
        let index = (i32::from(self.number()) - 1 + months).rem_euclid(i32::from(MONTHS_IN_YEAR));
        Self::ALL[index as usize]
    }

    /// Returns the full month name (`"January"`, `"Sol"`, ...).
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::Sol => "Sol",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Returns the two-character abbreviation (`"Ja"`, `"So"`, ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::January => "Ja",
            Self::February => "Fe",
            Self::March => "Mr",
            Self::April => "Ap",
            Self::May => "My",
            Self::June => "Jn",
            Self::Sol => "So",
            Self::July => "Jl",
            Self::August => "Au",
            Self::September => "Se",
            Self::October => "Oc",
            Self::November => "No",
            Self::December => "De",
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// A day of the IFC week, or one of the two intercalary days.
///
/// Every IFC month begins on Sunday, so a date's weekday depends only
/// on its day-of-month. Leap Day and Year Day belong to no week; they
/// land between a Saturday and a Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    LeapDay = 7,
    YearDay = 8,
}

impl Weekday {
    /// The seven ordinary weekdays, Sunday first.
    pub const WEEK: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday of an ordinary day-of-month (1..=28).
    ///
    /// Day 1 is always Sunday. Intercalary day 29 is handled by
    /// [`IfcDate::weekday`](crate::IfcDate::weekday), not here.
    pub fn from_day_of_month(day: u8) -> Self {
        debug_assert!((MIN_DAY..INTERCALARY_DAY).contains(&day));
        Self::WEEK[((day - 1) % DAYS_IN_WEEK) as usize]
    }

    /// Returns true for Leap Day and Year Day.
    pub const fn is_intercalary(self) -> bool {
        matches!(self, Self::LeapDay | Self::YearDay)
    }

    /// Returns the full name (`"Sunday"`, `"Leap Day"`, ...).
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::LeapDay => "Leap Day",
            Self::YearDay => "Year Day",
        }
    }

    /// Returns the two-character abbreviation (`"Su"`, `"LD"`, `"YD"`).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sunday => "Su",
            Self::Monday => "Mo",
            Self::Tuesday => "Tu",
            Self::Wednesday => "We",
            Self::Thursday => "Th",
            Self::Friday => "Fr",
            Self::Saturday => "Sa",
            Self::LeapDay => "LD",
            Self::YearDay => "YD",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

// Helper functions

/// Gregorian leap-year rule. Any integer year is accepted; no
/// calendar-epoch validation is performed.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

/// Number of days in an IFC month: 28, except December (29, Year Day)
/// and June in leap years (29, Leap Day).
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::December => INTERCALARY_DAY,
        Month::June => {
            if is_leap_year(year) {
                INTERCALARY_DAY
            } else {
                DAYS_IN_MONTH
            }
        }
        _ => DAYS_IN_MONTH,
    }
}
