//! Gregorian ordinal-day math.
//!
//! The ordinal day-of-year (1-based) is the bridge value between
//! Gregorian civil dates and the fixed calendar. Nothing here is
//! IFC-specific; the module is public so a parsing layer can validate
//! Gregorian day ranges with the same tables the conversions use.

use crate::consts::{
    DAYS_IN_YEAR, FEBRUARY_DAYS_LEAP, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_FEBRUARY,
    GREGORIAN_MAX_MONTH, MIN_DAY,
};
use crate::types::is_leap_year;
use crate::DateError;

/// Number of days in a Gregorian month (month is 1..=12).
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= GREGORIAN_MAX_MONTH);

    if month == GREGORIAN_FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in a Gregorian year: 365, or 366 in leap years.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_YEAR + 1
    } else {
        DAYS_IN_YEAR
    }
}

/// Ordinal day-of-year of a Gregorian civil date.
///
/// # Errors
/// Returns `DateError::InvalidGregorianMonth` or
/// `DateError::InvalidGregorianDay` if the triple is not a real
/// Gregorian date.
pub fn ordinal_from_ymd(year: i32, month: u8, day: u8) -> Result<u16, DateError> {
    if !(1..=GREGORIAN_MAX_MONTH).contains(&month) {
        return Err(DateError::InvalidGregorianMonth { month });
    }
    let max_day = days_in_month(year, month);
    if !(MIN_DAY..=max_day).contains(&day) {
        return Err(DateError::InvalidGregorianDay {
            year,
            month,
            day,
            max_day,
        });
    }

    let mut ordinal = u16::from(day);
    let mut m = 1;
    while m < month {
        ordinal += u16::from(days_in_month(year, m));
        m += 1;
    }
    Ok(ordinal)
}

/// Expands an ordinal day-of-year back to a Gregorian `(month, day)`.
///
/// The ordinal must be in `1..=days_in_year(year)`; conversions only
/// call this with ordinals they computed themselves.
pub fn ymd_from_ordinal(year: i32, ordinal: u16) -> (u8, u8) {
    debug_assert!((1..=days_in_year(year)).contains(&ordinal));

    let mut remaining = ordinal;
    let mut month = 1;
    while month < GREGORIAN_MAX_MONTH {
        let len = u16::from(days_in_month(year, month));
        if remaining <= len {
            break;
        }
        remaining -= len;
        month += 1;
    }
    (month, remaining as u8)
}
