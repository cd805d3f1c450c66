/// Days in an IFC week
pub const DAYS_IN_WEEK: u8 = 7;

/// Days in every IFC month (intercalary days excluded)
pub const DAYS_IN_MONTH: u8 = 28;

/// Weeks in every IFC month
pub const WEEKS_IN_MONTH: u8 = 4;

/// Months in an IFC year (Sol included)
pub const MONTHS_IN_YEAR: u8 = 13;

/// Days in a common year (13 * 28 + Year Day)
pub const DAYS_IN_YEAR: u16 = 365;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Day-of-month number carried by both Leap Day and Year Day
pub const INTERCALARY_DAY: u8 = 29;

/// Ordinal day-of-year on which Leap Day falls in leap years,
/// the day after June 28 (6 * 28 + 1)
pub const LEAP_DAY_ORDINAL: u16 = 6 * DAYS_IN_MONTH as u16 + 1;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month number for Gregorian February
pub(crate) const GREGORIAN_FEBRUARY: u8 = 2;
/// Maximum valid Gregorian month
pub(crate) const GREGORIAN_MAX_MONTH: u8 = 12;
/// Days in Gregorian February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
