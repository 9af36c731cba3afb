/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Months per year, used when rolling month overflow into the year
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Years a lenient construction reads as two-digit shorthand...
pub(crate) const TWO_DIGIT_YEARS: std::ops::RangeInclusive<i64> = 0..=99;
/// ...and the century they are placed in
pub(crate) const TWO_DIGIT_YEAR_BASE: i64 = 1900;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Largest integer an IEEE double holds exactly; components beyond it are rejected
pub(crate) const MAX_EXACT_COMPONENT: f64 = 9_007_199_254_740_991.0;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Reference pixel density of a CSS pixel at a device pixel ratio of 1
pub const CSS_PIXELS_PER_INCH: f64 = 96.0;

/// Loader key used by `ViewModel::load_default`
pub const DEFAULT_LOAD_KEY: &str = "ljq";
