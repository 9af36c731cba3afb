use crate::config::OverflowPolicy;
use crate::consts::{
    DATE_SEPARATOR, MAX_EXACT_COMPONENT, MONTHS_PER_YEAR, TWO_DIGIT_YEAR_BASE, TWO_DIGIT_YEARS,
};
use crate::prelude::*;
use crate::types::{self, Day};
use crate::{Age, AgeError};
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A birth date as callers hand it over.
#[derive(Debug, Clone, PartialEq, From)]
pub enum DateInput {
    /// An already constructed calendar date
    Native(NaiveDate),
    /// Text in the form `YYYY-MM-DD`
    IsoString(String),
    /// `[year, month, day]` with a 1-based month
    Triple([f64; 3]),
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::IsoString(text.to_owned())
    }
}

impl From<[i32; 3]> for DateInput {
    fn from([year, month, day]: [i32; 3]) -> Self {
        Self::Triple([f64::from(year), f64::from(month), f64::from(day)])
    }
}

impl From<(i32, u32, u32)> for DateInput {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::Triple([f64::from(year), f64::from(month), f64::from(day)])
    }
}

/// Classifies loosely typed JSON input.
///
/// Strings become `IsoString`, three element arrays become `Triple` (any
/// non-numeric element is carried as NaN), everything else is unsupported.
impl TryFrom<&serde_json::Value> for DateInput {
    type Error = AgeError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(text) => Ok(Self::IsoString(text.clone())),
            serde_json::Value::Array(items) if items.len() == 3 => {
                let mut parts = [f64::NAN; 3];
                for (part, item) in parts.iter_mut().zip(items) {
                    *part = item.as_f64().unwrap_or(f64::NAN);
                }
                Ok(Self::Triple(parts))
            }
            _ => Err(AgeError::UnsupportedShape),
        }
    }
}

impl DateInput {
    /// Resolves the input to a calendar date.
    ///
    /// # Errors
    /// `MalformedString` or `MalformedTriple` when components are missing or
    /// not numbers, `InvalidCalendarDate` when they do not build a date under
    /// `policy`.
    pub fn normalize(&self, policy: OverflowPolicy) -> Result<CanonicalDate, AgeError> {
        match self {
            Self::Native(date) => Ok(CanonicalDate(*date)),
            Self::IsoString(text) => {
                let [year, month, day] = split_iso(text, policy)?;
                CanonicalDate::from_components(year, month, day, policy)
            }
            Self::Triple(parts) => {
                if parts.iter().any(|part| part.is_nan()) {
                    return Err(AgeError::MalformedTriple);
                }
                let [year, month, day] = *parts;
                CanonicalDate::from_components(year, month, day, policy)
            }
        }
    }
}

fn split_iso(text: &str, policy: OverflowPolicy) -> Result<[f64; 3], AgeError> {
    let parts: Vec<f64> = text
        .split(DATE_SEPARATOR)
        .map(|part| parse_component(part, policy))
        .collect();
    match parts.as_slice() {
        &[year, month, day] if !(year.is_nan() || month.is_nan() || day.is_nan()) => {
            Ok([year, month, day])
        }
        _ => Err(AgeError::MalformedString(text.to_owned())),
    }
}

/// Numeric value of one date component, NaN when it is not a number.
///
/// Follows the browser `Number()` conversion: surrounding whitespace is
/// ignored, `0x`/`0o`/`0b` prefixes select a radix and only the literal
/// `Infinity` is infinite. A blank component is 0 under `Lenient` and
/// rejected under `Strict`.
fn parse_component(part: &str, policy: OverflowPolicy) -> f64 {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return match policy {
            OverflowPolicy::Lenient => 0.0,
            OverflowPolicy::Strict => f64::NAN,
        };
    }
    if let Some(value) = parse_radix(trimmed) {
        return value;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // rules out Rust's own "inf" and "nan" spellings
        _ if trimmed
            .chars()
            .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E')) =>
        {
            f64::NAN
        }
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

/// Unsigned `0x`, `0o` or `0b` integer literal; `None` when there is no prefix.
fn parse_radix(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// A date known to exist on the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Builds a date from `(year, month, day)` with a 1-based month.
    ///
    /// # Errors
    /// Returns `AgeError::InvalidCalendarDate` if the components cannot be
    /// resolved under `policy`.
    pub fn from_components(
        year: f64,
        month: f64,
        day: f64,
        policy: OverflowPolicy,
    ) -> Result<Self, AgeError> {
        let date = match policy {
            OverflowPolicy::Lenient => rolled_date(year, month, day),
            OverflowPolicy::Strict => exact_date(year, month, day),
        };
        date.map(Self)
            .ok_or(AgeError::InvalidCalendarDate { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month, 1-based
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn is_leap_year(self) -> bool {
        types::is_leap_year(self.year())
    }

    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Completed years between this date and `today`, clamped at zero.
    pub fn age_on(self, today: NaiveDate) -> Age {
        let mut years = i64::from(today.year()) - i64::from(self.year());
        if (today.month(), today.day()) < (self.month(), self.day()) {
            years -= 1;
        }
        Age::from(u32::try_from(years.max(0)).unwrap_or(u32::MAX))
    }
}

/// Whole part of a component, or `None` when it is infinite or beyond exact range.
#[allow(clippy::cast_possible_truncation)]
fn whole(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated.abs() > MAX_EXACT_COMPONENT {
        return None;
    }
    Some(truncated as i64)
}

// Years 0..=99 are read as 19xx, month overflow carries into the year and day
// overflow walks across month ends.
fn rolled_date(year: f64, month: f64, day: f64) -> Option<NaiveDate> {
    let month0 = whole(month)?.checked_sub(1)?;
    let mut year = whole(year)?;
    if TWO_DIGIT_YEARS.contains(&year) {
        year += TWO_DIGIT_YEAR_BASE;
    }
    let year = year.checked_add(month0.div_euclid(MONTHS_PER_YEAR))?;
    let month = u32::try_from(month0.rem_euclid(MONTHS_PER_YEAR)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    let offset = TimeDelta::try_days(whole(day)?.checked_sub(1)?)?;
    first.checked_add_signed(offset)
}

fn exact_date(year: f64, month: f64, day: f64) -> Option<NaiveDate> {
    let integral = |value: f64| whole(value).filter(|_| value.fract() == 0.0);
    let year = i32::try_from(integral(year)?).ok()?;
    let month = u8::try_from(integral(month)?).ok()?;
    let day = u8::try_from(integral(day)?).ok()?;
    let day = Day::new(day, year, month)
        .inspect_err(|err| tracing::debug!(%err, "strict calendar validation failed"))
        .ok()?;
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day.get()))
}

impl FromStr for CanonicalDate {
    type Err = AgeError;

    /// Parses `YYYY-MM-DD`, rejecting dates that would need overflow rolling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [year, month, day] = split_iso(s, OverflowPolicy::Strict)?;
        Self::from_components(year, month, day, OverflowPolicy::Strict)
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
