//! Rejection reasons for birth date inputs.

/// Why a birth date input could not be turned into an age.
///
/// Every variant is recoverable; the sentinel API (`AgeCalculator::calculate`)
/// collapses them into `None` after reporting to a diagnostic sink.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgeError {
    /// String input that does not split into three numeric `-` separated components.
    #[error("date string format error, must match YYYY-MM-DD: {0:?}")]
    MalformedString(String),

    /// Triple input with a component that is not a number.
    #[error("date array requires valid numbers: [year, month, day]")]
    MalformedTriple,

    /// Input that is neither a date, a string nor a three element numeric array.
    #[error(
        "unsupported date format, expected a date, a \"YYYY-MM-DD\" string or a [year, month, day] array"
    )]
    UnsupportedShape,

    /// Components that do not construct a calendar date.
    #[error("invalid birth date {year}-{month}-{day}, e.g. a non-existent calendar date")]
    InvalidCalendarDate { year: f64, month: f64, day: f64 },
}
