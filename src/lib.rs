mod clock;
mod config;
mod consts;
mod date;
mod diagnostics;
mod error;
pub mod paper;
mod prelude;
pub mod query;
pub mod text;
mod types;
pub mod view_model;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalculatorConfig, OverflowPolicy};
pub use consts::*;
pub use date::{CanonicalDate, DateInput};
pub use diagnostics::{DiagnosticSink, SilentSink, TracingSink};
pub use error::AgeError;
pub use types::{CalendarError, Day, Month, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completed years of life. Never negative.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Turns birth dates into ages against an injected clock.
///
/// Rejections are reported to the diagnostic sink by [`calculate`](Self::calculate)
/// and returned as errors by [`try_calculate`](Self::try_calculate).
#[derive(Debug, Clone, Default)]
pub struct AgeCalculator<C = SystemClock, S = TracingSink> {
    clock: C,
    sink: S,
    policy: OverflowPolicy,
}

impl AgeCalculator {
    /// Calculator on the system clock, reporting through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, S: DiagnosticSink> AgeCalculator<C, S> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> AgeCalculator<C2, S> {
        AgeCalculator {
            clock,
            sink: self.sink,
            policy: self.policy,
        }
    }

    pub fn with_sink<S2: DiagnosticSink>(self, sink: S2) -> AgeCalculator<C, S2> {
        AgeCalculator {
            clock: self.clock,
            sink,
            policy: self.policy,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_config(self, config: &CalculatorConfig) -> Self {
        self.with_policy(config.overflow)
    }

    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Age of someone born on `birth`, as of the clock's today.
    ///
    /// # Errors
    /// Returns the `AgeError` describing why `birth` was rejected. Nothing is
    /// reported to the sink.
    pub fn try_calculate(&self, birth: impl Into<DateInput>) -> Result<Age, AgeError> {
        calculate_age_on(birth, self.clock.today(), self.policy)
    }

    /// Like [`try_calculate`](Self::try_calculate), but reports the rejection
    /// to the sink and returns `None`.
    pub fn calculate(&self, birth: impl Into<DateInput>) -> Option<Age> {
        self.report(self.try_calculate(birth))
    }

    /// Sentinel form for loosely typed input; unsupported JSON shapes are
    /// reported like any other rejection.
    pub fn calculate_value(&self, birth: &serde_json::Value) -> Option<Age> {
        let age = DateInput::try_from(birth).and_then(|input| self.try_calculate(input));
        self.report(age)
    }

    fn report(&self, age: Result<Age, AgeError>) -> Option<Age> {
        match age {
            Ok(age) => {
                tracing::trace!(%age, "calculated age");
                Some(age)
            }
            Err(error) => {
                self.sink.report(&error);
                None
            }
        }
    }
}

/// Age as of the local date, or `None` (with a `tracing` warning) for invalid input.
pub fn calculate_age(birth: impl Into<DateInput>) -> Option<Age> {
    AgeCalculator::new().calculate(birth)
}

/// Age as of `today`. Pure: the same inputs always give the same result.
///
/// # Errors
/// Returns the `AgeError` describing why `birth` was rejected.
pub fn calculate_age_on(
    birth: impl Into<DateInput>,
    today: NaiveDate,
    policy: OverflowPolicy,
) -> Result<Age, AgeError> {
    Ok(birth.into().normalize(policy)?.age_on(today))
}
