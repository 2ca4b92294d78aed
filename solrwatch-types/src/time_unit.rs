//! Time units for age thresholds and age perf data.

use core::fmt;
use core::str::FromStr;

/// Seconds in a mean Gregorian year (365.2425 days).
const SECONDS_PER_YEAR: f64 = 31_556_952.0;

/// The unit age thresholds are given in and age samples are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    #[default]
    Minutes,
    Hours,
    Days,
    Years,
}

impl TimeUnit {
    /// Every supported unit.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Years,
    ];

    /// How many seconds one of this unit spans.
    pub const fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Milliseconds => 0.001,
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Years => SECONDS_PER_YEAR,
        }
    }

    /// Convert an amount of this unit into seconds.
    pub fn to_seconds(&self, amount: f64) -> f64 {
        amount * self.seconds()
    }

    /// Convert seconds into an amount of this unit.
    pub fn in_units(&self, seconds: f64) -> f64 {
        seconds / self.seconds()
    }

    /// Perf-data unit of measure: `s` for seconds, empty otherwise.
    pub const fn uom(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            _ => "",
        }
    }

    /// Lower-case name as accepted on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Years => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised time unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeUnitError(String);

impl fmt::Display for ParseTimeUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown time unit '{}', expected one of milliseconds, seconds, minutes, hours, days, years",
            self.0
        )
    }
}

impl std::error::Error for ParseTimeUnitError {}

impl FromStr for TimeUnit {
    type Err = ParseTimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == lower)
            .ok_or_else(|| ParseTimeUnitError(s.to_string()))
    }
}
