//! Document-count and index-age thresholds.

use solrwatch_types::{Severity, TimeUnit};

/// Thresholds for severity computation.
///
/// Every bound is optional: `None` disables that check, while `Some(0)` is
/// a real bound. Document thresholds are minimums (a count at or below the
/// bound trips it); age thresholds are maximums (an age at or above the
/// bound trips it) expressed in [`Thresholds::time_unit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thresholds {
    pub docs_warning: Option<u64>,
    pub docs_critical: Option<u64>,
    pub age_warning: Option<f64>,
    pub age_critical: Option<f64>,
    /// Unit of the age bounds and of reported age samples.
    pub time_unit: TimeUnit,
}

impl Thresholds {
    /// Age warning bound in seconds.
    pub fn age_warning_secs(&self) -> Option<f64> {
        self.age_warning.map(|a| self.time_unit.to_seconds(a))
    }

    /// Age critical bound in seconds.
    pub fn age_critical_secs(&self) -> Option<f64> {
        self.age_critical.map(|a| self.time_unit.to_seconds(a))
    }

    /// Severity for a document count. Critical is checked before warning.
    pub fn docs_severity(&self, num_docs: u64) -> Severity {
        if self.docs_critical.is_some_and(|t| num_docs <= t) {
            Severity::Critical
        } else if self.docs_warning.is_some_and(|t| num_docs <= t) {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }

    /// Severity for an index age in whole seconds. Critical is checked
    /// before warning; reaching a bound exactly trips it.
    pub fn age_severity(&self, age_secs: i64) -> Severity {
        let age = age_secs as f64;
        if self.age_critical_secs().is_some_and(|t| age >= t) {
            Severity::Critical
        } else if self.age_warning_secs().is_some_and(|t| age >= t) {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}
