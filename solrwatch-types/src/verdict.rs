//! Verdict - the accumulated outcome of one check run.

use core::fmt;

use crate::{PerfData, Severity};

/// The accumulated result of a check.
///
/// Messages and perf samples are kept in the order they were added. The
/// aggregate severity is the worst severity among the messages, and the
/// reported text keeps only the messages at that severity, matching the
/// usual monitoring-plugin convention.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verdict {
    messages: Vec<(Severity, String)>,
    perf_data: Vec<PerfData>,
}

impl Verdict {
    /// Create an empty verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verdict holding a single message.
    ///
    /// Used for failures that end the check before anything is evaluated.
    pub fn single(severity: Severity, message: impl Into<String>) -> Self {
        let mut verdict = Self::new();
        verdict.add_message(severity, message);
        verdict
    }

    /// Record a message at the given severity.
    pub fn add_message(&mut self, severity: Severity, message: impl Into<String>) {
        self.messages.push((severity, message.into()));
    }

    /// Record a performance sample.
    pub fn add_perf_data(&mut self, sample: PerfData) {
        self.perf_data.push(sample);
    }

    /// All messages in emission order.
    pub fn messages(&self) -> &[(Severity, String)] {
        &self.messages
    }

    /// All perf samples in emission order.
    pub fn perf_data(&self) -> &[PerfData] {
        &self.perf_data
    }

    /// Messages recorded at exactly `severity`.
    pub fn messages_at(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
    }

    /// Aggregate severity: the worst of all messages, `Ok` when there are none.
    pub fn severity(&self) -> Severity {
        Severity::worst(self.messages.iter().map(|(s, _)| *s))
    }

    /// Messages at the aggregate severity, joined by a single space.
    pub fn message(&self) -> String {
        let severity = self.severity();
        self.messages_at(severity).collect::<Vec<_>>().join(" ")
    }

    /// Process exit code for the aggregate severity.
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity(), self.message())?;
        if !self.perf_data.is_empty() {
            let perf: Vec<String> = self.perf_data.iter().map(|p| p.to_string()).collect();
            write!(f, " | {}", perf.join(" "))?;
        }
        Ok(())
    }
}
