//! Verdict computation over a Solr core status document.
//!
//! Each core is checked for its document count and its index age
//! independently; a missing count does not stop the age check. Messages and
//! perf samples accumulate on a [`Verdict`] whose severity is the worst of
//! everything recorded.

use std::borrow::Cow;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use solrwatch_types::{format_value, PerfData, Severity, StatusDocument, Verdict};

use super::duration::{age_seconds, format_age, parse_timestamp};
use super::filter::CoreFilter;
use super::thresholds::Thresholds;

/// Evaluates status documents against a set of thresholds.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use solrwatch::data::{Evaluator, Thresholds};
/// use solrwatch_types::{CoreStatus, Severity, StatusDocument};
///
/// let thresholds = Thresholds { docs_critical: Some(10), ..Default::default() };
/// let document = StatusDocument::new()
///     .with_core("core1", CoreStatus::new(Some(5), Some("2023-01-01T00:00:00Z")));
///
/// let verdict = Evaluator::new(&thresholds).evaluate(&document, Duration::from_millis(20));
/// assert_eq!(verdict.severity(), Severity::Critical);
/// assert_eq!(verdict.message(), "Solr core core1 has 5 docs.");
/// ```
pub struct Evaluator<'a> {
    thresholds: &'a Thresholds,
    filter: Option<&'a dyn CoreFilter>,
    now: DateTime<Utc>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator that measures ages against the current time.
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self {
            thresholds,
            filter: None,
            now: Utc::now(),
        }
    }

    /// Only evaluate cores accepted by `filter`.
    pub fn with_filter(mut self, filter: Option<&'a dyn CoreFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Measure ages against `now` instead of the wall clock.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Evaluate a document. `request_time` is reported in the summary.
    pub fn evaluate(&self, document: &StatusDocument, request_time: Duration) -> Verdict {
        let mut verdict = Verdict::new();

        match document.response_status() {
            Some(0) => {}
            status => {
                let status = status.map_or_else(|| "missing".to_string(), |s| s.to_string());
                verdict.add_message(
                    Severity::Critical,
                    format!("Unexpected solr status. Solr status {} returned.", status),
                );
            }
        }

        let Some(cores) = document.cores() else {
            verdict.add_message(
                Severity::Critical,
                "Unexpected solr response. No status returned.",
            );
            return verdict;
        };

        let mut oldest: Option<(i64, &str)> = None;
        let mut smallest: Option<u64> = None;
        let unit = self.thresholds.time_unit;

        for (key, core) in cores {
            let name = core.display_name(key);

            if let Some(filter) = self.filter {
                if !filter.matches(name) {
                    debug!(core = name, "skipping core excluded by filter");
                    continue;
                }
            }
            let label = plugin_safe(name);

            match core.num_docs() {
                Some(num_docs) => {
                    smallest = Some(smallest.map_or(num_docs, |s| s.min(num_docs)));

                    let severity = self.thresholds.docs_severity(num_docs);
                    debug!(core = name, num_docs, %severity, "evaluated document count");
                    if severity != Severity::Ok {
                        verdict.add_message(
                            severity,
                            format!("Solr core {} has {} docs.", label, format_count(num_docs)),
                        );
                    }
                    verdict.add_perf_data(
                        PerfData::new(format!("{}.numDocs", label), num_docs as f64).with_min(0.0),
                    );
                }
                None => {
                    warn!(core = name, "core reported no document count");
                    verdict.add_message(
                        Severity::Critical,
                        format!(
                            "Unexpected solr response. Document count was not found. Core: {}",
                            label
                        ),
                    );
                }
            }

            match core.last_modified() {
                Some(raw) => match parse_timestamp(raw) {
                    Some(modified) => {
                        let age = age_seconds(self.now, modified);
                        if oldest.map_or(true, |(max, _)| age >= max) {
                            oldest = Some((age, name));
                        }

                        let severity = self.thresholds.age_severity(age);
                        debug!(core = name, age_secs = age, %severity, "evaluated index age");
                        if severity != Severity::Ok {
                            verdict.add_message(
                                severity,
                                format!("Solr core {} is {} old.", label, format_age(age)),
                            );
                        }
                        verdict.add_perf_data(
                            PerfData::new(format!("{}.age", label), unit.in_units(age as f64))
                                .with_uom(unit.uom())
                                .with_min(0.0),
                        );
                    }
                    None => {
                        warn!(core = name, last_modified = raw, "unparseable last modified date");
                        verdict.add_message(
                            Severity::Critical,
                            format!(
                                "Unexpected solr response. Last modified date {} could not be parsed. Core: {}",
                                plugin_safe(raw),
                                label
                            ),
                        );
                    }
                },
                None => {
                    warn!(core = name, "core reported no last modified date");
                    verdict.add_message(
                        Severity::Critical,
                        format!(
                            "Unexpected solr response. Last modified date was not found. Core: {}",
                            label
                        ),
                    );
                }
            }
        }

        match oldest {
            Some((age, oldest_core)) => {
                debug!(core = oldest_core, age_secs = age, smallest_docs = ?smallest, "oldest core");
                let smallest = smallest
                    .map(|n| format!(" Smallest core has {} docs.", format_count(n)))
                    .unwrap_or_default();
                verdict.add_message(
                    Severity::Ok,
                    format!(
                        "Oldest core is {} old.{} Request completed in {} seconds.",
                        format_age(age),
                        smallest,
                        format_value(request_time.as_secs_f64())
                    ),
                );
            }
            None => verdict.add_message(Severity::Critical, "No cores found."),
        }

        verdict
    }
}

/// Replace `|` so Solr-supplied text cannot split the status line from its perf data.
fn plugin_safe(text: &str) -> Cow<'_, str> {
    if text.contains('|') {
        Cow::Owned(text.replace('|', "_"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Format a count with thousands separators: 1234567 -> "1,234,567".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
