//! Core name filtering.
//!
//! The evaluator only sees the [`CoreFilter`] trait, so any matcher can be
//! plugged in. [`PatternFilter`] is the one the command line builds.

use regex::{Regex, RegexBuilder};

/// Decides whether a core takes part in the check.
pub trait CoreFilter {
    /// Returns true if the core called `name` should be evaluated.
    fn matches(&self, name: &str) -> bool;
}

impl<F> CoreFilter for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

/// A compiled, case-insensitive regular expression over core names.
///
/// The pattern is unanchored: it matches if it occurs anywhere in the name.
///
/// # Example
///
/// ```
/// use solrwatch::data::{CoreFilter, PatternFilter};
///
/// let filter = PatternFilter::new("^books").unwrap();
/// assert!(filter.matches("Books_en"));
/// assert!(!filter.matches("authors"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: Regex,
}

impl PatternFilter {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CoreFilter for PatternFilter {
    fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}
