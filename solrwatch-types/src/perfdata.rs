//! Performance data samples attached to a verdict.

use core::fmt;

/// A labelled numeric sample for downstream graphing.
///
/// Rendered in the plugin wire form `label=value[uom];[warn];[crit];[min]`,
/// with trailing empty fields dropped. Threshold fields are left empty.
///
/// # Example
///
/// ```rust
/// use solrwatch_types::PerfData;
///
/// let sample = PerfData::new("books.age", 90.0).with_uom("s").with_min(0.0);
/// assert_eq!(sample.to_string(), "books.age=90s;;;0");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerfData {
    pub label: String,
    pub value: f64,
    /// Unit of measure, empty when the value is unitless.
    pub uom: String,
    pub min: Option<f64>,
}

impl PerfData {
    /// Create a unitless sample with no lower bound.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            ..Default::default()
        }
    }

    /// Set the unit of measure.
    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        self.uom = uom.into();
        self
    }

    /// Set the minimum possible value.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    fn quoted_label(&self) -> String {
        if self
            .label
            .chars()
            .any(|c| c.is_whitespace() || c == '=' || c == '\'')
        {
            format!("'{}'", self.label.replace('\'', "''"))
        } else {
            self.label.clone()
        }
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = vec![
            format!("{}{}", format_value(self.value), self.uom),
            String::new(),
            String::new(),
            self.min.map(format_value).unwrap_or_default(),
        ];
        while fields.len() > 1 && fields.last().is_some_and(|s| s.is_empty()) {
            fields.pop();
        }
        write!(f, "{}={}", self.quoted_label(), fields.join(";"))
    }
}

/// Format a sample value with at most three decimals and no trailing zeros.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "U".to_string();
    }
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
