//! Schema of the Solr core admin status document.
//!
//! These types match the JSON returned by `/solr/admin/cores?wt=json`. Only
//! the fields a health check needs are modelled; everything else is ignored
//! on decode.

use std::collections::BTreeMap;

/// The top-level core admin response.
///
/// Cores are keyed by name in a sorted map so that iteration (and with it
/// message and perf-data order) is deterministic.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "serde")]
/// # {
/// use solrwatch_types::StatusDocument;
///
/// let json = r#"{
///     "responseHeader": { "status": 0 },
///     "status": { "books": { "index": { "numDocs": 42 } } }
/// }"#;
/// let doc: StatusDocument = serde_json::from_str(json).unwrap();
/// assert_eq!(doc.response_status(), Some(0));
/// assert_eq!(doc.cores().unwrap()["books"].num_docs(), Some(42));
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StatusDocument {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub response_header: Option<ResponseHeader>,

    /// Per-core status, keyed by core name. `None` when the field is absent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub status: Option<BTreeMap<String, CoreStatus>>,
}

impl StatusDocument {
    /// Create a document with a zero response status and no cores.
    pub fn new() -> Self {
        Self {
            response_header: Some(ResponseHeader { status: Some(0) }),
            status: Some(BTreeMap::new()),
        }
    }

    /// Add or replace a core.
    pub fn with_core(mut self, name: impl Into<String>, core: CoreStatus) -> Self {
        self.status
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), core);
        self
    }

    /// Set the overall response status code.
    pub fn with_response_status(mut self, status: i64) -> Self {
        self.response_header = Some(ResponseHeader {
            status: Some(status),
        });
        self
    }

    /// The overall response status code, if reported.
    pub fn response_status(&self) -> Option<i64> {
        self.response_header.as_ref().and_then(|h| h.status)
    }

    /// The per-core status map, if reported.
    pub fn cores(&self) -> Option<&BTreeMap<String, CoreStatus>> {
        self.status.as_ref()
    }
}

/// Response header common to all Solr responses.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ResponseHeader {
    /// Zero on success.
    pub status: Option<i64>,
}

/// Status of a single core.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CoreStatus {
    /// Core name as reported by Solr. Usually equal to the map key.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub index: Option<IndexStatus>,
}

impl CoreStatus {
    /// Create a core status with the given index details.
    pub fn new(num_docs: Option<u64>, last_modified: Option<&str>) -> Self {
        Self {
            name: None,
            index: Some(IndexStatus {
                num_docs,
                last_modified: last_modified.map(str::to_string),
            }),
        }
    }

    /// Number of documents in the index.
    pub fn num_docs(&self) -> Option<u64> {
        self.index.as_ref().and_then(|i| i.num_docs)
    }

    /// Raw ISO-8601 timestamp of the last index modification.
    pub fn last_modified(&self) -> Option<&str> {
        self.index.as_ref().and_then(|i| i.last_modified.as_deref())
    }

    /// Name to report for this core: its own `name`, falling back to `key`.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }
}

/// Index details of a core.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct IndexStatus {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub num_docs: Option<u64>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub last_modified: Option<String>,
}
