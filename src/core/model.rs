//! Report Model
//!
//! Every command maps its outcome to this model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Outcome (or listing) of a single rule
    Rule,
    /// File-level outcome of a cleanup run
    Summary,
    Error,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Content hash before the run (xxh3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_before: Option<String>,

    /// Content hash after the run (xxh3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_after: Option<String>,

    /// Output size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Feature-flag references still present after the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual: Option<usize>,

    /// Whether the content changed
    #[serde(default)]
    pub changed: bool,

    /// Whether the file was left untouched on disk
    #[serde(default)]
    pub dry_run: bool,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ReportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A single report entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Path relative to root, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Rule id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    /// Human readable text (rule description, pattern, message)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Number of replacements made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<usize>,

    /// Metadata
    pub meta: Meta,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl ResultItem {
    /// Create a new rule result
    pub fn rule(id: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            kind: Kind::Rule,
            path: None,
            rule: Some(id.into()),
            excerpt: Some(excerpt.into()),
            replacements: None,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new summary result
    pub fn summary(path: impl Into<String>, replacements: usize) -> Self {
        Self {
            kind: Kind::Summary,
            path: Some(path.into()),
            rule: None,
            excerpt: None,
            replacements: Some(replacements),
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new error result
    pub fn error(error: ReportError) -> Self {
        Self {
            kind: Kind::Error,
            path: None,
            rule: None,
            excerpt: None,
            replacements: None,
            meta: Meta::default(),
            errors: vec![error],
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_replacements(mut self, replacements: usize) -> Self {
        self.replacements = Some(replacements);
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
