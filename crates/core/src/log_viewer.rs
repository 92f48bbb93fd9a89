//! Log viewer column layout and its structural validator.
//!
//! A layout is replaced as a whole, so [`validate_log_viewer_config`] always
//! runs against the complete proposed column set. Rules are checked in a
//! fixed order and the first violated rule is reported:
//!
//! 1. at least one column
//! 2. column names are unique (exact, case-sensitive)
//! 3. column positions are unique
//! 4. every column has a `visibility` encoding
//!
//! Positions only need to be pairwise distinct; they need not start at zero
//! or be contiguous.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::null_as_default;

/// Encoding type every column must carry.
pub const VISIBILITY_ENCODING: &str = "visibility";

/// Prefix of every user-facing validation message.
pub const INVALID_CONFIG_PREFIX: &str = "Invalid log viewer config";

/// Ordered set of log viewer columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogViewerConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub columns: Vec<LogViewerColumn>,
}

/// A single column. `position` is the rendering order key, not the list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogViewerColumn {
    pub name: String,
    pub position: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encodings: Vec<ColumnEncoding>,
}

/// How a column is rendered, e.g. `visibility=visible` or `color=emergency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnEncoding {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ColumnEncoding {
    pub fn new(kind: &str, value: &str) -> Self {
        Self {
            kind: kind.to_string(),
            value: value.to_string(),
            name: None,
        }
    }

    pub fn named(kind: &str, value: &str, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new(kind, value)
        }
    }
}

impl LogViewerColumn {
    pub fn new(name: &str, position: u32, encodings: Vec<ColumnEncoding>) -> Self {
        Self {
            name: name.to_string(),
            position,
            encodings,
        }
    }

    fn has_visibility(&self) -> bool {
        self.encodings.iter().any(|e| e.kind == VISIBILITY_ENCODING)
    }
}

/// The first structural rule a proposed layout violates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogViewerConfigError {
    #[error("must have at least 1 column")]
    EmptyColumnSet,

    #[error("Duplicate column name {0}")]
    DuplicateColumnName(String),

    #[error("Multiple columns with same position value")]
    DuplicatePosition(u32),

    #[error("missing visibility encoding in column {0}")]
    MissingVisibilityEncoding(String),
}

impl From<LogViewerConfigError> for CoreError {
    fn from(err: LogViewerConfigError) -> Self {
        CoreError::Validation(format!("{INVALID_CONFIG_PREFIX}: {err}"))
    }
}

/// Check a proposed layout, returning the first violated rule.
pub fn validate_log_viewer_config(config: &LogViewerConfig) -> Result<(), LogViewerConfigError> {
    let columns = &config.columns;

    if columns.is_empty() {
        return Err(LogViewerConfigError::EmptyColumnSet);
    }

    let mut names = HashSet::with_capacity(columns.len());
    if let Some(dup) = columns.iter().find(|c| !names.insert(c.name.as_str())) {
        return Err(LogViewerConfigError::DuplicateColumnName(dup.name.clone()));
    }

    let mut positions = HashSet::with_capacity(columns.len());
    if let Some(dup) = columns.iter().find(|c| !positions.insert(c.position)) {
        return Err(LogViewerConfigError::DuplicatePosition(dup.position));
    }

    if let Some(col) = columns.iter().find(|c| !c.has_visibility()) {
        return Err(LogViewerConfigError::MissingVisibilityEncoding(
            col.name.clone(),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
