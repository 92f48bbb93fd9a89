//! Per-organization configuration.

use serde::{Deserialize, Serialize};

use crate::log_viewer::{ColumnEncoding, LogViewerColumn, LogViewerConfig, VISIBILITY_ENCODING};
use crate::types::OrgId;

/// One row per organization, created on first access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    #[serde(rename = "organization")]
    pub organization_id: OrgId,
    #[serde(rename = "logViewer")]
    pub log_viewer: LogViewerConfig,
}

impl OrganizationConfig {
    /// The configuration handed out on first access for `organization_id`.
    pub fn new_default(organization_id: &str) -> Self {
        Self {
            organization_id: organization_id.to_string(),
            log_viewer: default_log_viewer(),
        }
    }
}

/// Column layout a new organization starts with.
pub fn default_log_viewer() -> LogViewerConfig {
    let visibility = |value: &str| ColumnEncoding::new(VISIBILITY_ENCODING, value);

    LogViewerConfig {
        columns: vec![
            LogViewerColumn::new("time", 0, vec![visibility("hidden")]),
            LogViewerColumn::new(
                "severity",
                1,
                vec![
                    visibility("visible"),
                    ColumnEncoding::new("label", "icon"),
                    ColumnEncoding::new("label", "text"),
                ],
            ),
            LogViewerColumn::new("timestamp", 2, vec![visibility("visible")]),
            LogViewerColumn::new("message", 3, vec![visibility("visible")]),
            LogViewerColumn::new("facility", 4, vec![visibility("visible")]),
            LogViewerColumn::new(
                "procid",
                5,
                vec![
                    visibility("visible"),
                    ColumnEncoding::new("displayName", "Proc ID"),
                ],
            ),
            LogViewerColumn::new(
                "appname",
                6,
                vec![
                    visibility("visible"),
                    ColumnEncoding::new("displayName", "Application"),
                ],
            ),
            LogViewerColumn::new("host", 7, vec![visibility("visible")]),
        ],
    }
}
