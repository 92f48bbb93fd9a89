//! Shared response pieces for API handlers.
//!
//! Resources carry a `links` object with at least their own path, matching
//! what the dashboard UI expects from the legacy API.

use serde::Serialize;

/// Path of the organization config resource.
pub const ORG_CONFIG_PATH: &str = "/chronograf/v1/org_config";

/// Path of the log viewer sub-resource.
pub const LOG_VIEWER_PATH: &str = "/chronograf/v1/org_config/logviewer";

/// Path of the cells collection.
pub const CELLS_PATH: &str = "/api/v2/cells";

/// `{ "self": "<path>" }`
#[derive(Debug, Clone, Serialize)]
pub struct SelfLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

impl SelfLinks {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            self_link: path.into(),
        }
    }
}
