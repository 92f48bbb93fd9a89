//! Route definitions for organization configuration.

use axum::routing::get;
use axum::Router;

use crate::handlers::org_config;
use crate::response::{LOG_VIEWER_PATH, ORG_CONFIG_PATH};
use crate::state::AppState;

/// ```text
/// GET  /chronograf/v1/org_config             -> get_org_config
/// GET  /chronograf/v1/org_config/logviewer   -> get_log_viewer_config
/// PUT  /chronograf/v1/org_config/logviewer   -> update_log_viewer_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(ORG_CONFIG_PATH, get(org_config::get_org_config))
        .route(
            LOG_VIEWER_PATH,
            get(org_config::get_log_viewer_config).put(org_config::update_log_viewer_config),
        )
}
