//! Handlers for organization configuration.
//!
//! Every handler goes through the org-scoped store with the caller's
//! organization, so a request without one never reaches storage.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vizdeck_core::error::CoreError;
use vizdeck_core::log_viewer::{validate_log_viewer_config, LogViewerColumn, LogViewerConfig};
use vizdeck_core::org_config::OrganizationConfig;
use vizdeck_core::org_scope::resolve_organization;

use crate::error::AppResult;
use crate::middleware::organization::CallerOrganization;
use crate::response::{SelfLinks, LOG_VIEWER_PATH, ORG_CONFIG_PATH};
use crate::state::AppState;

/// Body of `GET /chronograf/v1/org_config`.
#[derive(Debug, Serialize)]
pub struct OrganizationConfigResponse {
    pub links: SelfLinks,
    #[serde(flatten)]
    pub config: OrganizationConfig,
}

/// Body of the log viewer endpoints.
#[derive(Debug, Serialize)]
pub struct LogViewerConfigResponse {
    pub links: SelfLinks,
    pub columns: Vec<LogViewerColumn>,
}

impl LogViewerConfigResponse {
    fn new(config: LogViewerConfig) -> Self {
        Self {
            links: SelfLinks::new(LOG_VIEWER_PATH),
            columns: config.columns,
        }
    }
}

/// GET /chronograf/v1/org_config
pub async fn get_org_config(
    State(state): State<AppState>,
    caller: CallerOrganization,
) -> AppResult<Json<OrganizationConfigResponse>> {
    let org = resolve_organization(caller.as_deref())?;
    let config = state
        .org_configs()
        .find_or_create(caller.as_deref(), org)
        .await?;

    Ok(Json(OrganizationConfigResponse {
        links: SelfLinks::new(ORG_CONFIG_PATH),
        config,
    }))
}

/// GET /chronograf/v1/org_config/logviewer
pub async fn get_log_viewer_config(
    State(state): State<AppState>,
    caller: CallerOrganization,
) -> AppResult<Json<LogViewerConfigResponse>> {
    let org = resolve_organization(caller.as_deref())?;
    let config = state
        .org_configs()
        .find_or_create(caller.as_deref(), org)
        .await?;

    Ok(Json(LogViewerConfigResponse::new(config.log_viewer)))
}

/// PUT /chronograf/v1/org_config/logviewer
///
/// Replaces the caller's whole column layout. The proposed layout is
/// validated in full before anything is written; the response echoes the
/// stored layout as read back from the store.
pub async fn update_log_viewer_config(
    State(state): State<AppState>,
    caller: CallerOrganization,
    body: Result<Json<LogViewerConfig>, JsonRejection>,
) -> AppResult<Json<LogViewerConfigResponse>> {
    let org = resolve_organization(caller.as_deref())?;
    let Json(proposed) = body?;

    if let Err(err) = validate_log_viewer_config(&proposed) {
        tracing::warn!(organization = %org, error = %err, "Rejected log viewer config");
        return Err(CoreError::from(err).into());
    }

    let config = OrganizationConfig {
        organization_id: org.to_string(),
        log_viewer: proposed,
    };
    let org_configs = state.org_configs();
    org_configs.update(caller.as_deref(), &config).await?;

    tracing::info!(
        organization = %org,
        columns = config.log_viewer.columns.len(),
        "Replaced log viewer config",
    );

    let stored = org_configs.find_or_create(caller.as_deref(), org).await?;
    Ok(Json(LogViewerConfigResponse::new(stored.log_viewer)))
}
