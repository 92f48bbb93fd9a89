pub mod cells;
pub mod health;
pub mod org_config;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /chronograf/v1/org_config                 organization config
///     /logviewer                            log viewer column layout
///
/// /api/v2/cells                             list, create
///     /{id}                                 get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(org_config::router())
        .merge(cells::router())
}
