//! Route definitions for dashboard cells.

use axum::routing::get;
use axum::Router;

use crate::handlers::cells;
use crate::state::AppState;

/// ```text
/// GET     /api/v2/cells        -> list_cells
/// POST    /api/v2/cells        -> create_cell
/// GET     /api/v2/cells/{id}   -> get_cell
/// PATCH   /api/v2/cells/{id}   -> update_cell
/// DELETE  /api/v2/cells/{id}   -> delete_cell
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v2/cells", get(cells::list_cells).post(cells::create_cell))
        .route(
            "/api/v2/cells/{id}",
            get(cells::get_cell)
                .patch(cells::update_cell)
                .delete(cells::delete_cell),
        )
}
