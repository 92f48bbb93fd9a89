//! Handlers for dashboard cells.
//!
//! Cell bodies go through the visualization codec rather than axum's `Json`
//! extractor, so unknown visualization types are reported by name.

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use vizdeck_core::cell::{Cell, CellFilter};
use vizdeck_core::codec;
use vizdeck_core::types::CellId;

use crate::error::{AppError, AppResult};
use crate::response::{SelfLinks, CELLS_PATH};
use crate::state::AppState;

fn cell_path(id: CellId) -> String {
    format!("{CELLS_PATH}/{id}")
}

/// Encode a cell and attach its `links`.
fn cell_body(cell: &Cell) -> AppResult<Value> {
    let mut body = codec::encode_cell_value(cell)?;
    if let Value::Object(fields) = &mut body {
        fields.insert("links".to_string(), json!(SelfLinks::new(cell_path(cell.id))));
    }
    Ok(body)
}

fn cell_id(path: Result<Path<CellId>, PathRejection>) -> AppResult<CellId> {
    path.map(|Path(id)| id).map_err(|rejection| {
        AppError::BadRequest(format!("Invalid cell id: {}", rejection.body_text()))
    })
}

/// GET /api/v2/cells
pub async fn list_cells(
    State(state): State<AppState>,
    filter: Result<Query<CellFilter>, QueryRejection>,
) -> AppResult<Json<Value>> {
    let Query(filter) =
        filter.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let (cells, total) = state.cells.find_cells(&filter).await?;

    let cells = cells.iter().map(cell_body).collect::<AppResult<Vec<_>>>()?;
    Ok(Json(json!({
        "cells": cells,
        "total": total,
        "links": SelfLinks::new(CELLS_PATH),
    })))
}

/// POST /api/v2/cells
pub async fn create_cell(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    let input = codec::decode_new_cell(&body)?;
    let cell = state.cells.create_cell(input).await?;

    tracing::info!(cell_id = %cell.id, name = %cell.name, "Created cell");

    Ok((StatusCode::CREATED, Json(cell_body(&cell)?)))
}

/// GET /api/v2/cells/{id}
pub async fn get_cell(
    State(state): State<AppState>,
    path: Result<Path<CellId>, PathRejection>,
) -> AppResult<Json<Value>> {
    let id = cell_id(path)?;
    let cell = state.cells.find_cell_by_id(id).await?;
    Ok(Json(cell_body(&cell)?))
}

/// PATCH /api/v2/cells/{id}
pub async fn update_cell(
    State(state): State<AppState>,
    path: Result<Path<CellId>, PathRejection>,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let id = cell_id(path)?;
    let update = codec::decode_cell_update(&body)?;
    let cell = state.cells.update_cell(id, update).await?;

    tracing::info!(cell_id = %cell.id, "Updated cell");

    Ok(Json(cell_body(&cell)?))
}

/// DELETE /api/v2/cells/{id}
pub async fn delete_cell(
    State(state): State<AppState>,
    path: Result<Path<CellId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = cell_id(path)?;
    state.cells.delete_cell(id).await?;

    tracing::info!(cell_id = %id, "Deleted cell");

    Ok(StatusCode::NO_CONTENT)
}
