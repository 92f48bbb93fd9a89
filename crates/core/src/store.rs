//! Backing-store seams.
//!
//! Implementations live in the `db` crate. Errors from a store are opaque to
//! this layer and travel to the caller unchanged; nothing here retries.

use async_trait::async_trait;

use crate::cell::{Cell, CellFilter, CellUpdate, NewCell};
use crate::org_config::OrganizationConfig;
use crate::types::CellId;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Any failure of the underlying storage (connection lost, bad row, ...).
    #[error("{0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }

    pub fn cell_not_found(id: CellId) -> Self {
        Self::NotFound {
            entity: "Cell",
            id: id.to_string(),
        }
    }
}

/// Persistent per-organization configuration.
#[async_trait]
pub trait OrganizationConfigStore: Send + Sync {
    /// Return the organization's config, creating the default one on first
    /// access. Repeated calls without an update return the same config.
    async fn find_or_create(&self, org_id: &str) -> Result<OrganizationConfig, StoreError>;

    /// Replace the stored config of `config.organization_id` wholesale.
    async fn update(&self, config: &OrganizationConfig) -> Result<(), StoreError>;
}

/// Persistent dashboard cells.
#[async_trait]
pub trait CellService: Send + Sync {
    async fn find_cell_by_id(&self, id: CellId) -> Result<Cell, StoreError>;

    /// Cells matching `filter`, plus the total number of matches.
    async fn find_cells(&self, filter: &CellFilter) -> Result<(Vec<Cell>, usize), StoreError>;

    /// Store a new cell under a freshly assigned id.
    async fn create_cell(&self, cell: NewCell) -> Result<Cell, StoreError>;

    /// Apply a changeset and return the resulting cell.
    async fn update_cell(&self, id: CellId, update: CellUpdate) -> Result<Cell, StoreError>;

    async fn delete_cell(&self, id: CellId) -> Result<(), StoreError>;
}
