//! PostgreSQL-backed stores built on the repositories.

use async_trait::async_trait;
use uuid::Uuid;
use vizdeck_core::cell::{Cell, CellFilter, CellUpdate, NewCell};
use vizdeck_core::codec;
use vizdeck_core::org_config::OrganizationConfig;
use vizdeck_core::store::{CellService, OrganizationConfigStore, StoreError};
use vizdeck_core::types::CellId;

use crate::repositories::{CellRepo, OrgConfigRepo};
use crate::DbPool;

#[derive(Clone)]
pub struct PgOrganizationConfigStore {
    pool: DbPool,
}

impl PgOrganizationConfigStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationConfigStore for PgOrganizationConfigStore {
    async fn find_or_create(&self, org_id: &str) -> Result<OrganizationConfig, StoreError> {
        let default = OrganizationConfig::new_default(org_id);
        let default_json =
            serde_json::to_value(&default.log_viewer).map_err(StoreError::backend)?;

        let row = OrgConfigRepo::find_or_create(&self.pool, org_id, &default_json)
            .await
            .map_err(StoreError::backend)?;
        OrganizationConfig::try_from(row).map_err(StoreError::backend)
    }

    async fn update(&self, config: &OrganizationConfig) -> Result<(), StoreError> {
        let log_viewer = serde_json::to_value(&config.log_viewer).map_err(StoreError::backend)?;

        let updated =
            OrgConfigRepo::replace_log_viewer(&self.pool, &config.organization_id, &log_viewer)
                .await
                .map_err(StoreError::backend)?;
        if updated.is_none() {
            return Err(StoreError::NotFound {
                entity: "OrganizationConfig",
                id: config.organization_id.clone(),
            });
        }

        tracing::debug!(organization = %config.organization_id, "Organization config row replaced");
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgCellStore {
    pool: DbPool,
}

impl PgCellStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CellService for PgCellStore {
    async fn find_cell_by_id(&self, id: CellId) -> Result<Cell, StoreError> {
        let row = CellRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::backend)?
            .ok_or_else(|| StoreError::cell_not_found(id))?;
        Cell::try_from(row).map_err(StoreError::backend)
    }

    async fn find_cells(&self, filter: &CellFilter) -> Result<(Vec<Cell>, usize), StoreError> {
        let rows = CellRepo::list(&self.pool, filter.id, filter.name.as_deref())
            .await
            .map_err(StoreError::backend)?;
        let cells = rows
            .into_iter()
            .map(Cell::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::backend)?;
        let total = cells.len();
        Ok((cells, total))
    }

    async fn create_cell(&self, cell: NewCell) -> Result<Cell, StoreError> {
        let visualization = codec::encode_visualization(&cell.visualization)
            .map_err(StoreError::backend)?;

        let row = CellRepo::create(
            &self.pool,
            Uuid::now_v7(),
            &cell.name,
            &serde_json::Value::Object(visualization),
        )
        .await
        .map_err(StoreError::backend)?;
        Cell::try_from(row).map_err(StoreError::backend)
    }

    async fn update_cell(&self, id: CellId, update: CellUpdate) -> Result<Cell, StoreError> {
        let visualization = update
            .visualization
            .as_ref()
            .map(codec::encode_visualization)
            .transpose()
            .map_err(StoreError::backend)?
            .map(serde_json::Value::Object);

        let row = CellRepo::update(
            &self.pool,
            id,
            update.name.as_deref(),
            visualization.as_ref(),
        )
        .await
        .map_err(StoreError::backend)?
        .ok_or_else(|| StoreError::cell_not_found(id))?;
        Cell::try_from(row).map_err(StoreError::backend)
    }

    async fn delete_cell(&self, id: CellId) -> Result<(), StoreError> {
        let deleted = CellRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::backend)?;
        if !deleted {
            return Err(StoreError::cell_not_found(id));
        }
        Ok(())
    }
}
