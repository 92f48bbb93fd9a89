//! In-process stores used when no database is configured, and by tests.
//!
//! State lives behind `tokio::sync::RwLock`s. Concurrent writers for the same
//! key are last-write-wins, matching the Postgres stores.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use vizdeck_core::cell::{Cell, CellFilter, CellUpdate, NewCell};
use vizdeck_core::org_config::OrganizationConfig;
use vizdeck_core::store::{CellService, OrganizationConfigStore, StoreError};
use vizdeck_core::types::{CellId, OrgId};

#[derive(Debug, Default)]
pub struct MemoryOrganizationConfigStore {
    configs: RwLock<HashMap<OrgId, OrganizationConfig>>,
}

impl MemoryOrganizationConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganizationConfigStore for MemoryOrganizationConfigStore {
    async fn find_or_create(&self, org_id: &str) -> Result<OrganizationConfig, StoreError> {
        if let Some(config) = self.configs.read().await.get(org_id) {
            return Ok(config.clone());
        }

        let mut configs = self.configs.write().await;
        let config = configs
            .entry(org_id.to_string())
            .or_insert_with(|| OrganizationConfig::new_default(org_id));
        Ok(config.clone())
    }

    async fn update(&self, config: &OrganizationConfig) -> Result<(), StoreError> {
        let mut configs = self.configs.write().await;
        let stored = configs
            .get_mut(&config.organization_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "OrganizationConfig",
                id: config.organization_id.clone(),
            })?;
        *stored = config.clone();
        Ok(())
    }
}

/// Cells keyed by their v7 id, so iteration order is creation order.
#[derive(Debug, Default)]
pub struct MemoryCellStore {
    cells: RwLock<BTreeMap<CellId, Cell>>,
}

impl MemoryCellStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CellService for MemoryCellStore {
    async fn find_cell_by_id(&self, id: CellId) -> Result<Cell, StoreError> {
        self.cells
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::cell_not_found(id))
    }

    async fn find_cells(&self, filter: &CellFilter) -> Result<(Vec<Cell>, usize), StoreError> {
        let cells: Vec<Cell> = self
            .cells
            .read()
            .await
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        let total = cells.len();
        Ok((cells, total))
    }

    async fn create_cell(&self, cell: NewCell) -> Result<Cell, StoreError> {
        let cell = cell.into_cell(Uuid::now_v7());
        self.cells.write().await.insert(cell.id, cell.clone());
        Ok(cell)
    }

    async fn update_cell(&self, id: CellId, update: CellUpdate) -> Result<Cell, StoreError> {
        let mut cells = self.cells.write().await;
        let cell = cells
            .get_mut(&id)
            .ok_or_else(|| StoreError::cell_not_found(id))?;
        update.apply(cell);
        Ok(cell.clone())
    }

    async fn delete_cell(&self, id: CellId) -> Result<(), StoreError> {
        self.cells
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::cell_not_found(id))
    }
}
