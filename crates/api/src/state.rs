use std::sync::Arc;

use vizdeck_core::org_scope::OrgScopedConfigStore;
use vizdeck_core::store::{CellService, OrganizationConfigStore};
use vizdeck_db::stores::{
    MemoryCellStore, MemoryOrganizationConfigStore, PgCellStore, PgOrganizationConfigStore,
};
use vizdeck_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Database pool, when running against Postgres. Only used for health checks.
    pub pool: Option<DbPool>,
    /// Backing store for organization configs. Handlers reach it through
    /// [`AppState::org_configs`] so every access is organization-scoped.
    pub org_config_store: Arc<dyn OrganizationConfigStore>,
    /// Backing store for dashboard cells.
    pub cells: Arc<dyn CellService>,
}

impl AppState {
    /// State backed by Postgres.
    pub fn postgres(config: ServerConfig, pool: DbPool) -> Self {
        Self {
            config: Arc::new(config),
            org_config_store: Arc::new(PgOrganizationConfigStore::new(pool.clone())),
            cells: Arc::new(PgCellStore::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// State kept entirely in process memory.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            pool: None,
            org_config_store: Arc::new(MemoryOrganizationConfigStore::new()),
            cells: Arc::new(MemoryCellStore::new()),
        }
    }

    /// Organization-scoped view of the config store.
    pub fn org_configs(&self) -> OrgScopedConfigStore<dyn OrganizationConfigStore> {
        OrgScopedConfigStore::new(Arc::clone(&self.org_config_store))
    }

    /// Name of the active storage backend, for diagnostics.
    pub fn storage_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}
