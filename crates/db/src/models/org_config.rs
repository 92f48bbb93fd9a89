use sqlx::FromRow;
use vizdeck_core::log_viewer::LogViewerConfig;
use vizdeck_core::org_config::OrganizationConfig;
use vizdeck_core::types::Timestamp;

/// A row from the `organization_configs` table.
#[derive(Debug, Clone, FromRow)]
pub struct OrganizationConfigRow {
    pub organization_id: String,
    pub log_viewer: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<OrganizationConfigRow> for OrganizationConfig {
    type Error = serde_json::Error;

    fn try_from(row: OrganizationConfigRow) -> Result<Self, Self::Error> {
        let log_viewer: LogViewerConfig = serde_json::from_value(row.log_viewer)?;
        Ok(OrganizationConfig {
            organization_id: row.organization_id,
            log_viewer,
        })
    }
}
