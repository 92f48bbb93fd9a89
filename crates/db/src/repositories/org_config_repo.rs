//! Repository for the `organization_configs` table.

use sqlx::PgPool;

use crate::models::org_config::OrganizationConfigRow;

/// Column list for `organization_configs` queries.
const COLUMNS: &str = "organization_id, log_viewer, created_at, updated_at";

/// Data access for per-organization configuration rows.
pub struct OrgConfigRepo;

impl OrgConfigRepo {
    /// Find an organization's config row. Returns `None` if none exists yet.
    pub async fn find(
        pool: &PgPool,
        organization_id: &str,
    ) -> Result<Option<OrganizationConfigRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organization_configs WHERE organization_id = $1"
        );
        sqlx::query_as::<_, OrganizationConfigRow>(&query)
            .bind(organization_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the existing row, inserting `default_log_viewer` if absent.
    ///
    /// `ON CONFLICT DO NOTHING` keeps concurrent first accesses from
    /// overwriting each other; the follow-up select reads whichever won.
    pub async fn find_or_create(
        pool: &PgPool,
        organization_id: &str,
        default_log_viewer: &serde_json::Value,
    ) -> Result<OrganizationConfigRow, sqlx::Error> {
        sqlx::query(
            "INSERT INTO organization_configs (organization_id, log_viewer) \
             VALUES ($1, $2) \
             ON CONFLICT (organization_id) DO NOTHING",
        )
        .bind(organization_id)
        .bind(default_log_viewer)
        .execute(pool)
        .await?;

        Self::find(pool, organization_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Replace the log viewer document wholesale.
    ///
    /// Returns `None` if the organization has no row.
    pub async fn replace_log_viewer(
        pool: &PgPool,
        organization_id: &str,
        log_viewer: &serde_json::Value,
    ) -> Result<Option<OrganizationConfigRow>, sqlx::Error> {
        let query = format!(
            "UPDATE organization_configs SET log_viewer = $2 \
             WHERE organization_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrganizationConfigRow>(&query)
            .bind(organization_id)
            .bind(log_viewer)
            .fetch_optional(pool)
            .await
    }
}
