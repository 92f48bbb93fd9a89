//! Repository for the `cells` table.

use sqlx::PgPool;
use vizdeck_core::types::CellId;

use crate::models::cell::CellRow;

/// Column list for `cells` queries.
const COLUMNS: &str = "id, name, visualization, created_at, updated_at";

/// CRUD for dashboard cells. Visualizations are stored already encoded.
pub struct CellRepo;

impl CellRepo {
    pub async fn create(
        pool: &PgPool,
        id: CellId,
        name: &str,
        visualization: &serde_json::Value,
    ) -> Result<CellRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO cells (id, name, visualization) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CellRow>(&query)
            .bind(id)
            .bind(name)
            .bind(visualization)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: CellId) -> Result<Option<CellRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cells WHERE id = $1");
        sqlx::query_as::<_, CellRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cells, optionally narrowed by id and/or exact name.
    pub async fn list(
        pool: &PgPool,
        id: Option<CellId>,
        name: Option<&str>,
    ) -> Result<Vec<CellRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cells \
             WHERE ($1::uuid IS NULL OR id = $1) \
               AND ($2::text IS NULL OR name = $2) \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, CellRow>(&query)
            .bind(id)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// Update a cell. `None` fields keep their stored value; present fields
    /// replace it entirely.
    pub async fn update(
        pool: &PgPool,
        id: CellId,
        name: Option<&str>,
        visualization: Option<&serde_json::Value>,
    ) -> Result<Option<CellRow>, sqlx::Error> {
        let query = format!(
            "UPDATE cells SET \
                 name          = COALESCE($2, name), \
                 visualization = COALESCE($3, visualization) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CellRow>(&query)
            .bind(id)
            .bind(name)
            .bind(visualization)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cell by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: CellId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cells WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
