use sqlx::FromRow;
use vizdeck_core::cell::Cell;
use vizdeck_core::codec::{self, CodecError};
use vizdeck_core::types::{CellId, Timestamp};

/// A row from the `cells` table.
#[derive(Debug, Clone, FromRow)]
pub struct CellRow {
    pub id: CellId,
    pub name: String,
    pub visualization: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<CellRow> for Cell {
    type Error = CodecError;

    fn try_from(row: CellRow) -> Result<Self, Self::Error> {
        Ok(Cell {
            id: row.id,
            name: row.name,
            visualization: codec::decode_visualization(row.visualization)?,
        })
    }
}
