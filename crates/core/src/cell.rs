//! Dashboard cells.
//!
//! A cell always holds exactly one visualization. Wire encoding lives in
//! [`crate::codec`]; these types deliberately carry no serde impls of their
//! own so there is a single encode/decode path.

use serde::Deserialize;

use crate::types::CellId;
use crate::visualization::Visualization;

/// A dashboard widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub name: String,
    pub visualization: Visualization,
}

/// The plain attributes of a cell, read in the first decode pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CellContents {
    pub id: CellId,
    #[serde(default)]
    pub name: String,
}

/// A cell about to be created. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCell {
    pub name: String,
    pub visualization: Visualization,
}

impl NewCell {
    /// Attach an id, producing the stored cell.
    pub fn into_cell(self, id: CellId) -> Cell {
        Cell {
            id,
            name: self.name,
            visualization: self.visualization,
        }
    }
}

/// Changeset for an existing cell.
///
/// Each present field replaces the stored value wholesale; visualizations are
/// never merged field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellUpdate {
    pub name: Option<String>,
    pub visualization: Option<Visualization>,
}

impl CellUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.visualization.is_none()
    }

    /// Apply this changeset to `cell` in place.
    pub fn apply(self, cell: &mut Cell) {
        if let Some(name) = self.name {
            cell.name = name;
        }
        if let Some(visualization) = self.visualization {
            cell.visualization = visualization;
        }
    }
}

/// Restricts the cells returned by a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CellFilter {
    pub id: Option<CellId>,
    pub name: Option<String>,
}

impl CellFilter {
    pub fn matches(&self, cell: &Cell) -> bool {
        self.id.map_or(true, |id| id == cell.id)
            && self.name.as_deref().map_or(true, |name| name == cell.name)
    }
}
