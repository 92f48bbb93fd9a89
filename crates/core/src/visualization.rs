//! Visualization variants a dashboard cell can carry.
//!
//! [`Visualization`] is a closed sum type. Each variant wraps a struct that
//! implements [`VisualizationVariant`], which names the wire discriminator
//! and lets the codec borrow the concrete struct back out of the enum. The
//! codec's registration table (see [`crate::codec`]) is the only other place
//! a new variant has to be listed.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

/// Discriminator of the legacy v1 visualization shape.
pub const V1_DISCRIMINATOR: &str = "chronograf-v1";

/// The rendering definition attached to a [`crate::cell::Cell`].
#[derive(Debug, Clone, PartialEq)]
pub enum Visualization {
    V1(V1Visualization),
}

/// A concrete visualization shape that can be flattened next to a `type`
/// discriminator on the wire.
pub trait VisualizationVariant: Serialize + DeserializeOwned + Sized {
    /// Wire discriminator. Must be unique across all registered variants.
    const DISCRIMINATOR: &'static str;

    /// Borrow this variant out of the enum, if the enum holds it.
    fn from_visualization(vis: &Visualization) -> Option<&Self>;

    /// Wrap this variant into the enum.
    fn into_visualization(self) -> Visualization;
}

impl From<V1Visualization> for Visualization {
    fn from(value: V1Visualization) -> Self {
        Self::V1(value)
    }
}

// ---------------------------------------------------------------------------
// Legacy v1 shape
// ---------------------------------------------------------------------------

/// The legacy visualization carried over from the v1 dashboards.
///
/// `visualizationType` is the chart kind ("line", "table", ...); the wire
/// `type` key is reserved for the discriminator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1Visualization {
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: Vec<DashboardQuery>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub axes: BTreeMap<String, Axis>,
    #[serde(default)]
    pub visualization_type: String,
    #[serde(rename = "colors", default, deserialize_with = "null_as_default")]
    pub cell_colors: Vec<CellColor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub legend: Legend,
    #[serde(default, deserialize_with = "null_as_default")]
    pub table_options: TableOptions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_options: Vec<RenamableField>,
    #[serde(default)]
    pub time_format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub decimal_places: DecimalPlaces,
}

impl VisualizationVariant for V1Visualization {
    const DISCRIMINATOR: &'static str = V1_DISCRIMINATOR;

    fn from_visualization(vis: &Visualization) -> Option<&Self> {
        #[allow(unreachable_patterns)]
        match vis {
            Visualization::V1(v) => Some(v),
            _ => None,
        }
    }

    fn into_visualization(self) -> Visualization {
        Visualization::V1(self)
    }
}

/// Query builder state for a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// The query text itself.
    #[serde(rename = "query", default)]
    pub command: String,
    /// Y-axis label for the data.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query_config: QueryConfig,
    /// Optional URI of the data source.
    #[serde(default)]
    pub source: String,
}

/// Upper and lower bound for data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    pub upper: i64,
    pub lower: i64,
}

/// Data explorer query state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub measurement: String,
    #[serde(default)]
    pub retention_policy: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_by: GroupBy,
    #[serde(default)]
    pub are_tags_accepted: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fill: String,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub range: Option<DurationRange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shifts: Vec<TimeShift>,
}

/// A shift applied to a query's time range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeShift {
    pub label: String,
    /// Time unit, e.g. `ms`, `s`, `h`.
    pub unit: String,
    pub quantity: String,
}

/// A field or function call in the query builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Lower and upper durations of a query config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationRange {
    pub upper: String,
    pub lower: String,
}

/// Visible extents of a visualization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Client-defined viewport strings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bounds: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Radix used to format axis values.
    #[serde(default)]
    pub base: String,
    /// `log` or `linear`.
    #[serde(default)]
    pub scale: String,
}

/// Maps a data value onto a color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellColor {
    pub id: String,
    /// `min`, `max` or `threshold`.
    #[serde(rename = "type")]
    pub kind: String,
    pub hex: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub orientation: String,
}

/// Display options for table visualizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    #[serde(default)]
    pub vertical_time_axis: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_by: RenamableField,
    #[serde(default)]
    pub wrapping: String,
    #[serde(default)]
    pub fix_first_column: bool,
}

/// A column or row of a table visualization that can be renamed or hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamableField {
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub visible: bool,
}

/// Whether decimal places are enforced, and how many digits to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecimalPlaces {
    #[serde(default)]
    pub is_enforced: bool,
    #[serde(default)]
    pub digits: i32,
}
