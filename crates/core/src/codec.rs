//! Wire codec for dashboard cells and their tagged visualizations.
//!
//! A cell is encoded as
//!
//! ```text
//! { "id": "<uuid>", "name": "<string>",
//!   "visualization": { "type": "<discriminator>", ...variant fields... } }
//! ```
//!
//! The variant's own fields are flattened next to the `type` discriminator.
//! Decoding runs in two passes over the same buffer: the plain cell
//! attributes first, then the nested `visualization` object, whose `type` is
//! looked up in [`REGISTRY`] to pick the variant decoder.
//!
//! Adding a variant: add the enum arm and its [`VisualizationVariant`] impl
//! in [`crate::visualization`], then add one `Registration::of` line below.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::cell::{Cell, CellContents, CellUpdate, NewCell};
use crate::visualization::{V1Visualization, Visualization, VisualizationVariant};

/// Key holding the discriminator inside an encoded visualization.
pub const DISCRIMINATOR_KEY: &str = "type";

/// Key holding the visualization inside an encoded cell.
pub const VISUALIZATION_KEY: &str = "visualization";

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The in-memory variant has no registered encoder. Never a user error.
    #[error("unsupported visualization variant")]
    UnsupportedVariant,

    #[error("unknown visualization type {0}")]
    UnrecognizedVariant(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl CodecError {
    fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Registration table
// ---------------------------------------------------------------------------

type EncodeFn = fn(&Visualization) -> Option<serde_json::Result<Value>>;
type DecodeFn = fn(Value) -> serde_json::Result<Visualization>;

/// One discriminator paired with its encoder and decoder.
struct Registration {
    discriminator: &'static str,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl Registration {
    const fn of<V: VisualizationVariant>() -> Self {
        Self {
            discriminator: V::DISCRIMINATOR,
            encode: encode_variant::<V>,
            decode: decode_variant::<V>,
        }
    }
}

static REGISTRY: &[Registration] = &[Registration::of::<V1Visualization>()];

fn encode_variant<V: VisualizationVariant>(vis: &Visualization) -> Option<serde_json::Result<Value>> {
    V::from_visualization(vis).map(serde_json::to_value)
}

fn decode_variant<V: VisualizationVariant>(body: Value) -> serde_json::Result<Visualization> {
    serde_json::from_value::<V>(body).map(V::into_visualization)
}

/// Discriminators of every registered visualization variant, in table order.
pub fn registered_discriminators() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|r| r.discriminator)
}

// ---------------------------------------------------------------------------
// Visualization
// ---------------------------------------------------------------------------

/// Encode a visualization as an object with `type` plus the variant fields.
pub fn encode_visualization(vis: &Visualization) -> Result<Map<String, Value>, CodecError> {
    for registration in REGISTRY {
        let Some(encoded) = (registration.encode)(vis) else {
            continue;
        };
        let fields = match encoded.map_err(CodecError::malformed)? {
            Value::Object(fields) => fields,
            // Only struct-shaped variants can be flattened.
            _ => return Err(CodecError::UnsupportedVariant),
        };

        let mut object = Map::with_capacity(fields.len() + 1);
        object.insert(
            DISCRIMINATOR_KEY.to_string(),
            Value::String(registration.discriminator.to_string()),
        );
        object.extend(fields);
        return Ok(object);
    }
    Err(CodecError::UnsupportedVariant)
}

#[derive(Deserialize)]
struct Discriminator {
    #[serde(rename = "type")]
    kind: String,
}

/// Decode a visualization object by dispatching on its `type` field.
pub fn decode_visualization(body: Value) -> Result<Visualization, CodecError> {
    let Discriminator { kind } =
        Discriminator::deserialize(&body).map_err(CodecError::malformed)?;

    let registration = REGISTRY
        .iter()
        .find(|r| r.discriminator == kind)
        .ok_or(CodecError::UnrecognizedVariant(kind))?;

    (registration.decode)(body).map_err(CodecError::malformed)
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// Encode a cell into its wire object.
pub fn encode_cell_value(cell: &Cell) -> Result<Value, CodecError> {
    let visualization = encode_visualization(&cell.visualization)?;

    let mut object = Map::new();
    object.insert("id".to_string(), Value::String(cell.id.to_string()));
    object.insert("name".to_string(), Value::String(cell.name.clone()));
    object.insert(VISUALIZATION_KEY.to_string(), Value::Object(visualization));
    Ok(Value::Object(object))
}

/// Encode a cell into wire bytes.
pub fn encode_cell(cell: &Cell) -> Result<Vec<u8>, CodecError> {
    let value = encode_cell_value(cell)?;
    serde_json::to_vec(&value).map_err(CodecError::malformed)
}

/// Decode a full cell, `id` included.
pub fn decode_cell(bytes: &[u8]) -> Result<Cell, CodecError> {
    let (contents, visualization) = split_payload::<CellContents>(bytes)?;
    let visualization = require_visualization(visualization)?;
    Ok(Cell {
        id: contents.id,
        name: contents.name,
        visualization,
    })
}

/// Decode a creation payload. Any `id` in the payload is ignored.
pub fn decode_new_cell(bytes: &[u8]) -> Result<NewCell, CodecError> {
    #[derive(Deserialize)]
    struct Contents {
        #[serde(default)]
        name: String,
    }

    let (contents, visualization) = split_payload::<Contents>(bytes)?;
    let visualization = require_visualization(visualization)?;
    Ok(NewCell {
        name: contents.name,
        visualization,
    })
}

/// Decode a changeset. Both `name` and `visualization` are optional.
pub fn decode_cell_update(bytes: &[u8]) -> Result<CellUpdate, CodecError> {
    #[derive(Deserialize)]
    struct Contents {
        #[serde(default)]
        name: Option<String>,
    }

    let (contents, visualization) = split_payload::<Contents>(bytes)?;
    let visualization = visualization.map(decode_visualization).transpose()?;
    Ok(CellUpdate {
        name: contents.name,
        visualization,
    })
}

/// Run both decode passes: the plain attributes as `T`, then the raw
/// `visualization` object (absent or `null` yields `None`).
fn split_payload<T: DeserializeOwned>(bytes: &[u8]) -> Result<(T, Option<Value>), CodecError> {
    #[derive(Deserialize)]
    struct Envelope {
        #[serde(default)]
        visualization: Option<Value>,
    }

    let contents = serde_json::from_slice::<T>(bytes).map_err(CodecError::malformed)?;
    let envelope = serde_json::from_slice::<Envelope>(bytes).map_err(CodecError::malformed)?;
    Ok((contents, envelope.visualization))
}

fn require_visualization(body: Option<Value>) -> Result<Visualization, CodecError> {
    let body = body.ok_or_else(|| CodecError::malformed("missing visualization"))?;
    decode_visualization(body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use assert_matches::assert_matches;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::visualization::{
        Axis, CellColor, DashboardQuery, DecimalPlaces, Field, GroupBy, Legend, QueryConfig,
        Range, RenamableField, TableOptions, TimeShift,
    };

    fn line_cell() -> Cell {
        Cell {
            id: Uuid::nil(),
            name: "hello".to_string(),
            visualization: Visualization::V1(V1Visualization {
                visualization_type: "line".to_string(),
                ..Default::default()
            }),
        }
    }

    fn detailed_cell() -> Cell {
        let mut axes = BTreeMap::new();
        axes.insert(
            "y".to_string(),
            Axis {
                bounds: vec!["0".to_string(), "100".to_string()],
                label: "cpu".to_string(),
                prefix: String::new(),
                suffix: "%".to_string(),
                base: "10".to_string(),
                scale: "linear".to_string(),
            },
        );
        let mut tags = BTreeMap::new();
        tags.insert("host".to_string(), vec!["a".to_string(), "b".to_string()]);

        Cell {
            id: Uuid::now_v7(),
            name: "CPU".to_string(),
            visualization: Visualization::V1(V1Visualization {
                queries: vec![DashboardQuery {
                    command: "SELECT mean(usage) FROM cpu".to_string(),
                    label: "usage".to_string(),
                    range: Some(Range { upper: 100, lower: 0 }),
                    query_config: QueryConfig {
                        id: "q1".to_string(),
                        database: "telegraf".to_string(),
                        measurement: "cpu".to_string(),
                        retention_policy: "autogen".to_string(),
                        fields: vec![Field {
                            value: json!("mean"),
                            kind: "func".to_string(),
                            alias: "mean_usage".to_string(),
                            args: vec![Field {
                                value: json!("usage"),
                                kind: "field".to_string(),
                                alias: String::new(),
                                args: Vec::new(),
                            }],
                        }],
                        tags,
                        group_by: GroupBy {
                            time: "1m".to_string(),
                            tags: vec!["host".to_string()],
                        },
                        are_tags_accepted: true,
                        fill: "null".to_string(),
                        raw_text: Some("SELECT 1".to_string()),
                        range: None,
                        shifts: vec![TimeShift {
                            label: "1d".to_string(),
                            unit: "d".to_string(),
                            quantity: "1".to_string(),
                        }],
                    },
                    source: "/sources/1".to_string(),
                }],
                axes,
                visualization_type: "table".to_string(),
                cell_colors: vec![CellColor {
                    id: "base".to_string(),
                    kind: "threshold".to_string(),
                    hex: "#00C9FF".to_string(),
                    name: "laser".to_string(),
                    value: "-1000000000000000000".to_string(),
                }],
                legend: Legend {
                    kind: "static".to_string(),
                    orientation: "bottom".to_string(),
                },
                table_options: TableOptions {
                    vertical_time_axis: true,
                    sort_by: RenamableField {
                        internal_name: "time".to_string(),
                        display_name: "Time".to_string(),
                        visible: true,
                    },
                    wrapping: "truncate".to_string(),
                    fix_first_column: true,
                },
                field_options: vec![RenamableField {
                    internal_name: "cpu.mean_usage".to_string(),
                    display_name: "Usage".to_string(),
                    visible: false,
                }],
                time_format: "MM/DD/YYYY HH:mm:ss".to_string(),
                decimal_places: DecimalPlaces {
                    is_enforced: true,
                    digits: 2,
                },
            }),
        }
    }

    #[test]
    fn encode_flattens_variant_next_to_discriminator() {
        let value = encode_cell_value(&line_cell()).unwrap();

        let expected = json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "hello",
            "visualization": {
                "type": "chronograf-v1",
                "queries": [],
                "axes": {},
                "visualizationType": "line",
                "colors": [],
                "legend": {},
                "tableOptions": {
                    "verticalTimeAxis": false,
                    "sortBy": {
                        "internalName": "",
                        "displayName": "",
                        "visible": false
                    },
                    "wrapping": "",
                    "fixFirstColumn": false
                },
                "fieldOptions": [],
                "timeFormat": "",
                "decimalPlaces": {
                    "isEnforced": false,
                    "digits": 0
                }
            }
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn round_trip_minimal_cell() {
        let cell = line_cell();
        let bytes = encode_cell(&cell).unwrap();
        assert_eq!(decode_cell(&bytes).unwrap(), cell);
    }

    #[test]
    fn round_trip_fully_populated_cell() {
        let cell = detailed_cell();
        let bytes = encode_cell(&cell).unwrap();
        assert_eq!(decode_cell(&bytes).unwrap(), cell);
    }

    #[test]
    fn decode_accepts_legacy_nulls() {
        let payload = json!({
            "id": "0188f0a0-0000-7000-8000-000000000001",
            "name": "legacy",
            "visualization": {
                "type": "chronograf-v1",
                "queries": null,
                "axes": null,
                "visualizationType": "line",
                "colors": null,
                "legend": {},
                "fieldOptions": null,
                "timeFormat": "",
                "decimalPlaces": { "isEnforced": false, "digits": 0 }
            }
        });
        let cell = decode_cell(payload.to_string().as_bytes()).unwrap();

        assert_eq!(cell.name, "legacy");
        assert_matches!(cell.visualization, Visualization::V1(ref v) if v.queries.is_empty() && v.axes.is_empty());
    }

    #[test]
    fn decode_accepts_null_structs_and_partial_records() {
        let vis = decode_visualization(json!({
            "type": "chronograf-v1",
            "queries": [{
                "query": "SELECT 1",
                "queryConfig": null,
                "range": { "upper": 5 }
            }, {
                "query": "SELECT 2",
                "queryConfig": {
                    "groupBy": null,
                    "shifts": [{ "label": "1d" }],
                    "range": { "lower": "now() - 1h" }
                }
            }],
            "colors": [{ "hex": "#fff" }],
            "legend": null,
            "tableOptions": null,
            "decimalPlaces": null
        }))
        .unwrap();

        let v = V1Visualization::from_visualization(&vis).unwrap();
        assert_eq!(v.legend, Legend::default());
        assert_eq!(v.table_options, TableOptions::default());
        assert_eq!(v.decimal_places, DecimalPlaces::default());
        assert_eq!(v.cell_colors[0].hex, "#fff");
        assert_eq!(v.cell_colors[0].id, "");
        assert_eq!(v.queries[0].query_config, QueryConfig::default());
        assert_eq!(v.queries[0].range, Some(Range { upper: 5, lower: 0 }));

        let config = &v.queries[1].query_config;
        assert_eq!(config.group_by, GroupBy::default());
        assert_eq!(config.shifts[0].label, "1d");
        assert_eq!(config.shifts[0].unit, "");
        assert_eq!(config.range.as_ref().map(|r| r.upper.as_str()), Some(""));
    }

    #[test]
    fn decode_unknown_discriminator_is_unrecognized() {
        let payload = json!({
            "id": "0188f0a0-0000-7000-8000-000000000001",
            "name": "x",
            "visualization": { "type": "chronograf-v9" }
        });
        let err = decode_cell(payload.to_string().as_bytes()).unwrap_err();
        assert_matches!(err, CodecError::UnrecognizedVariant(ref t) if t == "chronograf-v9");
        assert_eq!(err.to_string(), "unknown visualization type chronograf-v9");
    }

    #[test]
    fn decode_missing_discriminator_is_malformed() {
        let payload = json!({
            "id": "0188f0a0-0000-7000-8000-000000000001",
            "name": "x",
            "visualization": { "visualizationType": "line" }
        });
        let err = decode_cell(payload.to_string().as_bytes()).unwrap_err();
        assert_matches!(err, CodecError::MalformedPayload(_));
    }

    #[test]
    fn decode_missing_visualization_is_malformed() {
        let payload = json!({ "id": "0188f0a0-0000-7000-8000-000000000001", "name": "x" });
        let err = decode_cell(payload.to_string().as_bytes()).unwrap_err();
        assert_matches!(err, CodecError::MalformedPayload(_));
    }

    #[test]
    fn decode_garbage_is_malformed() {
        assert_matches!(decode_cell(b"{not json"), Err(CodecError::MalformedPayload(_)));
        assert_matches!(decode_cell(b"[]"), Err(CodecError::MalformedPayload(_)));
    }

    #[test]
    fn decode_bad_variant_body_is_malformed() {
        let payload = json!({
            "id": "0188f0a0-0000-7000-8000-000000000001",
            "name": "x",
            "visualization": { "type": "chronograf-v1", "queries": "nope" }
        });
        let err = decode_cell(payload.to_string().as_bytes()).unwrap_err();
        assert_matches!(err, CodecError::MalformedPayload(_));
    }

    #[test]
    fn new_cell_ignores_id() {
        let payload = json!({
            "id": "not-a-uuid",
            "name": "fresh",
            "visualization": { "type": "chronograf-v1", "visualizationType": "gauge" }
        });
        let new_cell = decode_new_cell(payload.to_string().as_bytes()).unwrap();
        assert_eq!(new_cell.name, "fresh");
        assert_matches!(new_cell.visualization, Visualization::V1(ref v) if v.visualization_type == "gauge");
    }

    #[test]
    fn cell_update_fields_are_optional() {
        let update = decode_cell_update(br#"{"name":"renamed"}"#).unwrap();
        assert_eq!(update.name.as_deref(), Some("renamed"));
        assert!(update.visualization.is_none());

        let update = decode_cell_update(
            br#"{"visualization":{"type":"chronograf-v1","visualizationType":"bar"}}"#,
        )
        .unwrap();
        assert!(update.name.is_none());
        assert!(update.visualization.is_some());
    }

    #[test]
    fn cell_update_rejects_unknown_variant() {
        let err = decode_cell_update(br#"{"visualization":{"type":"mystery"}}"#).unwrap_err();
        assert_matches!(err, CodecError::UnrecognizedVariant(_));
    }

    #[test]
    fn discriminators_are_unique() {
        let all: Vec<_> = registered_discriminators().collect();
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len(), "duplicate discriminator in {all:?}");
        assert!(all.contains(&"chronograf-v1"));
    }

    #[test]
    fn every_registered_variant_decodes_its_own_discriminator() {
        for discriminator in registered_discriminators() {
            let body = json!({ "type": discriminator });
            let vis = decode_visualization(body).unwrap();
            let encoded = encode_visualization(&vis).unwrap();
            assert_eq!(encoded[DISCRIMINATOR_KEY], discriminator);
        }
    }
}
