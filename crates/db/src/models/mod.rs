//! Row structs for the persisted tables.
//!
//! Each row keeps its JSON documents as `serde_json::Value`; conversion into
//! the domain types happens in the stores so decode failures surface as
//! store errors.

pub mod cell;
pub mod org_config;
