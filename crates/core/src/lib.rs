//! Domain layer for the vizdeck dashboard backend.
//!
//! Holds the dashboard cell model and its tagged-visualization codec, the
//! per-organization log viewer configuration and its validator, and the
//! store traits plus the organization-scoped facade that the `db` and `api`
//! crates build on. Nothing in here talks to a database or to HTTP.

pub mod cell;
pub mod codec;
pub mod error;
pub mod log_viewer;
pub mod org_config;
pub mod org_scope;
pub mod store;
pub mod types;
pub mod visualization;
