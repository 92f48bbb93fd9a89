//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod cell_repo;
pub mod org_config_repo;

pub use cell_repo::CellRepo;
pub use org_config_repo::OrgConfigRepo;
