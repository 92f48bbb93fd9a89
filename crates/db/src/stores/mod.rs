//! Implementations of the `vizdeck_core::store` traits.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryCellStore, MemoryOrganizationConfigStore};
pub use postgres::{PgCellStore, PgOrganizationConfigStore};
