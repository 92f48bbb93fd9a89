pub mod cells;
pub mod org_config;
