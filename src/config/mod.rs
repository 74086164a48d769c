//! Process configuration: database connection settings and listener address.

pub mod types;
pub mod loader;

pub use types::*;
pub use loader::*;
