//! Catalog access: the store seam handlers talk to, and its SQL implementation.

pub mod catalog;
pub(crate) mod rows;
pub use catalog::*;
