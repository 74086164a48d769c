//! HTTP handlers for the catalog routes and the JSON fallbacks.

pub mod pokedex;
pub use pokedex::*;
