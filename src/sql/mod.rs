//! Fixed catalog statements: identifiers are literals, request values are bound parameters.

mod builder;
pub use builder::*;
