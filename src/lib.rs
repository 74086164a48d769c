//! Pokédex API: read-only JSON over the Pokémon / Poké Ball compatibility tables in MySQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DbConfig, ServerConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use server::{build_router, serve};
pub use service::{Catalog, MySqlCatalog, SqlCatalog};
pub use sql::{CatalogQuery, QueryBuf, RowId};
pub use state::AppState;
pub use store::{Connector, Provisioner};
