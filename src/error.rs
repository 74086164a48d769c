//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::error_body;

pub const CONNECTION_FAILED: &str = "Database connection failed";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid DB_PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Failure while talking to the catalog database. The driver error is kept for logging only.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("query: {0}")]
    Query(#[source] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}", CONNECTION_FAILED)]
    ConnectionFailed,
    /// Query failed after a connection was obtained; carries the route's message.
    #[error("{0}")]
    QueryFailed(&'static str),
    #[error("{}", ENDPOINT_NOT_FOUND)]
    NotFound,
    #[error("{}", INTERNAL_SERVER_ERROR)]
    Internal,
}

impl AppError {
    /// Map a store failure to its HTTP error, logging the underlying driver error.
    pub fn from_store(err: StoreError, query_failure: &'static str) -> Self {
        match err {
            StoreError::Connection(e) => {
                tracing::error!(error = %e, "error while connecting to MySQL");
                AppError::ConnectionFailed
            }
            StoreError::Query(e) => {
                tracing::error!(error = %e, "{}", query_failure);
                AppError::QueryFailed(query_failure)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ConnectionFailed | AppError::QueryFailed(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(error_body(&self.to_string()))).into_response()
    }
}
