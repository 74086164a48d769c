//! Integer id path segment. Anything that is not a plain non-negative integer is treated as an unknown route.

use crate::error::AppError;
use crate::sql::RowId;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for the single `:id` segment of the relation routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogId(pub RowId);

#[async_trait]
impl<S> FromRequestParts<S> for CatalogId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        RowId::parse(&raw).map(CatalogId).ok_or(AppError::NotFound)
    }
}
