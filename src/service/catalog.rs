//! Executes catalog queries, one scoped connection per call.

use crate::error::StoreError;
use crate::sql::CatalogQuery;
use crate::store::{Connector, Provisioner};
use async_trait::async_trait;
use serde_json::Value;

/// Source of catalog rows. Each row is a JSON object keyed by column name.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Value>, StoreError>;
}

/// Catalog over any [`Connector`]: acquire, run the query's statement, release on every path.
pub struct SqlCatalog<C> {
    connector: C,
}

pub type MySqlCatalog = SqlCatalog<Provisioner>;

impl<C: Connector> SqlCatalog<C> {
    pub fn new(connector: C) -> Self {
        SqlCatalog { connector }
    }
}

#[async_trait]
impl<C: Connector> Catalog for SqlCatalog<C> {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Value>, StoreError> {
        let mut conn = self.connector.acquire().await?;
        let result = match query.to_sql() {
            Some(q) => self.connector.run(&mut conn, &q).await,
            None => Ok(Vec::new()),
        };
        self.connector.release(conn).await;
        result
    }
}
