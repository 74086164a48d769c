//! Connection provisioning: one fresh MySQL connection per request, closed when the request is done.

use crate::config::DbConfig;
use crate::error::StoreError;
use crate::service::rows::query_many;
use crate::sql::QueryBuf;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

/// Scoped connection source: every `acquire` is paired with exactly one `release`.
#[async_trait]
pub trait Connector: Send + Sync {
    type Conn: Send;

    async fn acquire(&self) -> Result<Self::Conn, StoreError>;

    /// Run one statement and return its rows as JSON objects.
    async fn run(&self, conn: &mut Self::Conn, q: &QueryBuf) -> Result<Vec<Value>, StoreError>;

    async fn release(&self, conn: Self::Conn);
}

/// Opens connections from a fixed [`DbConfig`]. No pooling: every `acquire` dials the server.
#[derive(Clone, Debug)]
pub struct Provisioner {
    config: DbConfig,
}

impl Provisioner {
    pub fn new(config: DbConfig) -> Self {
        Provisioner { config }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        let mut opts = MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port);
        if let Some(user) = &self.config.user {
            opts = opts.username(user);
        }
        if let Some(password) = &self.config.password {
            opts = opts.password(password);
        }
        if let Some(database) = &self.config.database {
            opts = opts.database(database);
        }
        opts
    }
}

#[async_trait]
impl Connector for Provisioner {
    type Conn = MySqlConnection;

    /// Network, auth and availability failures all become `StoreError::Connection`.
    async fn acquire(&self) -> Result<MySqlConnection, StoreError> {
        let conn = self
            .connect_options()
            .connect()
            .await
            .map_err(StoreError::Connection)?;
        tracing::info!(host = %self.config.host, port = self.config.port, "connected to MySQL database");
        Ok(conn)
    }

    async fn run(&self, conn: &mut MySqlConnection, q: &QueryBuf) -> Result<Vec<Value>, StoreError> {
        query_many(conn, q).await
    }

    /// A failed close is only logged.
    async fn release(&self, conn: MySqlConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "error while closing MySQL connection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let provisioner = Provisioner::new(DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DbConfig::default()
        });
        let err = provisioner.acquire().await.unwrap_err();
        assert!(matches!(err, StoreError::Connection(_)));
    }
}
