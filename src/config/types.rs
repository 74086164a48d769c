use std::fmt;
use std::net::SocketAddr;

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Connection settings for the catalog database. Built once at startup and handed to the provisioner.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub port: u16,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            host: DEFAULT_DB_HOST.to_string(),
            user: None,
            password: None,
            database: None,
            port: DEFAULT_DB_PORT,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_HTTP_PORT)),
        }
    }
}
