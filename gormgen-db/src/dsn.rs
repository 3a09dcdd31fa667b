//! Data source name for MySQL connections

use std::fmt;

use crate::error::{Error, Result};

/// Port used when the DSN leaves it empty.
pub const DEFAULT_PORT: u16 = 3306;

/// Connection parameters for a MySQL server.
///
/// Formats as `user:password@tcp(host:port)/dbname`. Host and port may be
/// empty, in which case the driver defaults apply when connecting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dsn {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub database: String,
}

impl Dsn {
    /// Create a DSN from its parts.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port: port.into(),
            database: database.into(),
        }
    }

    /// Same format as `Display`, with the password masked.
    pub fn redacted(&self) -> String {
        format!(
            "{}:***@tcp({}:{})/{}",
            self.user, self.host, self.port, self.database
        )
    }

    /// Numeric port, falling back to [`DEFAULT_PORT`] when empty.
    pub fn port_number(&self) -> Result<u16> {
        if self.port.is_empty() {
            return Ok(DEFAULT_PORT);
        }
        self.port
            .parse()
            .map_err(|_| Error::Connection(format!("invalid port: {:?}", self.port)))
    }

    /// Build driver options from the DSN parts.
    ///
    /// Parts are passed to the driver individually, so credentials containing
    /// URL-reserved characters need no escaping.
    pub fn to_opts(&self) -> Result<mysql_async::Opts> {
        let mut builder = mysql_async::OptsBuilder::default()
            .tcp_port(self.port_number()?)
            .user(Some(self.user.clone()))
            .pass(Some(self.password.clone()))
            .db_name(Some(self.database.clone()));

        if !self.host.is_empty() {
            builder = builder.ip_or_hostname(self.host.clone());
        }

        Ok(builder.into())
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@tcp({}:{})/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}
