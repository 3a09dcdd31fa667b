//! MySQL connection pool implementation

use crate::dsn::Dsn;
use crate::error::{Error, Result};
use crate::traits::{Catalog, ColumnType};
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Pool as MysqlAsyncPool, Row as MySqlAsyncRow};
use tracing::debug;

use super::row::column_type_from_row;

const COLUMNS_SQL: &str = "SELECT \
        COLUMN_NAME AS column_name, \
        DATA_TYPE AS data_type, \
        COLUMN_TYPE AS column_type \
    FROM information_schema.COLUMNS \
    WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
    ORDER BY ORDINAL_POSITION";

/// A MySQL connection pool.
///
/// This wraps `mysql_async::Pool` and implements the [`Catalog`] trait.
///
/// # Example
///
/// ```ignore
/// use gormgen_db::{Catalog, Dsn, MySqlPool};
///
/// let pool = MySqlPool::connect(&Dsn::new("root", "secret", "localhost", "3306", "shop")).await?;
/// let columns = pool.column_types("users").await?;
/// ```
#[derive(Clone)]
pub struct MySqlPool {
    inner: MysqlAsyncPool,
}

impl MySqlPool {
    /// Open a pool for `dsn` and verify the server is reachable.
    ///
    /// Authentication, network and unknown-host failures surface here rather
    /// than on the first query.
    pub async fn connect(dsn: &Dsn) -> Result<Self> {
        let inner = MysqlAsyncPool::new(dsn.to_opts()?);

        let mut conn = inner.get_conn().await?;
        conn.ping().await?;
        drop(conn);
        debug!("Connected to {}", dsn.redacted());

        Ok(Self { inner })
    }

    /// Disconnect and drop the pool.
    pub async fn disconnect(self) -> Result<()> {
        self.inner.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl Catalog for MySqlPool {
    async fn column_types(&self, table: &str) -> Result<Vec<ColumnType>> {
        let mut conn = self.inner.get_conn().await?;

        let rows: Vec<MySqlAsyncRow> = conn.exec(COLUMNS_SQL, (table,)).await?;
        if rows.is_empty() {
            return Err(Error::TableNotFound(table.to_string()));
        }

        rows.iter().map(column_type_from_row).collect()
    }
}
