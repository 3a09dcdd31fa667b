//! gormgen-db - database access for gormgen
//!
//! Opens a MySQL connection from a [`Dsn`] and exposes the column catalog of
//! individual tables through the [`Catalog`] trait.
//!
//! # Example
//!
//! ```ignore
//! use gormgen_db::{Catalog, Dsn, MySqlPool};
//!
//! async fn columns(dsn: &Dsn) -> gormgen_db::Result<()> {
//!     let pool = MySqlPool::connect(dsn).await?;
//!     for column in pool.column_types("users").await? {
//!         println!("{} {}", column.name, column.database_type_name);
//!     }
//!     pool.disconnect().await
//! }
//! ```

pub mod dsn;
pub mod error;
pub mod mysql;
pub mod traits;

pub use dsn::Dsn;
pub use error::{Error, Result};
pub use mysql::MySqlPool;
pub use traits::{Catalog, ColumnType};
