//! Catalog trait for schema introspection

use crate::error::Result;
use async_trait::async_trait;

/// One column as reported by the database catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    /// Column name, verbatim
    pub name: String,
    /// Bare engine type name (e.g. `varchar`, `int`, `json`)
    pub database_type_name: String,
    /// Full column declaration (e.g. `varchar(255)`, `int unsigned`)
    pub column_type: String,
}

impl ColumnType {
    /// Create a column descriptor whose full declaration equals its type name.
    pub fn new(name: impl Into<String>, database_type_name: impl Into<String>) -> Self {
        let database_type_name = database_type_name.into();
        Self {
            name: name.into(),
            column_type: database_type_name.clone(),
            database_type_name,
        }
    }
}

/// Trait for anything that can describe the columns of a table.
///
/// Implementations must return columns in catalog order (ordinal position)
/// and report a missing table as [`crate::Error::TableNotFound`].
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the column descriptors of `table`.
    async fn column_types(&self, table: &str) -> Result<Vec<ColumnType>>;
}

#[async_trait]
impl<C: Catalog + ?Sized> Catalog for &C {
    async fn column_types(&self, table: &str) -> Result<Vec<ColumnType>> {
        (**self).column_types(table).await
    }
}
