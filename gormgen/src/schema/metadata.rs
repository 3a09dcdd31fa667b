//! Metadata structures for introspected tables

use gormgen_db::ColumnType;

/// Metadata for a database table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    /// Table name, exactly as requested
    pub name: String,

    /// Columns in catalog order
    pub columns: Vec<ColumnMetadata>,
}

/// Metadata for a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Column name
    pub name: String,

    /// Bare database type name (e.g., "varchar", "json")
    pub data_type: String,

    /// Full column declaration (e.g., "varchar(255)")
    pub column_type: String,
}

impl From<ColumnType> for ColumnMetadata {
    fn from(c: ColumnType) -> Self {
        Self {
            name: c.name,
            data_type: c.database_type_name,
            column_type: c.column_type,
        }
    }
}
