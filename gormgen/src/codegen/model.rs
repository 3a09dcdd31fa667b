//! Render model built from an introspected table

use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use super::naming::{to_field_name, to_type_name};
use super::type_resolver::{GoType, TypeResolver};
use crate::schema::TableMetadata;

/// One struct field of a generated model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Go field name (PascalCase)
    pub name: String,
    /// Original column name, used as the GORM column tag
    pub gorm_name: String,
    /// Mapped Go type
    pub go_type: GoType,
}

/// Everything needed to render one model file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Generated type name (singular, PascalCase)
    pub type_name: String,
    /// Database table name, returned verbatim by `TableName()`
    pub db_table_name: String,
    /// Fields in catalog order
    pub columns: Vec<Column>,
    /// Import paths required by the field types
    pub imports: BTreeSet<&'static str>,
}

impl Table {
    /// Map every column of `table` to a Go field and collect the imports.
    pub fn from_metadata(table: &TableMetadata) -> Self {
        let mut imports = BTreeSet::new();

        let columns: Vec<Column> = table
            .columns
            .iter()
            .map(|col| {
                let go_type = TypeResolver::resolve(&col.data_type);
                if let Some(import) = go_type.import() {
                    imports.insert(import);
                }
                Column {
                    name: to_field_name(&col.name),
                    gorm_name: col.name.clone(),
                    go_type,
                }
            })
            .collect();

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                warn!(
                    "Table {}: more than one column maps to field {}",
                    table.name, column.name
                );
            }
        }

        Self {
            type_name: to_type_name(&table.name),
            db_table_name: table.name.clone(),
            columns,
            imports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnMetadata;

    fn make_table(name: &str, columns: &[(&str, &str)]) -> TableMetadata {
        TableMetadata {
            name: name.to_string(),
            columns: columns
                .iter()
                .map(|(name, data_type)| ColumnMetadata {
                    name: name.to_string(),
                    data_type: data_type.to_string(),
                    column_type: data_type.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_users_table() {
        let table = Table::from_metadata(&make_table(
            "users",
            &[("id", "int"), ("email", "varchar"), ("created_at", "datetime")],
        ));

        assert_eq!(table.type_name, "User");
        assert_eq!(table.db_table_name, "users");
        assert_eq!(
            table.columns,
            vec![
                Column {
                    name: "Id".into(),
                    gorm_name: "id".into(),
                    go_type: GoType::Int,
                },
                Column {
                    name: "Email".into(),
                    gorm_name: "email".into(),
                    go_type: GoType::String,
                },
                Column {
                    name: "CreatedAt".into(),
                    gorm_name: "created_at".into(),
                    go_type: GoType::Time,
                },
            ]
        );
        assert_eq!(table.imports.into_iter().collect::<Vec<_>>(), vec!["time"]);
    }

    #[test]
    fn test_imports_are_deduplicated() {
        let table = Table::from_metadata(&make_table(
            "events",
            &[
                ("payload", "json"),
                ("headers", "json"),
                ("context", "JSON"),
                ("created_at", "datetime"),
                ("updated_at", "timestamp"),
                ("name", "varchar"),
            ],
        ));

        assert_eq!(table.imports.len(), 2);
        assert!(table.imports.contains("encoding/json"));
        assert!(table.imports.contains("time"));
    }

    #[test]
    fn test_no_imports() {
        let table = Table::from_metadata(&make_table("tags", &[("id", "bigint"), ("label", "text")]));
        assert_eq!(table.type_name, "Tag");
        assert!(table.imports.is_empty());
    }
}
