//! Column introspection through a [`Catalog`]

use gormgen_db::Catalog;
use tracing::debug;

use super::metadata::TableMetadata;
use crate::error::{CodegenError, Result};

/// Fetch the columns of `table` in catalog order.
pub async fn introspect<C: Catalog + ?Sized>(catalog: &C, table: &str) -> Result<TableMetadata> {
    let columns = catalog
        .column_types(table)
        .await
        .map_err(|source| CodegenError::Introspection {
            table: table.to_string(),
            source,
        })?;

    debug!("Table {} has {} columns", table, columns.len());

    Ok(TableMetadata {
        name: table.to_string(),
        columns: columns.into_iter().map(Into::into).collect(),
    })
}
