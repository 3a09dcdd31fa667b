//! Decoding of catalog rows

use crate::error::{Error, Result};
use crate::traits::ColumnType;
use mysql_async::Row as MySqlAsyncRow;

/// Read a text column from a catalog row by its alias.
fn text(row: &MySqlAsyncRow, column: &str) -> Result<String> {
    match row.get_opt::<String, _>(column) {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(Error::RowDecode(format!("{}: {}", column, e))),
        None => Err(Error::ColumnNotFound(column.to_string())),
    }
}

/// Build a [`ColumnType`] from one `information_schema.COLUMNS` row.
pub(crate) fn column_type_from_row(row: &MySqlAsyncRow) -> Result<ColumnType> {
    Ok(ColumnType {
        name: text(row, "column_name")?,
        database_type_name: text(row, "data_type")?,
        column_type: text(row, "column_type")?,
    })
}
