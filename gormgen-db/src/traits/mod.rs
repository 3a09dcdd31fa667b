//! Core traits for gormgen-db

mod catalog;

pub use catalog::{Catalog, ColumnType};
