//! MySQL implementation for gormgen-db

mod pool;
mod row;

pub use pool::MySqlPool;
