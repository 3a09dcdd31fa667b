//! gormgen: Generate Go GORM model structs from a live MySQL schema
//!
//! For every requested table the generator reads the column catalog, maps each
//! MySQL type to a Go type and writes `<dest>/<TypeName>.go` containing:
//!
//! - a struct with one `gorm:"column:..."` tagged field per column
//! - a `TableName()` method returning the exact database table name
//!
//! Tables are processed one at a time in the order given. The first failure
//! stops the run; files already written for earlier tables are kept.
//!
//! # CLI Usage
//!
//! ```bash
//! gormgen --dbuser root --dbpassword secret --dbhost 127.0.0.1 --dbport 3306 \
//!     --dbname shop --tables users,order_items --dest ./models
//! ```
//!
//! Empty flags fall back to `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT`,
//! `DB_NAME` and `TABLES`, which may also come from a file given with `--env`.
//!
//! # Programmatic Usage
//!
//! ```rust,ignore
//! use gormgen_db::{Dsn, MySqlPool};
//!
//! let pool = MySqlPool::connect(&Dsn::new("root", "secret", "localhost", "3306", "shop")).await?;
//! let files = gormgen::GeneratorBuilder::new(&["users", "order_items"])
//!     .dest("internal/models")
//!     .generate(&pool)
//!     .await?;
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod schema;

use std::fs;
use std::path::Path;

use gormgen_db::Catalog;
use tracing::info;

pub use codegen::GeneratedFile;
pub use config::{GeneratorConfig, Overrides};
pub use error::{CodegenError, Result};

/// Main entry point for model generation
pub async fn generate<C: Catalog + ?Sized>(
    catalog: &C,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>> {
    let tables = config.table_names();
    info!("Generating {} models in {:?}", tables.len(), config.dest);

    if !config.dry_run {
        fs::create_dir_all(&config.dest).map_err(|source| CodegenError::WriteFile {
            path: config.dest.clone(),
            source,
        })?;
    }

    let mut generated = Vec::with_capacity(tables.len());
    for table_name in tables {
        let metadata = schema::introspect(catalog, table_name).await?;
        generated.push(codegen::generate_model_file(&metadata, config)?);
    }

    info!("Code generation complete");
    Ok(generated)
}

/// Introspect the requested tables without generating anything
pub async fn inspect<C: Catalog + ?Sized>(
    catalog: &C,
    config: &GeneratorConfig,
) -> Result<Vec<schema::TableMetadata>> {
    let mut tables = Vec::new();
    for table_name in config.table_names() {
        tables.push(schema::introspect(catalog, table_name).await?);
    }
    Ok(tables)
}

/// Builder pattern for generating models from code
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Create a new builder for the given tables
    pub fn new(tables: &[&str]) -> Self {
        Self {
            config: GeneratorConfig {
                tables: tables.join(","),
                ..Default::default()
            },
        }
    }

    /// Set the output directory
    pub fn dest(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.dest = dir.as_ref().to_path_buf();
        self
    }

    /// Set the Go package name
    pub fn package(mut self, name: &str) -> Self {
        self.config.package = name.to_string();
        self
    }

    /// Enable dry run mode (render without writing files)
    pub fn dry_run(mut self) -> Self {
        self.config.dry_run = true;
        self
    }

    /// Generate the models
    pub async fn generate<C: Catalog + ?Sized>(self, catalog: &C) -> Result<Vec<GeneratedFile>> {
        generate(catalog, &self.config).await
    }
}
