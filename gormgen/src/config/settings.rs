//! Configuration settings for gormgen

use config::{Config, Environment, File, Map};
use gormgen_db::Dsn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{CodegenError, Result};

/// Main configuration struct for model generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory the generated files are written to
    #[serde(default = "default_dest")]
    pub dest: PathBuf,

    /// Database user (`DB_USER`)
    #[serde(default)]
    pub db_user: String,

    /// Database password (`DB_PASSWORD`)
    #[serde(default)]
    pub db_password: String,

    /// Database host (`DB_HOST`), may be empty
    #[serde(default)]
    pub db_host: String,

    /// Database port (`DB_PORT`), may be empty
    #[serde(default)]
    pub db_port: String,

    /// Database name (`DB_NAME`)
    #[serde(default)]
    pub db_name: String,

    /// Comma-separated table names (`TABLES`)
    #[serde(default)]
    pub tables: String,

    /// Go package name written at the top of each file
    #[serde(default = "default_package")]
    pub package: String,

    /// Dry run mode - render without writing files
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,
}

// Default value functions for serde
fn default_dest() -> PathBuf {
    PathBuf::from(defaults::DEST)
}
fn default_package() -> String {
    defaults::PACKAGE.to_string()
}
fn default_dry_run() -> bool {
    defaults::DRY_RUN
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dest: default_dest(),
            db_user: String::new(),
            db_password: String::new(),
            db_host: String::new(),
            db_port: String::new(),
            db_name: String::new(),
            tables: String::new(),
            package: default_package(),
            dry_run: default_dry_run(),
        }
    }
}

/// Values given on the command line.
///
/// An empty string counts as not given, so the environment still applies.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dest: Option<PathBuf>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_host: Option<String>,
    pub db_port: Option<String>,
    pub db_name: Option<String>,
    pub tables: Option<String>,
    pub package: Option<String>,
    pub dry_run: bool,
}

impl Overrides {
    /// Non-empty string overrides keyed by config field name
    fn entries(&self) -> Vec<(&'static str, String)> {
        let dest = self
            .dest
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned());

        [
            ("dest", dest),
            ("db_user", self.db_user.clone()),
            ("db_password", self.db_password.clone()),
            ("db_host", self.db_host.clone()),
            ("db_port", self.db_port.clone()),
            ("db_name", self.db_name.clone()),
            ("tables", self.tables.clone()),
            ("package", self.package.clone()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
        .collect()
    }
}

/// Collect the recognised variables (`DB_USER`, ..., `TABLES`) from the
/// process environment.
pub fn process_env() -> Map<String, String> {
    defaults::ENV_KEYS
        .iter()
        .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
        .collect()
}

impl GeneratorConfig {
    /// Resolve configuration using config-rs.
    ///
    /// Layers, lowest priority first: defaults, the optional config file,
    /// `env` (keys such as `DB_USER` map to `db_user`), then `overrides`.
    pub fn load(
        config_path: Option<&Path>,
        env: Map<String, String>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::default().source(Some(env)));

        for (key, value) in overrides.entries() {
            builder = builder.set_override(key, value)?;
        }
        if overrides.dry_run {
            builder = builder.set_override("dry_run", true)?;
        }

        let config: GeneratorConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("--dbuser/DB_USER", &self.db_user),
            ("--dbpassword/DB_PASSWORD", &self.db_password),
            ("--dbname/DB_NAME", &self.db_name),
            ("--tables/TABLES", &self.tables),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(CodegenError::ValidationError(format!(
                "Database user, password, name, and tables are required (missing {})",
                missing.join(", ")
            )));
        }

        if self.package.is_empty() {
            return Err(CodegenError::ValidationError(
                "package is required".into(),
            ));
        }

        Ok(())
    }

    /// Requested table names in input order.
    ///
    /// Names are split on `,` and kept verbatim, surrounding whitespace
    /// included.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.split(',').collect()
    }

    /// Connection parameters for the configured database
    pub fn dsn(&self) -> Dsn {
        Dsn::new(
            &self.db_user,
            &self.db_password,
            &self.db_host,
            &self.db_port,
            &self.db_name,
        )
    }
}
