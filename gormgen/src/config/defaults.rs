//! Default configuration values - single source of truth

/// Default destination directory for generated models
pub const DEST: &str = ".";

/// Default Go package name of the generated files
pub const PACKAGE: &str = "models";

/// File extension of the generated files
pub const EXTENSION: &str = "go";

/// Whether to run in dry-run mode by default
pub const DRY_RUN: bool = false;

/// Environment variables consulted when the matching flag is empty
pub const ENV_KEYS: &[&str] = &[
    "DB_USER",
    "DB_PASSWORD",
    "DB_HOST",
    "DB_PORT",
    "DB_NAME",
    "TABLES",
];
