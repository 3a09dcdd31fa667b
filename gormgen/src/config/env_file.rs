//! Loading of dotenv files into the process environment

use std::path::Path;

use tracing::debug;

use crate::error::{CodegenError, Result};

/// Load `KEY=VALUE` pairs from `path` into the process environment.
///
/// Returns `Ok(false)` when the path is empty or does not exist. Variables
/// that are already set keep their value.
pub fn load_env_file(path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() || !path.exists() {
        debug!("No env file at {:?}, skipping", path);
        return Ok(false);
    }

    dotenvy::from_path(path).map_err(|source| CodegenError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded env file {:?}", path);
    Ok(true)
}
