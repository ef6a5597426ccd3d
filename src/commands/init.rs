use crate::config::default_config_json;
use crate::errors::ConfigError;
use crate::io;
use std::path::Path;

/// Write a starter `flowconfig.json`, refusing to clobber one unless forced.
pub fn init_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if io::file_exists(path) && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    io::write_file(path, &default_config_json()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Created configuration file");

    Ok(())
}
