use crate::errors::{ConfigError, DirectoryError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "flowconfig.json";

/// Contents of `flowconfig.json`.
///
/// Relative paths are resolved against the working directory of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowConfig {
    /// Directory holding the Go package to scan
    pub dir_name: PathBuf,

    /// Directory the registry file is written to
    pub out_dir: PathBuf,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            dir_name: PathBuf::from("handlers"),
            out_dir: PathBuf::from("output"),
        }
    }
}

impl FlowConfig {
    // Pure function: reject fields that deserialized but carry no path
    fn validate(&self) -> Result<(), ConfigError> {
        if self.dir_name.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField { field: "dir_name" });
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyField { field: "out_dir" });
        }
        Ok(())
    }

    /// Final path segment of the scanned directory.
    pub fn dir_base_name(&self) -> Option<String> {
        self.dir_name
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Pure function to parse and validate config from a JSON string
pub fn parse_config(contents: &str, path: &Path) -> Result<FlowConfig, ConfigError> {
    let config: FlowConfig =
        serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> Result<FlowConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    tracing::debug!(
        path = %path.display(),
        dir_name = %config.dir_name.display(),
        out_dir = %config.out_dir.display(),
        "Loaded config"
    );
    Ok(config)
}

/// Check that the directory to scan exists and is a directory
pub fn validate_dir(dir: &Path) -> Result<(), DirectoryError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(DirectoryError::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DirectoryError::NotFound {
            path: dir.to_path_buf(),
        }),
        Err(source) => Err(DirectoryError::Io {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Pretty-printed starter configuration
pub fn default_config_json() -> String {
    let config = FlowConfig::default();
    format!(
        "{{\n  \"dir_name\": {},\n  \"out_dir\": {}\n}}\n",
        serde_json::Value::from(config.dir_name.to_string_lossy().into_owned()),
        serde_json::Value::from(config.out_dir.to_string_lossy().into_owned()),
    )
}
