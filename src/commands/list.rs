use crate::analyzers::{ParsePolicy, Scanner};
use crate::config::{load_config, validate_dir};
use crate::core::FunctionMap;
use crate::errors::{Error, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Directory to scan; falls back to `dir_name` from the config file
    pub dir: Option<PathBuf>,
    pub config_path: PathBuf,
    pub policy: ParsePolicy,
}

/// Scan for handler functions without writing anything.
pub fn list_functions(options: &ListConfig) -> Result<FunctionMap> {
    let dir = match &options.dir {
        Some(dir) => dir.clone(),
        None => {
            load_config(&options.config_path)
                .map_err(|e| Error::config("error loading config", e))?
                .dir_name
        }
    };

    validate_dir(&dir).map_err(|e| Error::directory("scan directory error", e))?;

    Scanner::new(options.policy)
        .scan(&dir)
        .map_err(|e| Error::extract(format!("error extracting functions from {}", dir.display()), e))
}

/// One name per line, or a JSON array when `json` is set.
pub fn format_functions(functions: &FunctionMap, json: bool) -> String {
    if json {
        let names: Vec<&str> = functions.keys().map(String::as_str).collect();
        let mut out = serde_json::Value::from(names).to_string();
        out.push('\n');
        out
    } else {
        functions.keys().map(|name| format!("{}\n", name)).collect()
    }
}

pub fn print_functions(functions: &FunctionMap, json: bool) {
    tracing::info!(count = functions.len(), "Listing handler functions");
    print!("{}", format_functions(functions, json));
}
