//! Module base path from a `go.mod` manifest.

use crate::errors::ResolveError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

pub const MANIFEST_FILE: &str = "go.mod";
const MODULE_KEYWORD: &str = "module";

/// Read the `module <path>` directive from `dir/go.mod`.
pub fn resolve_module_base_path(dir: &Path) -> Result<String, ResolveError> {
    let manifest = dir.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return Err(ResolveError::ManifestNotFound {
            dir: dir.to_path_buf(),
        });
    }

    let read_error = |source: std::io::Error| ResolveError::ManifestRead {
        path: manifest.clone(),
        source,
    };
    let reader = BufReader::new(File::open(&manifest).map_err(read_error)?);

    for line in reader.lines() {
        let line = line.map_err(read_error)?;
        if let Some(path) = parse_module_line(&line) {
            debug!(module = %path, manifest = %manifest.display(), "Resolved module path");
            return Ok(path);
        }
    }

    Err(ResolveError::MissingModuleDirective { path: manifest })
}

/// Extract the path from a `module` directive line.
///
/// Handles a trailing `//` comment and the quoted form `module "path"`.
pub fn parse_module_line(line: &str) -> Option<String> {
    let rest = line.strip_prefix(MODULE_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = match rest.find("//") {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    let path = rest.trim();
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
