//! Declared package name of a scanned directory tree.

use crate::analyzers::go::parser::{package_name, parse_file};
use crate::core::GO_TEST_SUFFIX;
use crate::errors::ResolveError;
use crate::io::find_go_files;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the single package declared by every `.go` file under `root`.
///
/// The first non-test file fixes the name; every other non-test file must
/// agree. `_test.go` files may also use the external `<name>_test` package.
pub fn resolve_package_name(root: &Path) -> Result<String, ResolveError> {
    let mut declared = Vec::new();
    for path in find_go_files(root)? {
        let tree = parse_file(&path)?;
        let name = package_name(&tree)
            .ok_or_else(|| ResolveError::MissingPackageClause { path: path.clone() })?;
        declared.push((path, name));
    }

    let (expected_in, expected) = primary_package(&declared).ok_or_else(|| {
        ResolveError::NoSourceFiles {
            dir: root.to_path_buf(),
        }
    })?;

    for (path, name) in &declared {
        let agrees = name == &expected
            || (is_test_file(path) && name.strip_suffix("_test") == Some(expected.as_str()));
        if !agrees {
            return Err(ResolveError::PackageMismatch {
                expected,
                expected_in,
                found: name.clone(),
                found_in: path.clone(),
            });
        }
    }

    debug!(package = %expected, files = declared.len(), "Resolved package name");
    Ok(expected)
}

fn primary_package(declared: &[(PathBuf, String)]) -> Option<(PathBuf, String)> {
    declared
        .iter()
        .find(|(path, _)| !is_test_file(path))
        .or_else(|| declared.first())
        .map(|(path, name)| {
            let base = name.strip_suffix("_test").unwrap_or(name);
            (path.clone(), base.to_string())
        })
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(GO_TEST_SUFFIX))
}
