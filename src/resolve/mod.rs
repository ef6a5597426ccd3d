//! Resolution of the import path under which the scanned package is reachable.

pub mod module;
pub mod package;

pub use module::{parse_module_line, resolve_module_base_path, MANIFEST_FILE};
pub use package::resolve_package_name;

use std::fmt;

/// `<module base path>/<package name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPath {
    pub base_path: String,
    pub package_name: String,
}

impl ImportPath {
    pub fn new(base_path: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            package_name: package_name.into(),
        }
    }

    /// Final path segment, which Go uses as the default import name.
    pub fn last_segment(&self) -> &str {
        &self.package_name
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base_path, self.package_name)
    }
}
