//! Directory scanner that collects registrable handler functions.

use super::declarations::extract_functions;
use super::parser::{parse_file, syntax_error};
use super::signature::Signature;
use crate::core::{FunctionMap, GO_TEST_SUFFIX};
use crate::errors::ScanError;
use crate::io::find_go_files;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, info_span, warn};

/// How files containing syntax errors are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Keep the well-formed declarations of a malformed file and carry on.
    #[default]
    Lenient,
    /// Abort the scan at the first file containing a syntax error.
    Strict,
}

pub struct Scanner {
    signature: Signature,
    policy: ParsePolicy,
}

impl Scanner {
    pub fn new(policy: ParsePolicy) -> Self {
        Self {
            signature: Signature::flow(),
            policy,
        }
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    /// Walk `root` and map every matching function name to itself.
    pub fn scan(&self, root: &Path) -> Result<FunctionMap, ScanError> {
        let _span = info_span!("scan", root = %root.display()).entered();

        let mut functions = FunctionMap::new();
        let mut origins: HashMap<String, PathBuf> = HashMap::new();

        for path in find_go_files(root)? {
            if is_test_file(&path) {
                debug!(path = %path.display(), "Skipping test file");
                continue;
            }
            for name in self.scan_file(&path)? {
                if let Some(previous) = origins.insert(name.clone(), path.clone()) {
                    warn!(
                        function = %name,
                        first = %previous.display(),
                        second = %path.display(),
                        "Duplicate handler name; keeping the last one"
                    );
                }
                functions.insert(name.clone(), name);
            }
        }

        debug!(count = functions.len(), "Scan complete");
        Ok(functions)
    }

    /// Names of matching functions declared in a single file.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<String>, ScanError> {
        let _span = debug_span!("scan_file", path = %path.display()).entered();
        let tree = parse_file(path)?;

        if let Some(err) = syntax_error(&tree) {
            match self.policy {
                ParsePolicy::Strict => return Err(err),
                ParsePolicy::Lenient => warn!(
                    error = %err,
                    "Syntax errors found; only well-formed declarations are considered"
                ),
            }
        }

        let names = extract_functions(&tree)
            .into_iter()
            .filter(|decl| {
                let matched = self.signature.matches_declaration(decl);
                debug!(function = %decl.name, line = decl.line, matched, "Checked declaration");
                matched
            })
            .map(|decl| decl.name)
            .collect();

        Ok(names)
    }
}

/// Functions in `_test.go` files are invisible to importing packages.
fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(GO_TEST_SUFFIX))
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ParsePolicy::default())
    }
}

/// Scan `root` with the default (lenient) policy.
pub fn scan(root: &Path) -> Result<FunctionMap, ScanError> {
    Scanner::default().scan(root)
}
