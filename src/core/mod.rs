pub mod ast;
pub mod shape;

use std::collections::BTreeMap;

pub use ast::{FunctionDeclaration, Parameter, SourceTree};
pub use shape::TypeShape;

/// Matching function names keyed by name; each name maps to itself.
///
/// Sorted so that everything downstream of a scan is emitted in a stable order.
pub type FunctionMap = BTreeMap<String, String>;

/// Canonical Go source-file suffix.
pub const GO_SOURCE_EXTENSION: &str = "go";

/// Suffix of Go test files, which may declare an external `<pkg>_test` package.
pub const GO_TEST_SUFFIX: &str = "_test.go";
