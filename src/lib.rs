//! Registry generator for Go flow handlers.
//!
//! Scans a Go package for functions shaped like
//! `func Name(ctx *flow.ProcessContext, in []flow.DefinedInput)` and writes an
//! `out.go` file that maps each function name to the function itself.

pub mod analyzers;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod resolve;

// Re-export commonly used types
pub use crate::analyzers::{scan, ParsePolicy, Scanner, Signature};
pub use crate::codegen::{generate, render, Registry};
pub use crate::config::{load_config, validate_dir, FlowConfig};
pub use crate::core::{FunctionDeclaration, FunctionMap, SourceTree, TypeShape};
pub use crate::errors::{ConfigError, DirectoryError, Error, GenError, ResolveError, ScanError};
pub use crate::resolve::{resolve_module_base_path, resolve_package_name, ImportPath};
