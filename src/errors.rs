//! Error taxonomy for flowgen.
//!
//! Every sub-operation has its own error enum carrying the path involved and
//! the underlying cause. The pipeline wraps them into [`Error`], whose variant
//! names the failure category and whose message adds human-readable context,
//! so the full chain `category: context -> cause -> ...` survives to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by the generate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {context}")]
    Config {
        context: String,
        #[source]
        source: ConfigError,
    },

    #[error("directory error: {context}")]
    Directory {
        context: String,
        #[source]
        source: DirectoryError,
    },

    #[error("extraction error: {context}")]
    Extract {
        context: String,
        #[source]
        source: ScanError,
    },

    #[error("package resolution error: {context}")]
    PackageResolution {
        context: String,
        #[source]
        source: ResolveError,
    },

    #[error("module resolution error: {context}")]
    ModuleResolution {
        context: String,
        #[source]
        source: ResolveError,
    },

    #[error("output error: {context}")]
    Output {
        context: String,
        #[source]
        source: GenError,
    },
}

impl Error {
    pub fn config(context: impl Into<String>, source: ConfigError) -> Self {
        Self::Config {
            context: context.into(),
            source,
        }
    }

    pub fn directory(context: impl Into<String>, source: DirectoryError) -> Self {
        Self::Directory {
            context: context.into(),
            source,
        }
    }

    pub fn extract(context: impl Into<String>, source: ScanError) -> Self {
        Self::Extract {
            context: context.into(),
            source,
        }
    }

    pub fn package_resolution(context: impl Into<String>, source: ResolveError) -> Self {
        Self::PackageResolution {
            context: context.into(),
            source,
        }
    }

    pub fn module_resolution(context: impl Into<String>, source: ResolveError) -> Self {
        Self::ModuleResolution {
            context: context.into(),
            source,
        }
    }

    pub fn output(context: impl Into<String>, source: GenError) -> Self {
        Self::Output {
            context: context.into(),
            source,
        }
    }

    /// Short category name, useful for structured log fields.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Directory { .. } => "directory",
            Self::Extract { .. } => "extract",
            Self::PackageResolution { .. } => "package",
            Self::ModuleResolution { .. } => "module",
            Self::Output { .. } => "output",
        }
    }
}

/// Failures while loading `flowconfig.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config format in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("config file {} already exists (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("unable to write config file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures validating the directory to scan.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("unable to inspect '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while walking and parsing the source tree.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser produced no tree for {}", path.display())]
    Parse { path: PathBuf },

    #[error("syntax error in {}:{line}:{column}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },
}

/// Failures resolving the package name or the module base path.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no Go files found in directory: {}", dir.display())]
    NoSourceFiles { dir: PathBuf },

    #[error("no package clause in {}", path.display())]
    MissingPackageClause { path: PathBuf },

    #[error(
        "{} declares package `{found}` but {} declares package `{expected}`",
        found_in.display(),
        expected_in.display()
    )]
    PackageMismatch {
        expected: String,
        expected_in: PathBuf,
        found: String,
        found_in: PathBuf,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("go.mod file not found in directory: {}", dir.display())]
    ManifestNotFound { dir: PathBuf },

    #[error("error reading {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("module name not found in {}", path.display())]
    MissingModuleDirective { path: PathBuf },
}

/// Failures writing the generated registry.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
