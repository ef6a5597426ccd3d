//! The generate pipeline: config, validate, scan, resolve, write.

use crate::analyzers::{ParsePolicy, Scanner};
use crate::codegen::{self, Registry};
use crate::config::{load_config, validate_dir};
use crate::errors::{Error, Result};
use crate::resolve::{resolve_module_base_path, resolve_package_name, ImportPath};
use std::path::PathBuf;
use tracing::{info, info_span, warn};

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub config_path: PathBuf,
    /// Directory containing `go.mod`
    pub module_dir: PathBuf,
    pub policy: ParsePolicy,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output: PathBuf,
    pub import_path: ImportPath,
    pub registry: Registry,
}

pub fn process_functions(options: &GenerateConfig) -> Result<GenerateOutcome> {
    let _span = info_span!("generate", config = %options.config_path.display()).entered();

    let config = load_config(&options.config_path)
        .map_err(|e| Error::config("error loading config", e))?;

    validate_dir(&config.dir_name)
        .map_err(|e| Error::directory("configuration directory error", e))?;

    let functions = {
        let _span = info_span!("extract").entered();
        Scanner::new(options.policy)
            .scan(&config.dir_name)
            .map_err(|e| {
                Error::extract(
                    format!(
                        "error extracting functions from {}",
                        config.dir_name.display()
                    ),
                    e,
                )
            })?
    };
    info!(count = functions.len(), "Extracted handler functions");

    let package_name = resolve_package_name(&config.dir_name)
        .map_err(|e| Error::package_resolution("error extracting package name", e))?;

    let base_path = resolve_module_base_path(&options.module_dir)
        .map_err(|e| Error::module_resolution("error extracting module base path", e))?;

    if let Some(dir_base) = config.dir_base_name() {
        if dir_base != package_name {
            warn!(
                directory = %dir_base,
                package = %package_name,
                "Directory name differs from declared package; using the package name"
            );
        }
    }

    let import_path = ImportPath::new(base_path, package_name);
    let registry = Registry::register(functions);

    let output = codegen::generate(
        &config.out_dir,
        &import_path.package_name,
        &registry,
        &import_path,
    )
    .map_err(|e| Error::output("error creating output file", e))?;

    Ok(GenerateOutcome {
        output,
        import_path,
        registry,
    })
}
