//! Rendering of the registry into a Go source file.

use super::registry::Registry;
use crate::errors::GenError;
use crate::resolve::ImportPath;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const OUTPUT_FILE: &str = "out.go";
pub const OUTPUT_PACKAGE: &str = "output";
pub const RUNTIME_IMPORT: &str = "github.com/e4coder/flow";

/// Render the registry as Go source.
///
/// Entries are emitted in name order, so identical inputs always produce
/// identical bytes. The scanned package is only imported when at least one
/// function is registered; an unused import would not compile.
pub fn render(package_alias: &str, registry: &Registry, import_path: &ImportPath) -> String {
    let mut out = String::new();

    out.push_str("// Code generated by flowgen. DO NOT EDIT.\n\n");
    out.push_str(&format!("package {}\n\n", OUTPUT_PACKAGE));

    let mut imports = vec![format!("\"{}\"", RUNTIME_IMPORT)];
    if !registry.is_empty() {
        let path = import_path.to_string();
        if import_path.last_segment() == package_alias {
            imports.push(format!("\"{}\"", path));
        } else {
            imports.push(format!("{} \"{}\"", package_alias, path));
        }
    }
    imports.sort_by(|a, b| import_sort_key(a).cmp(import_sort_key(b)));

    out.push_str("import (\n\t\"fmt\"\n\n");
    for import in &imports {
        out.push_str(&format!("\t{}\n", import));
    }
    out.push_str(")\n\n");

    out.push_str("var FuncMap = make(map[string]flow.ProcessHandler)\n\n");

    out.push_str("func Init() {\n");
    for (name, function) in registry.iter() {
        out.push_str(&format!(
            "\tFuncMap[\"{}\"] = {}.{}\n",
            name, package_alias, function
        ));
    }
    out.push_str("}\n\n");

    out.push_str(concat!(
        "func GetFuncByName(name string) (flow.ProcessHandler, error) {\n",
        "\tfn, ok := FuncMap[name]\n",
        "\tif !ok {\n",
        "\t\treturn nil, fmt.Errorf(\"function %s not found\", name)\n",
        "\t}\n",
        "\treturn fn, nil\n",
        "}\n",
    ));

    out
}

/// gofmt orders imports by path, ignoring any alias.
fn import_sort_key(import: &str) -> &str {
    import.find('"').map_or(import, |idx| &import[idx..])
}

/// Write `out_dir/out.go`, creating the directory and replacing any existing file.
pub fn generate(
    out_dir: &Path,
    package_alias: &str,
    registry: &Registry,
    import_path: &ImportPath,
) -> Result<PathBuf, GenError> {
    crate::io::ensure_dir(out_dir).map_err(|source| GenError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let out_file = out_dir.join(OUTPUT_FILE);
    let content = render(package_alias, registry, import_path);
    debug!(bytes = content.len(), "Rendered registry");

    crate::io::write_file(&out_file, &content).map_err(|source| GenError::Write {
        path: out_file.clone(),
        source,
    })?;

    info!(
        path = %out_file.display(),
        functions = registry.len(),
        "Wrote registry"
    );
    Ok(out_file)
}
