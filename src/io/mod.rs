pub mod walker;

pub use walker::{find_go_files, FileWalker};

use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

pub fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
