use crate::core::GO_SOURCE_EXTENSION;
use crate::errors::ScanError;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Recursive walker that yields every Go source file under a root.
///
/// No filtering is applied to directories: hidden entries, `.gitignore`d
/// paths and vendored trees are all visited. Entries are sorted by file name
/// so repeated walks see files in the same order.
pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();

            if is_file_like(&entry) && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == GO_SOURCE_EXTENSION)
    }
}

/// Regular files, plus symlinks whose target is a file. Symlinked
/// directories are not descended into.
fn is_file_like(entry: &ignore::DirEntry) -> bool {
    entry
        .file_type()
        .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && entry.path().is_file()))
}

pub fn find_go_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    FileWalker::new(root.to_path_buf()).walk()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_finds_nested_go_files_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("a.go"), "package a").unwrap();
        fs::write(root.join("README.md"), "# readme").unwrap();
        fs::write(root.join("nested/deeper/b.go"), "package a").unwrap();
        fs::write(root.join(".hidden/c.go"), "package a").unwrap();
        fs::write(root.join("nested/notes.go.txt"), "").unwrap();

        let files = find_go_files(root).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from(".hidden/c.go"),
                PathBuf::from("a.go"),
                PathBuf::from("nested/deeper/b.go"),
            ]
        );
    }

    #[test]
    fn test_walk_ignores_gitignore_rules() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join(".gitignore"), "skipped.go\n").unwrap();
        fs::write(root.join("skipped.go"), "package a").unwrap();

        let files = find_go_files(root).unwrap();
        assert_eq!(files, vec![root.join("skipped.go")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_includes_symlinked_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("pkg");
        let outside = temp.path().join("shared");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("real.go"), "package a").unwrap();
        std::os::unix::fs::symlink(outside.join("real.go"), root.join("linked.go")).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("linked_dir")).unwrap();

        let files = find_go_files(&root).unwrap();
        assert_eq!(files, vec![root.join("linked.go")]);
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(find_go_files(temp.path()).unwrap().is_empty());
    }
}
