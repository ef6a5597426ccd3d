//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HANDLERS_GO: &str = r#"package handlers

import "github.com/e4coder/flow"

func Fetch(ctx *flow.ProcessContext, in []flow.DefinedInput) {}

func Store(ctx *flow.ProcessContext, in []flow.DefinedInput) error {
	return nil
}

func helper(name string) string { return name }
"#;

/// A Go module rooted in a temp dir with a `handlers` package and a config.
pub struct Project {
    pub temp: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("go.mod"), "module example.org/widgets\n\ngo 1.22\n").unwrap();
        let project = Self { temp };
        project.write("handlers/handlers.go", HANDLERS_GO);
        project.write_config("handlers", "gen/output");
        project
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Config with paths relative to the project root.
    pub fn write_config(&self, dir_name: &str, out_dir: &str) {
        let body = serde_json::json!({ "dir_name": dir_name, "out_dir": out_dir });
        self.write("flowconfig.json", &body.to_string());
    }

    /// Config with absolute paths, for in-process tests that cannot chdir.
    pub fn write_absolute_config(&self, dir_name: &str, out_dir: &str) -> PathBuf {
        let body = serde_json::json!({
            "dir_name": self.path(dir_name),
            "out_dir": self.path(out_dir),
        });
        self.write("flowconfig.abs.json", &body.to_string());
        self.path("flowconfig.abs.json")
    }
}
