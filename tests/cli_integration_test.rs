mod common;

use assert_cmd::Command;
use common::Project;
use std::fs;

fn flowgen() -> Command {
    let mut cmd = Command::cargo_bin("flowgen").unwrap();
    cmd.env_remove("FLOWGEN_MODULE_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_command_generates_registry() {
    let project = Project::new();

    let output = flowgen().current_dir(project.root()).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("with 2 handler(s)"));

    let content = fs::read_to_string(project.path("gen/output/out.go")).unwrap();
    assert!(content.contains("FuncMap[\"Fetch\"] = handlers.Fetch"));
}

#[test]
fn test_missing_directory_exits_non_zero_with_chain() {
    let project = Project::new();
    project.write_config("does-not-exist", "gen/output");

    let output = flowgen()
        .current_dir(project.root())
        .arg("generate")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("directory error: configuration directory error"));
    assert!(stderr.contains("Caused by"));
    assert!(stderr.contains("does-not-exist"));
}

#[test]
fn test_missing_manifest_exits_non_zero() {
    let project = Project::new();
    fs::remove_file(project.path("go.mod")).unwrap();

    let output = flowgen().current_dir(project.root()).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("module resolution error"));
}

#[test]
fn test_module_dir_override() {
    let project = Project::new();
    let elsewhere = tempfile::TempDir::new().unwrap();
    fs::write(elsewhere.path().join("go.mod"), "module other.example/mod\n").unwrap();

    let output = flowgen()
        .current_dir(project.root())
        .args(["generate", "--module-dir"])
        .arg(elsewhere.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let content = fs::read_to_string(project.path("gen/output/out.go")).unwrap();
    assert!(content.contains("\"other.example/mod/handlers\""));
}

#[test]
fn test_list_json() {
    let project = Project::new();

    let output = flowgen()
        .current_dir(project.root())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[\"Fetch\",\"Store\"]\n");
    assert!(!project.path("gen/output/out.go").exists());
}

#[test]
fn test_init_creates_config_once() {
    let temp = tempfile::TempDir::new().unwrap();

    flowgen()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp.path().join("flowconfig.json").exists());

    flowgen()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure();

    flowgen()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
