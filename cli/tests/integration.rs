//! End-to-end tests for the printmd binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read output")
    }

    fn printmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("printmd").expect("binary builds");
        cmd.current_dir(self.path());
        cmd
    }
}

#[test]
fn writes_structure_and_content() {
    let project = TestProject::new();
    project.add_file(
        "print.yaml",
        "output_path: out.md\nincluded_paths:\n  - src\n  - \"*.md\"\nexcluded_paths:\n  - src/gen\n",
    );
    project.add_file("src/main.go", "package main\n");
    project.add_file("src/gen/api.go", "package gen\n");
    project.add_file("README.md", "# Readme\n");
    project.add_file("notes.txt", "not included\n");

    project.printmd().assert().success();

    let doc = project.read("out.md");
    assert!(doc.starts_with("# Project\n\n## File Structure\n\n"));
    assert!(doc.contains("- README.md\n- src/\n  - main.go\n"));
    assert!(doc.contains("### src/main.go\n\n```go\npackage main\n\n```"));
    assert!(doc.contains("### README.md\n\n```markdown\n# Readme\n\n```"));
    assert!(!doc.contains("api.go"), "excluded dir leaked: {}", doc);
    assert!(!doc.contains("notes.txt"), "non-included file leaked: {}", doc);
}

#[test]
fn missing_config_fails_with_config_exit_code() {
    let project = TestProject::new();
    project
        .printmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn config_flag_selects_another_file() {
    let project = TestProject::new();
    project.add_file("conf/custom.yaml", "output_path: custom.md\nincluded_paths: [lib]\n");
    project.add_file("lib/a.py", "x = 1\n");

    project
        .printmd()
        .args(["--config", "conf/custom.yaml", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(project.read("custom.md").contains("```python\nx = 1\n\n```"));
}

#[test]
fn missing_output_path_is_rejected() {
    let project = TestProject::new();
    project.add_file("print.yaml", "included_paths: [src]\n");

    project
        .printmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("output_path"));
}

#[test]
fn output_flag_overrides_config() {
    let project = TestProject::new();
    project.add_file("print.yaml", "output_path: configured.md\nincluded_paths: [src]\n");
    project.add_file("src/lib.rs", "pub fn f() {}\n");

    project.printmd().args(["-o", "override.md"]).assert().success();

    assert!(project.path().join("override.md").exists());
    assert!(!project.path().join("configured.md").exists());
}

#[test]
fn unwritable_output_fails_with_io_exit_code() {
    let project = TestProject::new();
    project.add_file("print.yaml", "output_path: no/such/dir/out.md\nincluded_paths: [src]\n");
    project.add_file("src/lib.rs", "pub fn f() {}\n");

    project
        .printmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to print markdown"));
}

#[test]
fn missing_project_root_fails_with_io_exit_code() {
    let project = TestProject::new();
    project.add_file("print.yaml", "output_path: out.md\nincluded_paths: ['.']\n");

    project
        .printmd()
        .args(["--project-root", "does-not-exist"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to get files"));
}

#[test]
fn empty_includes_produce_empty_listing() {
    let project = TestProject::new();
    project.add_file("print.yaml", "output_path: out.md\n");
    project.add_file("src/lib.rs", "pub fn f() {}\n");

    project.printmd().assert().success();

    assert_eq!(
        project.read("out.md"),
        "# Project\n\n## File Structure\n\n## File Content\n\n"
    );
}

#[test]
fn rerun_does_not_embed_previous_output() {
    let project = TestProject::new();
    project.add_file("print.yaml", "output_path: out.md\nincluded_paths: ['.']\n");
    project.add_file("a.txt", "alpha\n");

    project.printmd().assert().success();
    project.printmd().assert().success();

    let doc = project.read("out.md");
    assert!(!doc.contains("### out.md"));
    assert!(doc.contains("### a.txt"));
    assert!(doc.contains("### print.yaml"));
}

#[test]
fn invalid_glob_is_a_warning_not_a_failure() {
    let project = TestProject::new();
    project.add_file("print.yaml", "output_path: out.md\nincluded_paths: ['[bad', src]\n");
    project.add_file("src/lib.rs", "pub fn f() {}\n");

    project
        .printmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid glob pattern"));

    assert!(project.read("out.md").contains("### src/lib.rs"));
}

#[test]
fn project_name_sets_title() {
    let project = TestProject::new();
    project.add_file(
        "print.yaml",
        "output_path: out.md\nproject_name: Billing Service\nincluded_paths: [src]\n",
    );
    project.add_file("src/x.ts", "export {}\n");

    project.printmd().assert().success();

    assert!(project.read("out.md").starts_with("# Billing Service\n\n"));
}
