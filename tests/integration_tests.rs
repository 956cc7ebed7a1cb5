use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_tool(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_update-assembly-info"))
        .args(args)
        .output()
        .expect("Failed to run update-assembly-info")
}

fn write_assembly_info(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("AssemblyInfo.cs");
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_updates_versions_and_appends_commit_date() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_assembly_info(
        &temp_dir,
        "using System;\n\
         [assembly: AssemblyFileVersion(\"1.2.3.4\")]\n\
         [assembly: AssemblyInformationalVersionAttribute(\"bad-version\")]\n",
    );

    let output = run_tool(&[path_arg(&path)]);
    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[assembly: AssemblyFileVersion(\"1.2.3.5\")]"));
    assert!(content.contains("[assembly: AssemblyInformationalVersionAttribute(\"1.0.0.0\")]"));

    // The commit date was absent, so it gets appended at the end.
    let last_line = content.lines().last().unwrap();
    assert!(last_line.starts_with("[assembly: AssemblyMetadata(\"Commit Date\", \""));
    assert!(last_line.ends_with("GMT\")]"));
}

#[test]
fn test_running_twice_increments_revision_twice() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_assembly_info(
        &temp_dir,
        "[assembly: AssemblyFileVersion(\"2.0.0.0\")]\n",
    );

    run_tool(&[path_arg(&path), "--no-commit-date", "--no-informational-version"]);
    run_tool(&[path_arg(&path), "--no-commit-date", "--no-informational-version"]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[assembly: AssemblyFileVersion(\"2.0.0.2\")]"));
}

#[test]
fn test_all_attributes_disabled_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_assembly_info(
        &temp_dir,
        "[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n",
    );
    let before = std::fs::read(&path).unwrap();

    let output = run_tool(&[
        path_arg(&path),
        "--no-file-version",
        "--no-informational-version",
        "--no-commit-date",
    ]);
    assert!(output.status.success());

    assert_eq!(std::fs::read(&path).unwrap(), before);

    // Usage is printed instead of a changed-lines report.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OPTIONS:"));
    assert!(!stdout.contains("✏️"));
    assert!(!stdout.contains("➕"));
}

#[test]
fn test_help_flag_prints_usage_without_touching_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_assembly_info(
        &temp_dir,
        "[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n",
    );
    let before = std::fs::read(&path).unwrap();

    let output = run_tool(&["--help", path_arg(&path)]);
    assert!(output.status.success());
    assert_eq!(std::fs::read(&path).unwrap(), before);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("update-assembly-info <file path>"));
}

#[test]
fn test_missing_path_prints_usage() {
    let output = run_tool(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("update-assembly-info <file path>"));
}

#[test]
fn test_missing_file_reports_error_and_exits_normally() {
    let output = run_tool(&["/definitely/not/AssemblyInfo.cs"]);

    // Errors are caught at the top level and printed; the exit code stays 0.
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌"));
}

#[test]
fn test_config_file_disables_attributes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_assembly_info(
        &temp_dir,
        "[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n",
    );
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[attributes]\ninformational_version = false\ncommit_date = false\n",
    )
    .unwrap();

    let output = run_tool(&[
        path_arg(&path),
        "--config-file",
        config_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[assembly: AssemblyFileVersion(\"1.0.0.1\")]\n");
}

#[test]
fn test_non_assembly_lines_are_never_modified() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_assembly_info(
        &temp_dir,
        "// [assembly: AssemblyFileVersion(\"9.9.9.9\")]\n\
         var s = \"AssemblyFileVersion(\\\"9.9.9.9\\\")]\";\n",
    );

    run_tool(&[path_arg(&path), "--no-commit-date", "--no-informational-version"]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("// [assembly: AssemblyFileVersion(\"9.9.9.9\")]"));
    // The attribute never matched, so a fresh declaration was appended.
    assert!(content.ends_with("[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n"));
}
