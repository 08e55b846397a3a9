mod common;

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use common::{GO_BODY, apache_go_file, mit_go_file, setup_go_tree, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

/// Builds a `relicense` command with colors and diagnostics switched off.
fn relicense(path: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("relicense")?;
  cmd
    .arg(path)
    .env("NO_COLOR", "1")
    .env_remove("FORCE_COLOR")
    .env_remove("CLICOLOR_FORCE")
    .env_remove("RUST_LOG");
  Ok(cmd)
}

#[test]
fn test_single_file_replaced() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "main.go", &mit_go_file())?;

  relicense(&path)?
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
      "Processing single file: {}",
      path.display()
    )))
    .stdout(predicate::str::contains(format!("Replaced: {}", path.display())))
    .stdout(predicate::str::contains("Status: Replaced"));

  assert_eq!(fs::read_to_string(&path)?, apache_go_file());
  Ok(())
}

#[test]
fn test_single_file_not_replaced() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "main.go", GO_BODY)?;

  relicense(&path)?
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
      "Skipped: {} (no MIT license)",
      path.display()
    )))
    .stdout(predicate::str::contains("Status: Not replaced"));

  assert_eq!(fs::read_to_string(&path)?, GO_BODY);
  Ok(())
}

#[test]
fn test_single_unreadable_file_reports_error() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("binary.go");
  fs::write(&path, [0xFF, 0xFE, 0x00])?;

  relicense(&path)?
    .assert()
    .success()
    .stderr(predicate::str::contains("Error processing"))
    .stdout(predicate::str::contains("Status: Not replaced"));

  assert_eq!(fs::read(&path)?, vec![0xFF, 0xFE, 0x00]);
  Ok(())
}

#[test]
fn test_directory_summary() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_go_tree(temp_dir.path())?;

  relicense(temp_dir.path())?
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
      "Processing directory: {}",
      temp_dir.path().display()
    )))
    .stdout(predicate::str::contains("Summary: Checked 3 files, replaced 2 files"))
    .stdout(predicate::str::contains("update.py").not())
    .stdout(predicate::str::contains("README.md").not());

  assert_eq!(
    fs::read_to_string(temp_dir.path().join("cmd/admin/main.go"))?,
    apache_go_file()
  );
  assert_eq!(fs::read_to_string(temp_dir.path().join("script/update.py"))?, mit_go_file());
  Ok(())
}

#[test]
fn test_directory_one_status_line_per_go_file() -> Result<()> {
  let temp_dir = tempdir()?;
  setup_go_tree(temp_dir.path())?;

  let output = relicense(temp_dir.path())?.output()?;
  assert!(output.status.success());

  let stdout = String::from_utf8(output.stdout)?;
  let replaced = stdout.lines().filter(|l| l.starts_with("Replaced: ")).count();
  let skipped = stdout.lines().filter(|l| l.starts_with("Skipped: ")).count();
  assert_eq!(replaced, 2);
  assert_eq!(skipped, 1);
  assert!(!stdout.contains("\x1b["));
  Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
  let temp_dir = tempdir()?;

  relicense(temp_dir.path())?
    .assert()
    .success()
    .stdout(predicate::str::contains("Summary: Checked 0 files, replaced 0 files"));
  Ok(())
}

#[test]
fn test_missing_path_fails() -> Result<()> {
  let temp_dir = tempdir()?;
  let missing = temp_dir.path().join("nope");

  relicense(&missing)?
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not exist"))
    .stdout(predicate::str::is_empty());

  assert!(!missing.exists());
  Ok(())
}

#[test]
fn test_unsupported_extension_fails() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "notes.txt", &mit_go_file())?;

  relicense(&path)?
    .assert()
    .failure()
    .stderr(predicate::str::contains("is not a .go file"));

  assert_eq!(fs::read_to_string(&path)?, mit_go_file());
  Ok(())
}

#[test]
fn test_missing_argument_fails() -> Result<()> {
  Command::cargo_bin("relicense")?
    .assert()
    .failure()
    .stderr(predicate::str::contains("Usage"));
  Ok(())
}
