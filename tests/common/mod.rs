#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use relicense::license::{APACHE_LICENSE, MIT_LICENSE};

/// Go source body used after the license block in fixtures.
pub const GO_BODY: &str = "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hello\")\n}\n";

/// Content of a Go file carrying the MIT header.
pub fn mit_go_file() -> String {
  format!("{MIT_LICENSE}{GO_BODY}")
}

/// Expected content of [`mit_go_file`] after replacement.
pub fn apache_go_file() -> String {
  format!("{APACHE_LICENSE}{GO_BODY}")
}

/// Writes `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Lays out the tree used by the directory scenarios:
/// three `.go` files (two with the MIT header) and two non-Go files that
/// also carry the header.
pub fn setup_go_tree(dir: &Path) -> Result<()> {
  write_file(dir, "cmd/admin/main.go", &mit_go_file())?;
  write_file(dir, "internal/probe/config/config.go", &mit_go_file())?;
  write_file(dir, "pkg/tools/snowflake.go", GO_BODY)?;
  write_file(dir, "script/update.py", &mit_go_file())?;
  write_file(dir, "README.md", &mit_go_file())?;
  Ok(())
}
