//! # relicense
//!
//! Rewrites MIT license headers in Go sources into Apache 2.0 headers.

mod cli;

use std::process::ExitCode;

use crate::cli::{Cli, run_replace};

fn main() -> ExitCode {
  let cli = Cli::parse_args();
  run_replace(cli)
}
