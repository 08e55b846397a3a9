//! # Replace Command
//!
//! Runs the processor on the path given on the command line and turns the
//! result into an exit code.

use std::process::ExitCode;

use relicense::logging::init_tracing;
use relicense::output::print_fatal;
use relicense::processor::{Processor, RunOutcome};
use tracing::debug;

use super::Cli;

/// Run the replacement for the given arguments.
///
/// Exits with status 1 when the path does not exist or is a file with an
/// unsupported extension. Failures on individual files are reported but do
/// not change the exit status.
pub fn run_replace(cli: Cli) -> ExitCode {
  init_tracing();

  let processor = Processor::default();
  match processor.process_path(&cli.path) {
    Ok(RunOutcome::File(report)) => {
      debug!("{} -> {:?}", report.path.display(), report.outcome);
      ExitCode::SUCCESS
    }
    Ok(RunOutcome::Directory(summary)) => {
      debug!("Finished in {}ms", summary.elapsed.as_millis());
      ExitCode::SUCCESS
    }
    Err(e) => {
      print_fatal(&e);
      ExitCode::FAILURE
    }
  }
}
