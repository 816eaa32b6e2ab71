//! The `run` command: interpret a source file, write the artifacts, and
//! print the summary.

use hl_diagnostic::emitter::{DiagnosticEmitter, SummaryEmitter, SummaryStyle};
use hl_eval::stdout_handler;

use crate::config::RunConfig;
use crate::driver::execute;

/// Run the configured program. Diagnostics do not affect the exit code.
pub fn run_file(config: &RunConfig) -> i32 {
    let report = match execute(config, stdout_handler()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    SummaryEmitter::stdout(SummaryStyle::Plain).emit_summary(&report.diagnostics);
    0
}
