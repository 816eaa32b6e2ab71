//! The `check` command: interpret with output discarded and report coded
//! diagnostics.

use hl_diagnostic::emitter::{DiagnosticEmitter, SummaryEmitter, SummaryStyle};
use hl_eval::silent_handler;

use super::read_lines_or_report;
use crate::config::RunConfig;
use crate::driver::interpret;

/// Check the configured program. No artifacts are written.
///
/// Exits 1 when any diagnostic was recorded.
pub fn check_file(config: &RunConfig) -> i32 {
    let Some(lines) = read_lines_or_report(config) else {
        return 1;
    };

    let report = interpret(&lines, silent_handler());
    SummaryEmitter::stdout(SummaryStyle::Coded).emit_summary(&report.diagnostics);

    i32::from(report.diagnostics.has_errors())
}
