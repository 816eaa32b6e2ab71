//! Diagnostic Emitters
//!
//! Output formats for diagnostics:
//! - Summary: the plain `ERROR` / `NO ERROR(S) FOUND` run report
//! - Coded: one `Error[E####] line N: ...` line per diagnostic, for `hl check`

mod summary;

pub use summary::{SummaryEmitter, SummaryStyle};

use crate::{Diagnostic, DiagnosticLog};

/// Header line printed when the run recorded at least one diagnostic.
pub const ERROR_HEADER: &str = "ERROR";

/// Line printed when the run recorded no diagnostics.
pub const NO_ERRORS: &str = "NO ERROR(S) FOUND";

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the binary run status followed by every recorded diagnostic.
    fn emit_summary(&mut self, log: &DiagnosticLog);
}
