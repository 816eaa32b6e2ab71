//! Summary Emitter
//!
//! Writes the end-of-run report to any `io::Write`.

use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticLog};

use super::{DiagnosticEmitter, ERROR_HEADER, NO_ERRORS};

/// How each diagnostic line is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummaryStyle {
    /// `Error: <message>`
    #[default]
    Plain,
    /// `Error[E####] line N: <message>`
    Coded,
}

/// Emitter for the final run summary.
pub struct SummaryEmitter<W: Write> {
    writer: W,
    style: SummaryStyle,
}

impl<W: Write> SummaryEmitter<W> {
    pub fn new(writer: W, style: SummaryStyle) -> Self {
        SummaryEmitter { writer, style }
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        match self.style {
            SummaryStyle::Plain => diagnostic.to_string(),
            SummaryStyle::Coded => diagnostic.render_coded(),
        }
    }
}

impl SummaryEmitter<io::Stdout> {
    /// Create a summary emitter for stdout.
    pub fn stdout(style: SummaryStyle) -> Self {
        SummaryEmitter::new(io::stdout(), style)
    }
}

impl<W: Write> DiagnosticEmitter for SummaryEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let line = self.render(diagnostic);
        let _ = writeln!(self.writer, "{line}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, log: &DiagnosticLog) {
        if log.has_errors() {
            let _ = writeln!(self.writer, "{ERROR_HEADER}");
            self.emit_all(log.as_slice());
        } else {
            let _ = writeln!(self.writer, "{NO_ERRORS}");
        }
        self.flush();
    }
}
