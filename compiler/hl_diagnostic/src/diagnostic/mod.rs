//! Core diagnostic type.
//!
//! A [`Diagnostic`] is one recorded, non-fatal failure of one statement.
//! Its `Display` form is the exact line that appears in the run summary.

use std::fmt;

use crate::ErrorCode;

/// A recorded failure of one statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be recorded or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message, without the `Error: ` prefix.
    pub message: String,
    /// 1-based number of the source line that produced this diagnostic.
    pub line: Option<usize>,
}

impl Diagnostic {
    /// Create a new error diagnostic with an empty message.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            line: None,
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the 1-based source line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Render with the error code and line, for tooling output.
    ///
    /// `Error[E2002] line 3: Variable 'z' is not declared`
    pub fn render_coded(&self) -> String {
        match self.line {
            Some(line) => format!("Error[{}] line {line}: {}", self.code, self.message),
            None => format!("Error[{}]: {}", self.code, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}
