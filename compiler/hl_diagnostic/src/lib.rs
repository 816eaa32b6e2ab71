//! Diagnostic system for the HL interpreter.
//!
//! Every failed statement becomes one [`Diagnostic`]:
//! - Error code for searchability (`hl explain E2002`)
//! - Human-readable message, rendered as `Error: <message>`
//! - Optional 1-based source line for tooling output
//!
//! Diagnostics are accumulated in a [`DiagnosticLog`] for the whole run and
//! never cleared. The log drives the final `ERROR` / `NO ERROR(S) FOUND`
//! summary written by [`emitter::SummaryEmitter`].

mod diagnostic;
mod diagnostic_log;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use diagnostic_log::DiagnosticLog;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
