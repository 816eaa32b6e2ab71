//! HL interpreter driver.
//!
//! Reads a source file into lines, feeds them to an [`hl_eval::Session`],
//! writes the two artifacts, and reports the run status.
//!
//! ```text
//! RunConfig ──► read_source_lines ──► Session::run ──► RunReport
//!                                                        │
//!                              NOSPACES.TXT ◄── write_artifacts ──► RES_SYM.TXT
//! ```
//!
//! Only an unreadable source aborts a run; it does so before any artifact
//! is written.

pub mod commands;
pub mod config;
pub mod driver;
pub mod source;
pub mod tracing_setup;

pub use config::{ConfigError, RunConfig};
pub use driver::{execute, interpret, write_artifacts, DriverError, RunReport};
pub use source::{read_source_lines, SourceError};
