//! Command handlers for the `hl` CLI.
//!
//! Each submodule implements one command. Handlers print to stdout/stderr
//! and return the process exit code; only `main` exits.

mod check;
mod explain;
mod lex;
mod run;

pub use check::check_file;
pub use explain::explain_error;
pub use lex::lex_file;
pub use run::run_file;

use crate::config::RunConfig;
use crate::source::read_source_lines;

/// Read the source named by `config`, reporting failures to stderr.
pub(super) fn read_lines_or_report(config: &RunConfig) -> Option<Vec<String>> {
    match read_source_lines(&config.source) {
        Ok(lines) => Some(lines),
        Err(err) => {
            eprintln!("{err}");
            None
        }
    }
}
