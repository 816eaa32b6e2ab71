//! One complete interpreter run: source lines in, report and artifacts out.

use std::io;
use std::path::{Path, PathBuf};

use hl_diagnostic::DiagnosticLog;
use hl_eval::{RunStatus, Session, SharedPrintHandler};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::source::{read_source_lines, SourceError};

/// Everything a finished run produced besides printed output.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub status: RunStatus,
    pub diagnostics: DiagnosticLog,
    /// Normalized-code artifact text.
    pub normalized_code: String,
    /// Classified-token artifact text.
    pub classified_code: String,
}

/// A run that could not finish.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("cannot write '{}': {source}", path.display())]
    Artifact { path: PathBuf, source: io::Error },
}

/// Interpret `lines` in a fresh session, printing through `printer`.
pub fn interpret<I, S>(lines: I, printer: SharedPrintHandler) -> RunReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut session = Session::new(printer);
    let status = session.run(lines);
    debug!(
        lines = session.lines_processed(),
        diagnostics = session.diagnostics().len(),
        ?status,
        "run finished"
    );
    RunReport {
        status,
        diagnostics: session.diagnostics().clone(),
        normalized_code: session.normalized_code(),
        classified_code: session.classified_code(),
    }
}

/// Overwrite both artifact files named by `config`.
pub fn write_artifacts(config: &RunConfig, report: &RunReport) -> Result<(), DriverError> {
    write_artifact(&config.nospaces, &report.normalized_code)?;
    write_artifact(&config.res_sym, &report.classified_code)
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), DriverError> {
    std::fs::write(path, contents).map_err(|source| DriverError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

/// Read the configured source, interpret it, and write both artifacts.
///
/// An unreadable source fails before anything is written.
pub fn execute(config: &RunConfig, printer: SharedPrintHandler) -> Result<RunReport, DriverError> {
    let lines = read_source_lines(&config.source)?;
    let report = interpret(&lines, printer);
    write_artifacts(config, &report)?;
    Ok(report)
}

#[cfg(test)]
mod tests;
