//! Source file reader.

use std::io;
use std::path::{Path, PathBuf};

/// The source line sequence could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidData { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl SourceError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
            io::ErrorKind::InvalidData => SourceError::InvalidData { path },
            _ => SourceError::Io { path, source: err },
        }
    }
}

/// Read `path` and split it into lines without their terminators.
pub fn read_source_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::from_io(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}
