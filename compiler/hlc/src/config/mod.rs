//! Run configuration: where the source comes from and where the two
//! artifacts go.

use std::path::PathBuf;

/// Default source file.
pub const DEFAULT_SOURCE: &str = "PROG1.HL";
/// Default normalized-code artifact.
pub const DEFAULT_NOSPACES: &str = "NOSPACES.TXT";
/// Default classified-token artifact.
pub const DEFAULT_RES_SYM: &str = "RES_SYM.TXT";
/// Environment variable naming the source when none is given on the command line.
pub const SOURCE_ENV_VAR: &str = "HL_SOURCE";

const NOSPACES_FLAG: &str = "--nospaces=";
const RES_SYM_FLAG: &str = "--res-sym=";

/// Paths for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub source: PathBuf,
    pub nospaces: PathBuf,
    pub res_sym: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            source: PathBuf::from(DEFAULT_SOURCE),
            nospaces: PathBuf::from(DEFAULT_NOSPACES),
            res_sym: PathBuf::from(DEFAULT_RES_SYM),
        }
    }
}

/// Command-line arguments that do not form a valid run configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a path")]
    EmptyValue(&'static str),
    #[error("unexpected argument '{0}'; only one source file may be given")]
    ExtraArgument(String),
}

impl RunConfig {
    /// Build a configuration from the arguments after the command name.
    ///
    /// `env_source` is the value of [`SOURCE_ENV_VAR`], used only when no
    /// positional path is present.
    pub fn from_args(args: &[String], env_source: Option<String>) -> Result<Self, ConfigError> {
        let mut config = RunConfig::default();
        let mut source = None;

        for arg in args {
            if let Some(path) = arg.strip_prefix(NOSPACES_FLAG) {
                config.nospaces = flag_path(NOSPACES_FLAG, path)?;
            } else if let Some(path) = arg.strip_prefix(RES_SYM_FLAG) {
                config.res_sym = flag_path(RES_SYM_FLAG, path)?;
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg.clone()));
            } else if source.is_none() {
                source = Some(PathBuf::from(arg));
            } else {
                return Err(ConfigError::ExtraArgument(arg.clone()));
            }
        }

        if let Some(path) = source.or_else(|| env_source.filter(|s| !s.is_empty()).map(PathBuf::from)) {
            config.source = path;
        }
        Ok(config)
    }

    /// [`RunConfig::from_args`] reading [`SOURCE_ENV_VAR`] from the process
    /// environment.
    pub fn from_env_args(args: &[String]) -> Result<Self, ConfigError> {
        Self::from_args(args, std::env::var(SOURCE_ENV_VAR).ok())
    }
}

fn flag_path(flag: &'static str, value: &str) -> Result<PathBuf, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyValue(flag));
    }
    Ok(PathBuf::from(value))
}
