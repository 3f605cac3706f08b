//! Environment sources and `.env` loading.
//!
//! Resolution reads through [`EnvSource`] so the same pass runs against the
//! process environment in production and an in-memory map in tests.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::error::ConfigError;

/// A read-only key-value view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values count as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Load variables from a `.env` file into the process environment.
///
/// Variables already present in the environment are left untouched.
///
/// # Arguments
/// * `path` - Location of the `.env` file
///
/// # Returns
/// `true` if the file was loaded, `false` if it does not exist.
///
/// # Errors
/// Returns [`ConfigError::DotenvParse`] on invalid syntax and
/// [`ConfigError::DotenvIo`] if the file cannot be read. Neither carries file contents.
pub fn load_dotenv(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {}", path.display());
            Ok(true)
        }
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo { kind: io_err.kind() }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}
