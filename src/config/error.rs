//! Error types for configuration loading and validation.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the configuration.
///
/// All of these are setup mistakes an operator has to fix; none are retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required variables are unset or empty. Lists every missing name.
    #[error(
        "Missing required environment variables: {}\nPlease check your .env file and ensure all required variables are set.",
        .0.join(", ")
    )]
    MissingEnvVars(Vec<&'static str>),

    /// A file the assistant needs at startup does not exist.
    #[error("Wake word file not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// The `.env` file has invalid syntax.
    ///
    /// `error_index` is the column within the invalid line. The line itself is never
    /// reported so that secrets on it cannot reach the logs.
    #[error("Failed to parse .env file: invalid line at column {error_index}. Use --no-dotenv to skip .env loading")]
    DotenvParse { error_index: usize },

    /// The `.env` file exists but could not be read.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Use --no-dotenv to skip .env loading")]
    DotenvUnknown,
}

#[cfg(test)]
impl ConfigError {
    /// Names of the missing required variables, empty for other error kinds.
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            ConfigError::MissingEnvVars(vars) => vars,
            _ => &[],
        }
    }
}
