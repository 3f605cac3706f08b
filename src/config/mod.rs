//! Configuration module for the voice assistant.
//!
//! Resolves settings from the environment (optionally seeded from `.env`),
//! applies defaults and validates required values.

#[allow(clippy::module_inception)]
mod config;
mod env;
mod error;
mod level;

pub use config::AppConfig;
pub use env::load_dotenv;
pub use error::ConfigError;
pub use level::LogLevel;
