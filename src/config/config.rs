//! Application configuration resolved from the environment.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::info;

use super::env::{EnvSource, ProcessEnv};
use super::error::ConfigError;
use super::level::LogLevel;

pub const ACCESS_KEY_VAR: &str = "PORCUPINE_ACCESS_KEY";
pub const API_KEY_VAR: &str = "ELEVEN_API_KEY";
pub const VOICE_ID_VAR: &str = "VOICE_ID";
pub const WAKE_WORD_PATH_VAR: &str = "WAKE_WORD_PATH";
pub const LOG_FILE_VAR: &str = "LOG_FILE";
pub const APP_CACHE_FILE_VAR: &str = "APP_CACHE_FILE";
pub const MODEL_VAR: &str = "ELEVEN_MODEL";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

pub const DEFAULT_VOICE_ID: &str = "Vara1IkEw7vh5Hr5dT3C";
pub const DEFAULT_WAKE_WORD_PATH: &str = "hey-Gwen_en_windows_v3_0_0.ppn";
pub const DEFAULT_LOG_FILE: &str = "gwen.log";
pub const DEFAULT_APP_CACHE_FILE: &str = "app_cache.json";
pub const DEFAULT_MODEL: &str = "eleven_monolingual_v1";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Where synthesized speech is written. Not configurable.
pub const AUDIO_OUTPUT_FILE: &str = "output.mp3";

const MASK: &str = "********";

/// Voice assistant configuration.
///
/// Built once at startup by [`AppConfig::resolve`] and handed to consumers by reference.
/// Nothing mutates it afterwards.
#[derive(Debug)]
pub struct AppConfig {
    /// Porcupine wake-word engine access key (required)
    access_key: Option<SecretString>,
    /// ElevenLabs API key (required)
    api_key: Option<SecretString>,
    /// ElevenLabs voice
    pub voice_id: String,
    /// Porcupine keyword file, must exist on disk
    pub wake_word_path: PathBuf,
    pub log_file_path: PathBuf,
    pub app_cache_path: PathBuf,
    pub audio_output_path: PathBuf,
    /// ElevenLabs model name
    pub model_name: String,
    /// Log level name as given, see [`AppConfig::log_level_value`]
    pub log_level: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn resolve() -> Self {
        Self::resolve_from(&ProcessEnv)
    }

    /// Resolve configuration from an arbitrary environment source.
    ///
    /// Variables that are present are used verbatim (even when empty). Absent ones
    /// fall back to their defaults, except the two API keys which stay unset.
    pub fn resolve_from(env: &impl EnvSource) -> Self {
        let var_or = |key: &str, default: &str| env.var(key).unwrap_or_else(|| default.to_string());

        Self {
            access_key: env.var(ACCESS_KEY_VAR).map(|key| SecretString::new(key.into())),
            api_key: env.var(API_KEY_VAR).map(|key| SecretString::new(key.into())),
            voice_id: var_or(VOICE_ID_VAR, DEFAULT_VOICE_ID),
            wake_word_path: PathBuf::from(var_or(WAKE_WORD_PATH_VAR, DEFAULT_WAKE_WORD_PATH)),
            log_file_path: PathBuf::from(var_or(LOG_FILE_VAR, DEFAULT_LOG_FILE)),
            app_cache_path: PathBuf::from(var_or(APP_CACHE_FILE_VAR, DEFAULT_APP_CACHE_FILE)),
            audio_output_path: PathBuf::from(AUDIO_OUTPUT_FILE),
            model_name: var_or(MODEL_VAR, DEFAULT_MODEL),
            log_level: var_or(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL),
        }
    }

    /// Porcupine access key, if set.
    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_ref().map(|key| key.expose_secret())
    }

    /// ElevenLabs API key, if set.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    /// Get the configured log level.
    ///
    /// Matching ignores case. Unrecognized names fall back to [`LogLevel::Info`].
    pub fn log_level_value(&self) -> LogLevel {
        LogLevel::from_name(&self.log_level).unwrap_or_default()
    }

    /// Validate the configuration.
    ///
    /// Every missing required variable is collected before reporting, and the
    /// wake-word file is only checked once all of them are present.
    ///
    /// # Errors
    /// * [`ConfigError::MissingEnvVars`] - a required key is unset or empty
    /// * [`ConfigError::ResourceNotFound`] - the wake-word file does not exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [(ACCESS_KEY_VAR, self.access_key()), (API_KEY_VAR, self.api_key())];

        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.is_none_or(str::is_empty))
            .map(|(name, _)| name)
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvVars(missing));
        }

        if !self.wake_word_path.exists() {
            return Err(ConfigError::ResourceNotFound(self.wake_word_path.clone()));
        }

        Ok(())
    }

    /// Redacted view of the configuration, safe to print or serialize.
    pub fn summary(&self) -> ConfigSummary<'_> {
        ConfigSummary {
            access_key: mask(self.access_key()),
            api_key: mask(self.api_key()),
            voice_id: &self.voice_id,
            wake_word_path: &self.wake_word_path,
            log_file_path: &self.log_file_path,
            app_cache_path: &self.app_cache_path,
            audio_output_path: &self.audio_output_path,
            model_name: &self.model_name,
            log_level: self.log_level_value(),
        }
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Porcupine access key: {}", mask(self.access_key()).unwrap_or("<unset>"));
        info!("  ElevenLabs API key: {}", mask(self.api_key()).unwrap_or("<unset>"));
        info!("  Voice ID: {}", self.voice_id);
        info!("  Model: {}", self.model_name);
        info!("  Wake word file: {}", self.wake_word_path.display());
        info!("  Log file: {}", self.log_file_path.display());
        info!("  App cache: {}", self.app_cache_path.display());
        info!("  Audio output: {}", self.audio_output_path.display());
        let level = self.log_level_value();
        info!("  Log level: {} ({})", level, level.rank());
    }
}

/// Serializable configuration with secrets replaced by a mask.
#[derive(Debug, Serialize)]
pub struct ConfigSummary<'a> {
    pub access_key: Option<&'static str>,
    pub api_key: Option<&'static str>,
    pub voice_id: &'a str,
    pub wake_word_path: &'a Path,
    pub log_file_path: &'a Path,
    pub app_cache_path: &'a Path,
    pub audio_output_path: &'a Path,
    pub model_name: &'a str,
    pub log_level: LogLevel,
}

fn mask(secret: Option<&str>) -> Option<&'static str> {
    secret.filter(|s| !s.is_empty()).map(|_| MASK)
}
