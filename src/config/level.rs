//! Log severity levels as named in `LOG_LEVEL`.

use serde::Serialize;
use tracing::Level;

/// Severity level with the conventional logging ranks (DEBUG=10 .. CRITICAL=50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Debug = 10,
    #[default]
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    /// Parse a level name, ignoring case. Surrounding whitespace is not stripped.
    ///
    /// # Returns
    /// `None` for names outside DEBUG, INFO, WARNING, ERROR and CRITICAL.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "CRITICAL" => Some(LogLevel::Critical),
            _ => None,
        }
    }

    /// Numeric severity rank.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Closest tracing level. Tracing stops at ERROR, so CRITICAL maps there too.
    pub fn as_tracing_level(self) -> Level {
        match self {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error | LogLevel::Critical => Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_ignores_case() {
        for name in ["debug", "DEBUG", "Debug"] {
            assert_eq!(LogLevel::from_name(name), Some(LogLevel::Debug), "name {:?}", name);
        }
        assert_eq!(LogLevel::from_name("warning"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_name("Critical"), Some(LogLevel::Critical));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(LogLevel::from_name("VERBOSE"), None);
        assert_eq!(LogLevel::from_name("WARN"), None);
        assert_eq!(LogLevel::from_name(""), None);
        assert_eq!(LogLevel::from_name(" debug"), None);
    }

    #[test]
    fn test_ranks_are_ordered() {
        assert_eq!(LogLevel::Debug.rank(), 10);
        assert_eq!(LogLevel::Info.rank(), 20);
        assert_eq!(LogLevel::Warning.rank(), 30);
        assert_eq!(LogLevel::Error.rank(), 40);
        assert_eq!(LogLevel::Critical.rank(), 50);
        assert!(LogLevel::Debug < LogLevel::Critical);
    }

    #[test]
    fn test_critical_maps_to_tracing_error() {
        assert_eq!(LogLevel::Critical.as_tracing_level(), Level::ERROR);
        assert_eq!(LogLevel::Warning.as_tracing_level(), Level::WARN);
        assert_eq!(LogLevel::Critical.to_string(), "CRITICAL");
    }
}
