/// Logger configuration derived from command-line flags
///
/// Flags understood:
/// - `--verbose`            show everything
/// - `--quiet`              only errors and warnings
/// - `--debug-<module>`     enable debug logs for one tag
/// - `--no-file-log`        skip the daily log file
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::get_cmd_args;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub debug_tags: HashSet<String>,
    pub file_logging: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            file_logging: true,
        }
    }
}

impl LoggerConfig {
    /// Build a config from an argument list
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();

        for arg in args {
            if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
            } else if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if arg == "--no-file-log" {
                config.file_logging = false;
            } else if let Some(module) = arg.strip_prefix("--debug-") {
                config.debug_tags.insert(module.to_lowercase());
            }
        }

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Initialize the logger configuration from the process arguments
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&get_cmd_args()));
}

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .debug_tags
        .contains(&tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_debug_flag_enables_single_tag() {
        let config = LoggerConfig::from_args(&args(&["assets-manager", "--debug-ingest"]));
        assert!(config.debug_tags.contains("ingest"));
        assert!(!config.debug_tags.contains("api"));
        assert_eq!(config.min_level, LogLevel::Info);
    }

    #[test]
    fn test_quiet_and_no_file_log() {
        let config = LoggerConfig::from_args(&args(&["--quiet", "--no-file-log"]));
        assert_eq!(config.min_level, LogLevel::Warning);
        assert!(!config.file_logging);
    }

    #[test]
    fn test_verbose_overrides_level() {
        let config = LoggerConfig::from_args(&args(&["--verbose"]));
        assert_eq!(config.min_level, LogLevel::Verbose);
    }
}
