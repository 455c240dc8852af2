/// Core logging implementation with automatic filtering
///
/// Checks whether a log should be displayed based on level and tag, then
/// hands it to the format module.
use super::config::{get_logger_config, is_debug_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Verbose level requires --verbose
/// 3. Debug level requires --verbose OR --debug-<module> for that tag
/// 4. Other levels are checked against the minimum level threshold
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    if level == LogLevel::Error {
        return true;
    }

    if level == LogLevel::Verbose {
        return config.min_level == LogLevel::Verbose;
    }

    if level == LogLevel::Debug {
        return config.min_level == LogLevel::Verbose || is_debug_enabled_for_tag(tag);
    }

    level <= config.min_level
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_logged() {
        assert!(should_log(&LogTag::Registry, LogLevel::Error));
    }

    #[test]
    fn test_debug_hidden_by_default() {
        // Default config has no debug tags enabled
        assert!(!should_log(&LogTag::Logo, LogLevel::Debug));
    }
}
