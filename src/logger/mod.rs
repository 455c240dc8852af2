//! Structured logging for the assets manager
//!
//! Small tag-based logging API:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Colored console output, plus an optional daily log file
//!
//! ## Usage
//!
//! ```ignore
//! use assets_manager::logger::{self, LogTag};
//!
//! logger::error(LogTag::Registry, "Failed to read tokenlist.json");
//! logger::warning(LogTag::Ingest, "Logo download failed");
//! logger::info(LogTag::TokenList, "Token appended");
//! logger::debug(LogTag::Api, "Request details: ..."); // Only if --debug-api
//! logger::verbose(LogTag::Logo, "Raw bytes: ...");     // Only if --verbose
//! ```
//!
//! ## Initialization
//!
//! Call once at startup, before the first command runs:
//! ```ignore
//! logger::init();
//! ```
//!
//! Without `init()` the logger still prints to the console with default
//! settings, which is what unit tests rely on.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// 1. Parses command-line arguments for debug flags
/// 2. Opens the daily log file unless --no-file-log was given
pub fn init() {
    config::init_from_args();

    if get_logger_config().file_logging {
        file::init_file_logging();
    }
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (still shown with --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
///
/// # Example
/// ```ignore
/// logger::info(LogTag::Ingest, "Created info.json for 0xABC");
/// ```
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the --debug-<module> flag for the tag is present.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Flush pending log file writes
///
/// Returns the flush error instead of swallowing it so the caller can decide
/// whether a lost log line matters.
pub fn flush() -> std::io::Result<()> {
    file::flush_file_logging()
}
