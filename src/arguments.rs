/// Centralized access to raw command-line arguments
///
/// clap handles the command surface in main.rs; this module keeps a copy of
/// the raw argument list so the logger can pick up `--debug-<module>` flags
/// without threading parsed options through every call.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Override the stored arguments (used by tests)
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Debug modes the logger recognises, as `(flag, description)` pairs
pub const DEBUG_FLAGS: &[(&str, &str)] = &[
    ("--debug-registry", "Asset info reads/writes and path resolution"),
    ("--debug-tokenlist", "Token list duplicate scans and rewrites"),
    ("--debug-ingest", "Per-candidate decisions during remote ingestion"),
    ("--debug-logo", "Logo downloads and validation"),
    ("--debug-api", "HTTP requests and responses"),
    ("--debug-config", "Configuration loading"),
];

/// Returns the debug flags present on the command line
pub fn enabled_debug_flags() -> Vec<&'static str> {
    DEBUG_FLAGS
        .iter()
        .map(|(flag, _)| *flag)
        .filter(|flag| has_arg(flag))
        .collect()
}
