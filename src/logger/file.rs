//! Daily log file output
//!
//! Lines are appended to `<logs dir>/assets_manager_<YYYY-MM-DD>.log`. Until
//! `init_file_logging` succeeds every write is a no-op.

use chrono::Local;
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Mutex;

use crate::paths::get_logs_directory;

static LOG_FILE: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Open today's log file, creating the logs directory if needed
///
/// Failure is reported on stderr and leaves file logging disabled; console
/// logging keeps working.
pub fn init_file_logging() {
    let dir = get_logs_directory();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create logs directory {}: {}", dir.display(), e);
        return;
    }

    let path = dir.join(format!(
        "assets_manager_{}.log",
        Local::now().format("%Y-%m-%d")
    ));

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(BufWriter::new(file));
            }
        }
        Err(e) => eprintln!("Failed to open log file {}: {}", path.display(), e),
    }
}

/// Append one plain-text line to the log file
pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(writer) = guard.as_mut() {
            // A failed log write must not interrupt the command being logged
            let _ = writeln!(writer, "{}", line);
        }
    }
}

pub fn flush_file_logging() -> std::io::Result<()> {
    match LOG_FILE.lock() {
        Ok(mut guard) => match guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Ok(()),
    }
}
