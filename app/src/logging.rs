//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging system for the command layer.
// CONTEXT: Every line has the form `seq|level|category|message`. Lines go to
//          the `log` facade (target = category) and, once `init_log_file` has
//          been called, are appended to a log file as well.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use once_cell::sync::Lazy;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Path of the current log file, if any
static LOG_PATH: Lazy<Mutex<Option<PathBuf>>> = Lazy::new(|| Mutex::new(None));

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Get the log file path set by `init_log_file`.
pub fn get_log_path() -> Option<PathBuf> {
    LOG_PATH.lock().ok().and_then(|guard| guard.clone())
}

/// Initialize the unified log file, truncating any previous content.
pub fn init_log_file(path: &Path) -> Result<PathBuf, String> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create log dir at {:?}: {}", dir, e))?;
        }
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("Failed to create log file {:?}: {}", path, e))?;

    let mut log_file = LOG_FILE.lock().map_err(|e| format!("Lock error: {}", e))?;
    *log_file = Some(file);

    if let Ok(mut guard) = LOG_PATH.lock() {
        *guard = Some(path.to_path_buf());
    }

    Ok(path.to_path_buf())
}

fn to_level(level: &str) -> log::Level {
    match level {
        "E" => log::Level::Error,
        "W" => log::Level::Warn,
        "I" => log::Level::Info,
        _ => log::Level::Debug,
    }
}

/// Write a log line in unified format
pub fn write_log(level: &str, category: &str, message: &str) {
    let seq = next_seq();
    let line = format!("{}|{}|{}|{}", seq, level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                log::error!(target: "LOG", "Failed to write log line: {}", e);
            }
            let _ = file.flush();
        }
    }

    log::log!(target: category, to_level(level), "{}", line);
}

/// Write an ENTER log line for function entry
pub fn write_log_enter(level: &str, category: &str, func_name: &str, params: &str) {
    let message = if params.is_empty() {
        format!("ENTER {}", func_name)
    } else {
        format!("ENTER {} {}", func_name, params)
    };
    write_log(level, category, &message);
}

/// Write an EXIT log line for function exit
pub fn write_log_exit(level: &str, category: &str, func_name: &str, result: &str) {
    let message = if result.is_empty() {
        format!("EXIT {}", func_name)
    } else {
        format!("EXIT {} {}", func_name, result)
    };
    write_log(level, category, &message);
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("D", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("I", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("W", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("E", $cat, &format!($($arg)*))
    };
}

// Info-level ENTER/EXIT for command traces

#[macro_export]
macro_rules! log_enter_info {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_enter("I", $cat, $func, "")
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_enter("I", $cat, $func, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_exit_info {
    ($cat:expr, $func:expr) => {
        $crate::logging::write_log_exit("I", $cat, $func, "")
    };
    ($cat:expr, $func:expr, $($arg:tt)*) => {
        $crate::logging::write_log_exit("I", $cat, $func, &format!($($arg)*))
    };
}

// Re-export the macros so they can be imported via `use crate::logging::log_info;`
pub use log_debug;
pub use log_info;
pub use log_warn;
pub use log_error;
pub use log_enter_info;
pub use log_exit_info;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_increases() {
        let a = next_seq();
        let b = next_seq();
        assert!(b > a);
    }

    #[test]
    fn test_levels() {
        assert_eq!(to_level("E"), log::Level::Error);
        assert_eq!(to_level("W"), log::Level::Warn);
        assert_eq!(to_level("I"), log::Level::Info);
        assert_eq!(to_level("D"), log::Level::Debug);
    }
}
