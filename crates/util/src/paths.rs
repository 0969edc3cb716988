//! Filesystem locations used by the shell.

use std::env;
use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Environment variable overriding the log file location.
pub const LOG_PATH_ENV: &str = "NEOBANK_LOG_PATH";

const APP_DIR_NAME: &str = "neobank";
const LOG_FILE_NAME: &str = "shell.log";

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(trimmed)
}

/// `~/.config/neobank` on most platforms; the working directory when no
/// config directory can be determined.
pub fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Where the runtime writes its tracing output. The terminal belongs to the
/// UI, so logs never go to stdout.
pub fn log_file_path() -> PathBuf {
    env_path(LOG_PATH_ENV).unwrap_or_else(|| app_config_dir().join(LOG_FILE_NAME))
}

pub(crate) fn env_path(var: &str) -> Option<PathBuf> {
    let value = env::var(var).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(expand_tilde(trimmed))
}
