//! Configuration and filesystem helpers shared by the NeoBank shell crates.

pub mod config;
pub mod paths;

pub use config::{ConfigError, ShellConfig, default_config_path};
pub use paths::{expand_tilde, log_file_path};
