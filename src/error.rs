use thiserror::Error;

use crate::core::config::ConfigError;

/// Failures outside of command execution: startup and the line reader.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Ctrl-C handler error: {0}")]
    CtrlC(#[from] ctrlc::Error),
}
