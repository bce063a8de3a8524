use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

mod paths;

use super::tokenizer::{Tokenizer, MAX_ARGS, MAX_INPUT};
use paths::ConfigPaths;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings, built from defaults and environment overrides.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    pub max_args: usize,
    pub max_input: usize,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: ConfigPaths::resolve().history_path,
            history_size: DEFAULT_HISTORY_SIZE,
            max_args: MAX_ARGS,
            max_input: MAX_INPUT,
            color: true,
        }
    }
}

impl ShellConfig {
    /// Reads `NSHELL_HISTFILE`, `NSHELL_HISTSIZE` and `NO_COLOR` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("NSHELL_HISTFILE") {
            config.history_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(size) = lookup("NSHELL_HISTSIZE") {
            config.history_size = match size.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "NSHELL_HISTSIZE",
                        value: size,
                    })
                }
            };
        }

        if lookup("NO_COLOR").is_some() {
            config.color = false;
        }

        if config.history_file.is_none() {
            warn!("no history file configured; history will not persist");
        }

        Ok(config)
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.max_args, self.max_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() -> Result<(), ConfigError> {
        let config = ShellConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config.history_size, DEFAULT_HISTORY_SIZE);
        assert_eq!(config.max_args, MAX_ARGS);
        assert_eq!(config.max_input, MAX_INPUT);
        assert!(config.color);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<(), ConfigError> {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("NSHELL_HISTFILE", "/tmp/hist"),
            ("NSHELL_HISTSIZE", "50"),
            ("NO_COLOR", ""),
        ]))?;
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/hist")));
        assert_eq!(config.history_size, 50);
        assert!(!config.color);
        Ok(())
    }

    #[test]
    fn test_empty_histfile_disables_history() -> Result<(), ConfigError> {
        let config = ShellConfig::from_lookup(lookup_from(&[("NSHELL_HISTFILE", "")]))?;
        assert!(config.history_file.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_history_size() {
        for bad in ["0", "-3", "lots"] {
            let result = ShellConfig::from_lookup(lookup_from(&[("NSHELL_HISTSIZE", bad)]));
            assert!(matches!(
                result,
                Err(ConfigError::InvalidValue {
                    key: "NSHELL_HISTSIZE",
                    ..
                })
            ));
        }
    }
}
