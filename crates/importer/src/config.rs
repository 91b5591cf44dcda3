use std::time::Duration;

use vocabchain_pipeline::RunnerConfig;

/// Default backend base URL (local replica).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4943";

/// Default per-entry submission timeout in seconds.
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got \"{value}\"")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Importer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// Base URL of the persistence backend, without trailing slash.
    pub backend_url: String,
    pub batch_size: usize,
    /// `None` when `SUBMIT_TIMEOUT_SECS=0`.
    pub submit_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl ImporterConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                  |
    /// |-----------------------|--------------------------|
    /// | `BACKEND_URL`         | `http://localhost:4943`  |
    /// | `BATCH_SIZE`          | `300`                    |
    /// | `SUBMIT_TIMEOUT_SECS` | `30` (`0` disables)      |
    /// | `LOG_FORMAT`          | `text` (`json`)          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let batch_size = match lookup("BATCH_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "BATCH_SIZE",
                        expected: "a positive integer",
                        value: raw,
                    })
                }
            },
            None => vocabchain_pipeline::submitter::DEFAULT_BATCH_SIZE,
        };

        let timeout_secs = match lookup("SUBMIT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "SUBMIT_TIMEOUT_SECS",
                    expected: "a non-negative integer",
                    value: raw.clone(),
                })?,
            None => DEFAULT_SUBMIT_TIMEOUT_SECS,
        };
        let submit_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    var: "LOG_FORMAT",
                    expected: "\"text\" or \"json\"",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            backend_url,
            batch_size,
            submit_timeout,
            log_format,
        })
    }

    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            batch_size: self.batch_size,
            submit_timeout: self.submit_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ImporterConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ImporterConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.batch_size, 300);
        assert_eq!(config.submit_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("BACKEND_URL", "https://backend.example/"),
            ("BATCH_SIZE", "50"),
            ("SUBMIT_TIMEOUT_SECS", "0"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.backend_url, "https://backend.example");
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.submit_timeout, None);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.runner_config().batch_size, 50);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_matches!(
            load(&[("BATCH_SIZE", "0")]),
            Err(ConfigError::InvalidValue { var: "BATCH_SIZE", .. })
        );
        assert_matches!(
            load(&[("SUBMIT_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidValue { var: "SUBMIT_TIMEOUT_SECS", .. })
        );
        assert_matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidValue { var: "LOG_FORMAT", .. })
        );
    }
}
