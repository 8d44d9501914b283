use std::time::Duration;

use notificator_core::error::CoreError;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Worker configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// How often the due-event query runs (default: `60` seconds).
    pub poll_interval: Duration,
}

impl WorkerConfig {
    /// | Env Var                  | Default |
    /// |--------------------------|---------|
    /// | `DUE_POLL_INTERVAL_SECS` | `60`    |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_value(std::env::var("DUE_POLL_INTERVAL_SECS").ok())
    }

    fn from_value(raw: Option<String>) -> Result<Self, CoreError> {
        let secs = match raw {
            Some(raw) => raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                CoreError::invalid_env("DUE_POLL_INTERVAL_SECS", &raw, "a positive integer")
            })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };
        Ok(Self {
            poll_interval: Duration::from_secs(secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval() {
        let config = WorkerConfig::from_value(None).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(60));
    }

    #[test]
    fn interval_override() {
        let config = WorkerConfig::from_value(Some("15".into())).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(15));
    }

    #[test]
    fn zero_interval_rejected() {
        assert!(WorkerConfig::from_value(Some("0".into())).is_err());
    }

    #[test]
    fn garbage_interval_rejected() {
        let err = WorkerConfig::from_value(Some("often".into())).unwrap_err();
        assert!(err.to_string().contains("DUE_POLL_INTERVAL_SECS"));
    }
}
