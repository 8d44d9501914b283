#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Build a [`CoreError::Config`] for an environment variable that failed to parse.
    pub fn invalid_env(var: &str, value: &str, expected: &str) -> Self {
        Self::Config(format!("{var} must be {expected}, got {value:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_env_names_the_variable() {
        let err = CoreError::invalid_env("PORT", "abc", "a valid u16");
        assert_eq!(
            err.to_string(),
            "Configuration error: PORT must be a valid u16, got \"abc\""
        );
    }
}
