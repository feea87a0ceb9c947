//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Runs before a config
//! is accepted into the system; returns all errors, not just the first.

use crate::config::schema::ServerConfig;
use crate::config::size::parse_size;

/// A single semantic validation failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyHost,
    InvalidJsonLimit(String),
    InvalidRawLimit(String),
    EmptyResourceDir,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyHost => write!(f, "listener.host must not be empty"),
            ValidationError::InvalidJsonLimit(v) => {
                write!(f, "limits.max_json_size '{}' is not a valid size", v)
            }
            ValidationError::InvalidRawLimit(v) => {
                write!(f, "limits.max_raw_size '{}' is not a valid size", v)
            }
            ValidationError::EmptyResourceDir => write!(f, "resources.dir must not be empty"),
        }
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if parse_size(&config.limits.max_json_size).is_err() {
        errors.push(ValidationError::InvalidJsonLimit(
            config.limits.max_json_size.clone(),
        ));
    }

    if parse_size(&config.limits.max_raw_size).is_err() {
        errors.push(ValidationError::InvalidRawLimit(
            config.limits.max_raw_size.clone(),
        ));
    }

    if config.resources.dir.trim().is_empty() {
        errors.push(ValidationError::EmptyResourceDir);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.host = String::new();
        config.limits.max_json_size = "lots".to_string();
        config.resources.dir = " ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::EmptyHost));
        assert!(errors.contains(&ValidationError::EmptyResourceDir));
    }
}
