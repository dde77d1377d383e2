// SPDX-FileCopyrightText: 2026 Outreach Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. Credentials are deliberately NOT validated here: dry runs
//! work without them, so their presence is checked only when a live send
//! path is entered.

use crate::diagnostic::ConfigError;
use crate::model::OutreachConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &OutreachConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.campaign.dataset_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "campaign.dataset_path must not be empty".to_string(),
        });
    }

    if config.ollama.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "ollama.model must not be empty".to_string(),
        });
    }

    if config.ollama.api_base.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "ollama.api_base must not be empty".to_string(),
        });
    } else if !config.ollama.api_base.starts_with("http://")
        && !config.ollama.api_base.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "ollama.api_base `{}` must be an http(s) URL",
                config.ollama.api_base
            ),
        });
    }

    if config.smtp.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "smtp.host must not be empty".to_string(),
        });
    }

    if config.smtp.port == 0 {
        errors.push(ConfigError::Validation {
            message: "smtp.port must not be 0".to_string(),
        });
    }

    if config.smtp.test_burst_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "smtp.test_burst_limit must be at least 1".to_string(),
        });
    }

    // Username without password (or vice versa) is always a mistake.
    match (&config.smtp.username, &config.smtp.password) {
        (Some(_), None) => errors.push(ConfigError::Validation {
            message: "smtp.username is set but smtp.password is missing".to_string(),
        }),
        (None, Some(_)) => errors.push(ConfigError::Validation {
            message: "smtp.password is set but smtp.username is missing".to_string(),
        }),
        _ => {}
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = OutreachConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_dataset_path_is_rejected() {
        let mut config = OutreachConfig::default();
        config.campaign.dataset_path = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().contains("dataset_path"))
        );
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = OutreachConfig::default();
        config.campaign.dataset_path = String::new();
        config.ollama.model = String::new();
        config.smtp.port = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 3, "expected all errors, got {errors:?}");
    }

    #[test]
    fn username_without_password_is_rejected() {
        let mut config = OutreachConfig::default();
        config.smtp.username = Some("me@example.com".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("password")));
    }

    #[test]
    fn non_http_api_base_is_rejected() {
        let mut config = OutreachConfig::default();
        config.ollama.api_base = "localhost:11434".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("api_base")));
    }
}
