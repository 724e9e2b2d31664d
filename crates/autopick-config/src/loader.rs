//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;
use crate::validator::ConfigValidator;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load, then reject the configuration if validation reports errors.
    pub fn load_validated(path: &Path) -> Result<Config, ConfigError> {
        let config = Self::load(path)?;
        let result = ConfigValidator::validate(&config)?;
        if let Some(first) = result.errors.first() {
            return Err(ConfigError::InvalidValue {
                field: first.path.clone(),
                message: first.message.clone(),
            });
        }
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.runner.dispatch_delay_ms, 100);
        assert_eq!(config.markers.user_selected, "--user-selected");
    }

    #[test]
    fn test_load_markers() {
        let content = r#"
            [markers]
            user_selected = "picked"
            algo_selected = "guessed"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.markers.user_selected, "picked");
        assert_eq!(config.markers.algo_selected, "guessed");
        assert_eq!(config.markers.locked, "--dashed");
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [markers]
            dimmed = "--shade"

            [inspector]
            ignore_attribute = "data-automation-panel"
            enabled = false

            [runner]
            dispatch_delay_ms = 250

            [generalization]
            min_primary_picks = 3
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.markers.dimmed, "--shade");
        assert_eq!(config.inspector.ignore_attribute, "data-automation-panel");
        assert!(!config.inspector.enabled);
        assert_eq!(config.runner.dispatch_delay_ms, 250);
        assert_eq!(config.generalization.min_primary_picks, 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[runner]").unwrap();
        writeln!(file, "dispatch_delay_ms = 5").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.runner.dispatch_delay_ms, 5);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/autopick.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("markers = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_validated_rejects_duplicate_markers() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[markers]").unwrap();
        writeln!(file, "locked = \"--dark\"").unwrap();

        let result = ConfigLoader::load_validated(file.path());
        match result {
            Err(ConfigError::InvalidValue { field, .. }) => assert!(field.starts_with("markers")),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("AUTOPICK_TEST_MARKER", "--from-env");
        }
        let content = "[markers]\nlocked = \"${AUTOPICK_TEST_MARKER}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.markers.locked, "--from-env");
        unsafe {
            std::env::remove_var("AUTOPICK_TEST_MARKER");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${AUTOPICK_NONEXISTENT_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }
}
