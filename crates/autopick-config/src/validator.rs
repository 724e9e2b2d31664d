//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Delay above which a warning is emitted.
const SLOW_DISPATCH_MS: u64 = 10_000;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_markers(config, &mut result);
        Self::validate_inspector(config, &mut result);
        Self::validate_generalization(config, &mut result);
        Self::validate_runner(config, &mut result);

        Ok(result)
    }

    fn validate_markers(config: &Config, result: &mut ValidationResult) {
        let markers = &config.markers;
        let named = [
            ("markers.user_selected", &markers.user_selected),
            ("markers.algo_selected", &markers.algo_selected),
            ("markers.locked", &markers.locked),
            ("markers.dimmed", &markers.dimmed),
        ];

        for (path, value) in &named {
            if value.is_empty() {
                result.add_error(ValidationError::new(*path, "Marker cannot be empty"));
            } else if value.chars().any(char::is_whitespace) {
                result.add_error(ValidationError::new(
                    *path,
                    "Marker must be a single class token without whitespace",
                ));
            }
        }

        // A shared marker would make one state indistinguishable from another
        for (i, (path, value)) in named.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            if let Some((other, _)) = named[..i].iter().find(|(_, v)| v == value) {
                result.add_error(ValidationError::new(
                    *path,
                    format!("Marker '{}' is already used by {}", value, other),
                ));
            }
        }
    }

    fn validate_inspector(config: &Config, result: &mut ValidationResult) {
        if config.inspector.ignore_attribute.trim().is_empty() {
            result.add_error(ValidationError::new(
                "inspector.ignore_attribute",
                "ignore_attribute cannot be empty",
            ));
        }

        if !config.inspector.enabled {
            result.add_warning(ValidationWarning::new(
                "inspector.enabled",
                "Inspector starts disabled; pointer clicks select nothing until a run completes",
            ));
        }
    }

    fn validate_generalization(config: &Config, result: &mut ValidationResult) {
        if config.generalization.min_primary_picks == 0 {
            result.add_error(ValidationError::new(
                "generalization.min_primary_picks",
                "min_primary_picks must be greater than 0",
            ));
        }
    }

    fn validate_runner(config: &Config, result: &mut ValidationResult) {
        if config.runner.dispatch_delay_ms > SLOW_DISPATCH_MS {
            result.add_warning(ValidationWarning::new(
                "runner.dispatch_delay_ms",
                format!(
                    "dispatch_delay_ms is very high (>{}ms), runs will feel unresponsive",
                    SLOW_DISPATCH_MS
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
