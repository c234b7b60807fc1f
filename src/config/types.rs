use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::artifact::DEFAULT_PLURAL_FORMS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheSettings {
    /// Extension of derived artifacts, without the dot.
    pub artifact_extension: String,
    /// Extension of compiled catalogs, without the dot.
    pub catalog_extension: String,

    /// Value of the artifact's `generator` field.
    pub generator: String,
    /// Value of the artifact's `domain` field. Independent of the loaded domain.
    pub artifact_domain: String,
    /// Recorded when a catalog has no `Plural-Forms` header.
    pub default_plural_forms: String,

    /// Four-space indented artifacts when true, single-line otherwise.
    pub pretty_print: bool,

    /// Catalogs picked up by the warm-up scan, relative to the scanned root.
    pub catalog_pattern: String,
    pub exclude_patterns: Vec<String>,
}

impl CacheSettings {
    /// # Errors
    /// - Empty or dotted extension
    /// - Artifact extension equal to the catalog extension
    /// - Empty generator or artifact domain
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, extension) in [
            ("artifactExtension", &self.artifact_extension),
            ("catalogExtension", &self.catalog_extension),
        ] {
            if extension.is_empty() {
                errors.push(ValidationError::new(
                    field,
                    "The extension cannot be empty. Example: \"json\"",
                ));
            } else if extension.starts_with('.') {
                errors.push(ValidationError::new(
                    field,
                    format!(
                        "Specify the extension without a leading dot: \"{}\"",
                        extension.trim_start_matches('.')
                    ),
                ));
            }
        }

        if !self.artifact_extension.is_empty() && self.artifact_extension == self.catalog_extension {
            errors.push(ValidationError::new(
                "artifactExtension",
                "The artifact extension must differ from the catalog extension, otherwise catalogs would be overwritten",
            ));
        }

        if self.generator.is_empty() {
            errors.push(ValidationError::new("generator", "The generator cannot be empty"));
        }

        if self.artifact_domain.is_empty() {
            errors.push(ValidationError::new(
                "artifactDomain",
                "The domain cannot be empty. Example: \"messages\"",
            ));
        }

        if let Err(e) = globset::Glob::new(&self.catalog_pattern) {
            errors.push(ValidationError::new(
                "catalogPattern",
                format!("Invalid glob pattern '{}': {e}", self.catalog_pattern),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            artifact_extension: "json".to_string(),
            catalog_extension: "mo".to_string(),
            generator: "system".to_string(),
            artifact_domain: "messages".to_string(),
            default_plural_forms: DEFAULT_PLURAL_FORMS.to_string(),
            pretty_print: true,
            catalog_pattern: "**/*.mo".to_string(),
            exclude_patterns: Vec::new(),
        }
    }
}
