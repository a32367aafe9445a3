// Validation and usage errors

use std::fmt;
use thiserror::Error;

/// First failing rule for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field key that failed validation
    pub field: String,

    /// Formatted, display-ready message
    pub message: String,

    /// Name of the rule that failed
    pub rule: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: "custom".to_string(),
        }
    }

    /// Set the rule name
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Aggregated per-field failures, one message per field.
///
/// Insertion order follows field evaluation order. Only the first
/// failure recorded for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of failed fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Record an error unless the field already has one
    pub fn add(&mut self, error: ValidationError) {
        if !self.has_field(&error.field) {
            self.errors.push(error);
        }
    }

    /// Check whether a field already failed
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Get the recorded message for a field
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over the recorded errors in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Convert to a `{field: message}` JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for error in &self.errors {
            map.insert(
                error.field.clone(),
                serde_json::Value::String(error.message.clone()),
            );
        }
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        let mut collected = Self::new();
        for error in errors {
            collected.add(error);
        }
        collected
    }
}

/// Fatal misuse of the engine: a bug in the ruleset, not bad input.
///
/// These propagate to the caller and are never folded into the
/// per-field error map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("no rule named '{rule}' is registered (referenced by input '{field}')")]
    UnknownRule { rule: String, field: String },

    #[error("rule '{rule}' requires a numeric argument, got '{arg}'")]
    ArgNotNumeric { rule: String, arg: String },

    #[error("rule '{rule}' requires a comma-separated list argument")]
    ArgNotList { rule: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new("email", "Email tidak boleh kosong").with_rule("required");
        assert_eq!(error.to_string(), "email: Email tidak boleh kosong");
        assert_eq!(error.rule, "required");
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("name", "first"));
        errors.add(ValidationError::new("name", "second"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("name"), Some("first"));
    }

    #[test]
    fn test_to_json_shape() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("name", "Name tidak boleh kosong"));
        errors.add(ValidationError::new("age", "Age harus berupa angka"));

        let json = errors.to_json();
        assert_eq!(json["name"], "Name tidak boleh kosong");
        assert_eq!(json["age"], "Age harus berupa angka");
    }

    #[test]
    fn test_usage_error_display() {
        let error = UsageError::UnknownRule {
            rule: "emailformat".to_string(),
            field: "email".to_string(),
        };
        assert!(error.to_string().contains("emailformat"));
        assert!(error.to_string().contains("email"));
    }
}
