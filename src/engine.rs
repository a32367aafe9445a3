// The validation engine

use crate::{
    FieldSpec, MessageTable, RuleArg, RuleRegistry, RuleSet, UsageError, ValidationError,
    ValidationErrors, ValueSource,
};
use log::{debug, warn};

/// Outcome of a validation call.
///
/// The two failure variants are deliberately different shapes: halting
/// mode stops at the first failing rule anywhere and carries only that
/// one error, aggregating mode visits every field and carries the full
/// field-to-message map plus the configured top-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every field passed every rule
    Valid,

    /// Aggregating mode: all fields were checked, at least one failed
    Invalid {
        /// Configured top-level message
        message: String,
        /// First failure per field, in evaluation order
        errors: ValidationErrors,
    },

    /// Halting mode: validation stopped at this first failure
    Halted(ValidationError),
}

impl Verdict {
    /// True only for [`Verdict::Valid`]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Declarative rule validator.
///
/// Configuration lives on the instance; nothing is shared between
/// validators or between calls, so message overrides never leak.
///
/// # Examples
///
/// ```
/// use rulepipe::Validator;
/// use std::collections::HashMap;
///
/// let mut data = HashMap::new();
/// data.insert("name".to_string(), "Ani".to_string());
/// data.insert("age".to_string(), "27".to_string());
///
/// let validator = Validator::new();
/// let verdict = validator
///     .validate(&[("name", "required"), ("age", "required|numeric|min:17")], &data)
///     .unwrap();
/// assert!(verdict.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: RuleRegistry,
    messages: MessageTable,
    auto_respond: bool,
    error_message: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            registry: RuleRegistry::with_defaults(),
            messages: MessageTable::new(),
            auto_respond: true,
            error_message: "Masih terdapat data yang salah".to_string(),
        }
    }
}

impl Validator {
    /// Create a validator with the built-in rules and messages,
    /// halting mode enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable halting on the first failure (on by default).
    /// When disabled, every field's first failure is aggregated.
    pub fn auto_respond(mut self, active: bool) -> Self {
        self.auto_respond = active;
        self
    }

    /// Set the top-level message used for aggregated failures
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Set one message template (`"rule"` or `"field.rule"` key)
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.set(key, template);
        self
    }

    /// Merge several message templates
    pub fn messages<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.messages.merge(overrides);
        self
    }

    /// Set the conjunction word used when rendering list arguments
    pub fn conjunction(mut self, word: impl Into<String>) -> Self {
        self.messages.set_conjunction(word);
        self
    }

    /// Register a custom rule predicate
    pub fn rule<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Option<&str>, &RuleArg, bool) -> Result<bool, UsageError> + Send + Sync + 'static,
    {
        self.registry.register(name, predicate);
        self
    }

    /// Validate named inputs against their rulesets, in order.
    ///
    /// `rules` pairs an input descriptor (`"key"` or `"key:alias"`)
    /// with a pipe-delimited ruleset (`"required|min:8"`). Values come
    /// from `source`, keyed by the descriptor's key part.
    ///
    /// Returns `Err` only for usage faults (unknown rule name, argument
    /// of the wrong shape); data failures are reported in the verdict.
    pub fn validate<S>(&self, rules: &[(&str, &str)], source: &S) -> Result<Verdict, UsageError>
    where
        S: ValueSource + ?Sized,
    {
        self.run(rules, &self.messages, source)
    }

    /// Like [`Validator::validate`], with message templates overridden
    /// for this call only.
    pub fn validate_with_messages<S>(
        &self,
        rules: &[(&str, &str)],
        overrides: &[(&str, &str)],
        source: &S,
    ) -> Result<Verdict, UsageError>
    where
        S: ValueSource + ?Sized,
    {
        if overrides.is_empty() {
            return self.run(rules, &self.messages, source);
        }
        let mut table = self.messages.clone();
        table.merge(overrides.iter().map(|&(k, v)| (k, v)));
        self.run(rules, &table, source)
    }

    fn run<S>(
        &self,
        rules: &[(&str, &str)],
        table: &MessageTable,
        source: &S,
    ) -> Result<Verdict, UsageError>
    where
        S: ValueSource + ?Sized,
    {
        let mut errors = ValidationErrors::new();

        for (descriptor, ruleset) in rules {
            let spec = FieldSpec::parse(descriptor);
            let set = RuleSet::parse(ruleset);
            let value = source.get(&spec.key);
            debug!(
                "validating '{}' against {} rule(s), numeric_mode={}",
                spec.key,
                set.rules.len(),
                set.numeric_mode
            );

            for rule in &set.rules {
                // First failure wins per field
                if errors.has_field(&spec.key) {
                    break;
                }

                let predicate =
                    self.registry
                        .get(&rule.name)
                        .ok_or_else(|| UsageError::UnknownRule {
                            rule: rule.name.clone(),
                            field: spec.key.clone(),
                        })?;

                if predicate(value.as_deref(), &rule.arg, set.numeric_mode)? {
                    continue;
                }

                let message = table.format(&spec, &rule.name, &rule.arg);
                let error = ValidationError::new(&spec.key, message).with_rule(&rule.name);
                if self.auto_respond {
                    warn!("validation halted at '{}': rule '{}' failed", spec.key, rule.name);
                    return Ok(Verdict::Halted(error));
                }
                errors.add(error);
            }
        }

        if errors.is_empty() {
            Ok(Verdict::Valid)
        } else {
            warn!("validation failed for {} field(s)", errors.len());
            Ok(Verdict::Invalid {
                message: self.error_message.clone(),
                errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_rules_pass() {
        let source = data(&[("name", "Ani"), ("age", "27")]);
        let validator = Validator::new();
        let verdict = validator
            .validate(
                &[("name", "required"), ("age", "required|numeric|min:17")],
                &source,
            )
            .unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_empty_ruleset_is_valid() {
        let source = data(&[]);
        let verdict = Validator::new().validate(&[("anything", "")], &source).unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_halting_mode_stops_at_first_failure() {
        let source = data(&[("name", ""), ("age", "abc")]);
        let verdict = Validator::new()
            .validate(&[("name", "required"), ("age", "numeric")], &source)
            .unwrap();

        match verdict {
            Verdict::Halted(error) => {
                assert_eq!(error.field, "name");
                assert_eq!(error.rule, "required");
                assert_eq!(error.message, "Name tidak boleh kosong");
            }
            other => panic!("expected Halted, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregating_mode_collects_all_fields() {
        let source = data(&[("name", ""), ("age", "abc")]);
        let verdict = Validator::new()
            .auto_respond(false)
            .validate(&[("name", "required"), ("age", "numeric")], &source)
            .unwrap();

        match verdict {
            Verdict::Invalid { message, errors } => {
                assert_eq!(message, "Masih terdapat data yang salah");
                assert_eq!(errors.len(), 2);
                assert!(errors.has_field("name"));
                assert!(errors.has_field("age"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_per_field_short_circuit() {
        // `required` fails, so `min` must never run; `min`'s message
        // would mention '5'.
        let source = data(&[("name", "")]);
        let verdict = Validator::new()
            .auto_respond(false)
            .validate(&[("name", "required|min:5")], &source)
            .unwrap();

        match verdict {
            Verdict::Invalid { errors, .. } => {
                assert_eq!(errors.message_for("name"), Some("Name tidak boleh kosong"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_rule_is_a_usage_fault() {
        let source = data(&[("email", "user@example.com")]);
        let result = Validator::new().validate(&[("email", "required|emailformat")], &source);

        assert_eq!(
            result,
            Err(UsageError::UnknownRule {
                rule: "emailformat".to_string(),
                field: "email".to_string(),
            })
        );
    }

    #[test]
    fn test_alias_used_in_message() {
        let source = data(&[("pwd", "abc")]);
        let verdict = Validator::new()
            .validate(&[("pwd:password", "required|min:8")], &source)
            .unwrap();

        match verdict {
            Verdict::Halted(error) => {
                assert_eq!(error.field, "pwd");
                assert_eq!(error.message, "Password harus setidaknya 8 karakter");
            }
            other => panic!("expected Halted, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_mode_switches_min_to_magnitude() {
        let source = data(&[("age", "18")]);
        // Length is 2, magnitude is 18; numeric mode must compare magnitude
        let verdict = Validator::new()
            .validate(&[("age", "required|numeric|min:17")], &source)
            .unwrap();
        assert!(verdict.is_valid());

        // Without `numeric` in the ruleset the same rule compares length
        let verdict = Validator::new()
            .validate(&[("age", "required|min:17")], &source)
            .unwrap();
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_missing_value_fails_required() {
        let source = data(&[]);
        let verdict = Validator::new()
            .validate(&[("token", "required")], &source)
            .unwrap();
        assert!(!verdict.is_valid());
    }

    #[test]
    fn test_per_call_message_overrides_do_not_persist() {
        let source = data(&[("email", "")]);
        let validator = Validator::new();

        let verdict = validator
            .validate_with_messages(
                &[("email", "required")],
                &[("email.required", "Alamat email wajib diisi")],
                &source,
            )
            .unwrap();
        match verdict {
            Verdict::Halted(error) => assert_eq!(error.message, "Alamat email wajib diisi"),
            other => panic!("expected Halted, got {:?}", other),
        }

        // Same validator without overrides falls back to the builtin
        let verdict = validator.validate(&[("email", "required")], &source).unwrap();
        match verdict {
            Verdict::Halted(error) => assert_eq!(error.message, "Email tidak boleh kosong"),
            other => panic!("expected Halted, got {:?}", other),
        }
    }

    #[test]
    fn test_field_specific_template_beats_general() {
        let source = data(&[("email", ""), ("name", "")]);
        let validator = Validator::new()
            .auto_respond(false)
            .message("email.required", "Alamat email wajib diisi");

        let verdict = validator
            .validate(&[("email", "required"), ("name", "required")], &source)
            .unwrap();

        match verdict {
            Verdict::Invalid { errors, .. } => {
                assert_eq!(errors.message_for("email"), Some("Alamat email wajib diisi"));
                assert_eq!(errors.message_for("name"), Some("Name tidak boleh kosong"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_rule_through_builder() {
        let source = data(&[("code", "ab-12")]);
        let validator = Validator::new()
            .rule("slug", |value, _arg, _numeric| {
                Ok(value.map_or(false, |v| {
                    !v.is_empty() && v.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                }))
            })
            .message("slug", "{label} bukan slug yang valid");

        let verdict = validator.validate(&[("code", "required|slug")], &source).unwrap();
        assert!(verdict.is_valid());

        let source = data(&[("code", "ab 12")]);
        let verdict = validator.validate(&[("code", "required|slug")], &source).unwrap();
        match verdict {
            Verdict::Halted(error) => assert_eq!(error.message, "Code bukan slug yang valid"),
            other => panic!("expected Halted, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_min_argument_propagates() {
        let source = data(&[("name", "John")]);
        let result = Validator::new().validate(&[("name", "min:abc")], &source);
        assert!(matches!(result, Err(UsageError::ArgNotNumeric { .. })));
    }

    #[test]
    fn test_in_failure_message_renders_list() {
        let source = data(&[("color", "d")]);
        let verdict = Validator::new()
            .validate(&[("color", "in:a,b,c")], &source)
            .unwrap();

        match verdict {
            Verdict::Halted(error) => {
                assert_eq!(
                    error.message,
                    "Color harus memiliki nilai di antara a, b, dan c"
                );
            }
            other => panic!("expected Halted, got {:?}", other),
        }
    }
}
