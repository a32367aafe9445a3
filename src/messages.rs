// Message templates and interpolation
//
// Templates carry `{label}` and `{value}` placeholders. Lookup prefers
// a field-specific key (`"email.required"`) over the general rule key
// (`"required"`), then falls back to a generic message.

use crate::{FieldSpec, RuleArg};
use std::collections::HashMap;

/// Shown when neither a field-specific nor a general template exists.
const GENERIC_MESSAGE: &str = "Terjadi kesalahan";

/// Default conjunction used when rendering list arguments.
const DEFAULT_CONJUNCTION: &str = "dan";

/// Table of message templates keyed by `"rule"` or `"field.rule"`.
///
/// Every table starts from the built-in templates; overrides merge on
/// top, last write per key wins. The table is plain owned configuration,
/// so overrides never leak into other validators or other calls.
#[derive(Debug, Clone)]
pub struct MessageTable {
    templates: HashMap<String, String>,
    conjunction: String,
}

impl Default for MessageTable {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            "required".to_string(),
            "{label} tidak boleh kosong".to_string(),
        );
        templates.insert(
            "numeric".to_string(),
            "{label} harus berupa angka".to_string(),
        );
        templates.insert(
            "min".to_string(),
            "{label} harus setidaknya {value} karakter".to_string(),
        );
        templates.insert(
            "max".to_string(),
            "{label} tidak boleh lebih dari {value} karakter".to_string(),
        );
        templates.insert(
            "in".to_string(),
            "{label} harus memiliki nilai di antara {value}".to_string(),
        );
        Self {
            templates,
            conjunction: DEFAULT_CONJUNCTION.to_string(),
        }
    }
}

impl MessageTable {
    /// Create a table seeded with the built-in templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one template
    pub fn set(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Merge overrides into the table, last write per key wins
    pub fn merge<K, V>(&mut self, overrides: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, template) in overrides {
            self.set(key, template);
        }
    }

    /// Set the conjunction word used for list arguments
    pub fn set_conjunction(&mut self, word: impl Into<String>) {
        self.conjunction = word.into();
    }

    /// Resolve the template for a field/rule pair:
    /// `"field.rule"`, then `"rule"`, then the generic fallback.
    pub fn resolve(&self, field: &str, rule: &str) -> &str {
        let specific = format!("{}.{}", field, rule);
        self.templates
            .get(&specific)
            .or_else(|| self.templates.get(rule))
            .map(|s| s.as_str())
            .unwrap_or(GENERIC_MESSAGE)
    }

    /// Resolve and interpolate the message for a failed rule.
    pub fn format(&self, spec: &FieldSpec, rule: &str, arg: &RuleArg) -> String {
        let template = self.resolve(&spec.key, rule);
        let label = capitalize(spec.display_name());
        let value = match arg {
            RuleArg::None => "undefined".to_string(),
            RuleArg::Single(s) => s.clone(),
            RuleArg::Many(items) => render_list(items, &self.conjunction),
        };
        template.replace("{label}", &label).replace("{value}", &value)
    }
}

/// Render a list argument for display: one item stands alone, two are
/// joined by the conjunction, longer lists are comma-separated with the
/// conjunction before the last item.
pub fn render_list(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [head @ .., last] => format!("{}, {} {}", head.join(", "), conjunction, last),
    }
}

/// Uppercase the first character, like the labels in messages.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
