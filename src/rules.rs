// Ruleset description parsing
//
// A ruleset description is a pair of strings: an input descriptor
// ("key" or "key:alias") and a pipe-delimited ruleset
// ("rule1|rule2:arg|rule3:a,b,c").

/// A named input plus its optional display alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used to look the value up from the value source
    pub key: String,

    /// Alternative name used only in messages
    pub alias: Option<String>,
}

impl FieldSpec {
    /// Parse a descriptor of the form `"key"` or `"key:alias"`.
    pub fn parse(descriptor: &str) -> Self {
        let mut parts = descriptor.splitn(2, ':');
        let key = parts.next().unwrap_or_default().to_string();
        let alias = parts.next().map(|s| s.to_string());
        Self { key, alias }
    }

    /// Name shown in messages: the alias when present, the key otherwise.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.key)
    }
}

/// Argument attached to a rule token.
///
/// `Single` holds a bare argument; `Many` holds a comma-separated list
/// and always carries at least two elements. `None` is the sentinel for
/// rules that take no argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleArg {
    None,
    Single(String),
    Many(Vec<String>),
}

impl RuleArg {
    /// Parse a raw argument string, splitting on `,`.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<String> = raw.split(',').map(|s| s.to_string()).collect();
        if parts.len() == 1 {
            RuleArg::Single(parts.into_iter().next().unwrap())
        } else {
            RuleArg::Many(parts)
        }
    }

    /// True for the no-argument sentinel
    pub fn is_none(&self) -> bool {
        matches!(self, RuleArg::None)
    }
}

/// A single parsed rule: name plus optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInstance {
    pub name: String,
    pub arg: RuleArg,
}

impl RuleInstance {
    /// Parse a token of the form `"name"` or `"name:argument"`.
    pub fn parse(token: &str) -> Self {
        let mut parts = token.splitn(2, ':');
        let name = parts.next().unwrap_or_default().to_string();
        let arg = match parts.next() {
            Some(raw) => RuleArg::parse(raw),
            None => RuleArg::None,
        };
        Self { name, arg }
    }
}

/// The ordered rules applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Rules in evaluation order
    pub rules: Vec<RuleInstance>,

    /// True when the ruleset names the `numeric` rule, switching
    /// `min`/`max` from length comparison to magnitude comparison.
    pub numeric_mode: bool,
}

impl RuleSet {
    /// Parse a pipe-delimited ruleset string. Empty tokens are dropped,
    /// so an empty string yields an empty ruleset.
    ///
    /// Numeric mode is decided by exact rule-name match against the
    /// parsed list, so a rule named e.g. `nonnumeric` does not trigger it.
    pub fn parse(ruleset: &str) -> Self {
        let rules: Vec<RuleInstance> = ruleset
            .split('|')
            .filter(|token| !token.is_empty())
            .map(RuleInstance::parse)
            .collect();
        let numeric_mode = rules.iter().any(|r| r.name == "numeric");
        Self {
            rules,
            numeric_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_without_alias() {
        let spec = FieldSpec::parse("email");
        assert_eq!(spec.key, "email");
        assert_eq!(spec.alias, None);
        assert_eq!(spec.display_name(), "email");
    }

    #[test]
    fn test_field_spec_with_alias() {
        let spec = FieldSpec::parse("pwd:password");
        assert_eq!(spec.key, "pwd");
        assert_eq!(spec.display_name(), "password");
    }

    #[test]
    fn test_rule_without_argument() {
        let rule = RuleInstance::parse("required");
        assert_eq!(rule.name, "required");
        assert!(rule.arg.is_none());
    }

    #[test]
    fn test_rule_with_single_argument() {
        let rule = RuleInstance::parse("min:8");
        assert_eq!(rule.name, "min");
        assert_eq!(rule.arg, RuleArg::Single("8".to_string()));
    }

    #[test]
    fn test_rule_with_list_argument() {
        let rule = RuleInstance::parse("in:a,b,c");
        assert_eq!(
            rule.arg,
            RuleArg::Many(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_ruleset_keeps_order() {
        let set = RuleSet::parse("required|numeric|min:17");
        let names: Vec<&str> = set.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["required", "numeric", "min"]);
    }

    #[test]
    fn test_empty_ruleset() {
        let set = RuleSet::parse("");
        assert!(set.rules.is_empty());
        assert!(!set.numeric_mode);
    }

    #[test]
    fn test_numeric_mode_exact_match_only() {
        assert!(RuleSet::parse("required|numeric").numeric_mode);
        assert!(!RuleSet::parse("required|nonnumeric:x").numeric_mode);
    }
}
