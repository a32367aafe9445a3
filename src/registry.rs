// Rule registry
//
// Rules dispatch through a name lookup instead of hard-coded branches,
// so adding a rule kind means registering one entry.

use crate::{validators, RuleArg, UsageError};
use std::collections::HashMap;
use std::sync::Arc;

/// A rule predicate: `(value, argument, numeric_mode)` to pass/fail.
pub type RulePredicate =
    Arc<dyn Fn(Option<&str>, &RuleArg, bool) -> Result<bool, UsageError> + Send + Sync>;

/// Lookup from rule name to predicate.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RulePredicate>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in rules:
    /// `required`, `numeric`, `min`, `max`, `in`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("required", validators::required);
        registry.register("numeric", validators::numeric);
        registry.register("min", validators::min);
        registry.register("max", validators::max);
        registry.register("in", validators::one_of);
        registry
    }

    /// Register a predicate under a rule name, replacing any previous one
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(Option<&str>, &RuleArg, bool) -> Result<bool, UsageError> + Send + Sync + 'static,
    {
        self.rules.insert(name.into(), Arc::new(predicate));
    }

    /// Look up a predicate by rule name
    pub fn get(&self, name: &str) -> Option<&RulePredicate> {
        self.rules.get(name)
    }

    /// Check whether a rule name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("RuleRegistry").field("rules", &names).finish()
    }
}
