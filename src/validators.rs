// Built-in rule predicates
//
// Every predicate has the same shape: it receives the raw value (if the
// input was present at all), the parsed rule argument, and the field's
// numeric-mode flag, and answers whether the rule passed. A malformed
// argument is a bug in the ruleset and surfaces as a `UsageError`.

use crate::{RuleArg, UsageError};
use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign, then either digits with an optional fraction or a bare
// fraction like ".5".
static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$").unwrap());

/// `required`: fails for a missing value or one that trims to empty.
pub fn required(value: Option<&str>, _arg: &RuleArg, _numeric: bool) -> Result<bool, UsageError> {
    match value {
        Some(v) => Ok(!v.trim().is_empty()),
        None => Ok(false),
    }
}

/// `numeric`: passes iff the value is a syntactically valid number.
pub fn numeric(value: Option<&str>, _arg: &RuleArg, _numeric: bool) -> Result<bool, UsageError> {
    match value {
        Some(v) => Ok(NUMBER_REGEX.is_match(v)),
        None => Ok(false),
    }
}

/// `min`: magnitude lower bound in numeric mode, character-length lower
/// bound otherwise.
pub fn min(value: Option<&str>, arg: &RuleArg, numeric_mode: bool) -> Result<bool, UsageError> {
    let bound = numeric_arg("min", arg)?;
    Ok(measure(value, numeric_mode).map_or(false, |n| n >= bound))
}

/// `max`: mirror of `min` with an upper bound.
pub fn max(value: Option<&str>, arg: &RuleArg, numeric_mode: bool) -> Result<bool, UsageError> {
    let bound = numeric_arg("max", arg)?;
    Ok(measure(value, numeric_mode).map_or(false, |n| n <= bound))
}

/// `in`: exact string match against the argument list. Registered under
/// the name `in`; a bare single argument is a usage error because the
/// rule only makes sense with an actual list.
pub fn one_of(value: Option<&str>, arg: &RuleArg, _numeric: bool) -> Result<bool, UsageError> {
    let items = match arg {
        RuleArg::Many(items) => items,
        _ => {
            return Err(UsageError::ArgNotList {
                rule: "in".to_string(),
            })
        }
    };
    let value = value.unwrap_or("");
    Ok(items.iter().any(|item| item == value))
}

/// What `min`/`max` compare: the parsed number in numeric mode (`None`
/// when the value does not parse, which fails the rule), the character
/// count otherwise.
fn measure(value: Option<&str>, numeric_mode: bool) -> Option<f64> {
    let value = value.unwrap_or("");
    if numeric_mode {
        value.trim().parse::<f64>().ok()
    } else {
        Some(value.chars().count() as f64)
    }
}

fn numeric_arg(rule: &str, arg: &RuleArg) -> Result<f64, UsageError> {
    let raw = match arg {
        RuleArg::Single(s) => s.as_str(),
        RuleArg::None => "undefined",
        RuleArg::Many(items) => {
            return Err(UsageError::ArgNotNumeric {
                rule: rule.to_string(),
                arg: items.join(","),
            })
        }
    };
    raw.trim().parse::<f64>().map_err(|_| UsageError::ArgNotNumeric {
        rule: rule.to_string(),
        arg: raw.to_string(),
    })
}
