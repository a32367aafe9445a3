//! Declarative pipe-rule validation for named inputs
//!
//! Each input is checked against a pipe-delimited ruleset string such as
//! `"required|numeric|min:17"`. Rules run in order and stop at the first
//! failure per field. Failure messages come from a template table with
//! `{label}` and `{value}` placeholders and can be overridden per rule,
//! per field, or per call.
//!
//! # Examples
//!
//! ## Basic validation
//!
//! ```
//! use rulepipe::{Validator, Verdict};
//! use std::collections::HashMap;
//!
//! let mut data = HashMap::new();
//! data.insert("name".to_string(), "Ani".to_string());
//! data.insert("age".to_string(), "27".to_string());
//!
//! let validator = Validator::new();
//! let verdict = validator
//!     .validate(&[("name", "required"), ("age", "required|numeric|min:17")], &data)
//!     .unwrap();
//! assert!(verdict.is_valid());
//! ```
//!
//! ## Aggregating every failure
//!
//! By default the validator halts at the first failing rule. Disable
//! `auto_respond` to visit every field and collect each one's first
//! failure:
//!
//! ```
//! use rulepipe::{Validator, Verdict};
//! use std::collections::HashMap;
//!
//! let data: HashMap<String, String> = HashMap::new();
//!
//! let validator = Validator::new().auto_respond(false);
//! let verdict = validator
//!     .validate(&[("name", "required"), ("email", "required")], &data)
//!     .unwrap();
//!
//! match verdict {
//!     Verdict::Invalid { errors, .. } => assert_eq!(errors.len(), 2),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Custom messages and rules
//!
//! ```
//! use rulepipe::{Validator, Verdict};
//! use std::collections::HashMap;
//!
//! let mut data = HashMap::new();
//! data.insert("email".to_string(), "".to_string());
//!
//! let validator = Validator::new()
//!     .message("email.required", "Alamat email wajib diisi")
//!     .rule("lowercase", |value, _arg, _numeric| {
//!         Ok(value.map_or(false, |v| v.chars().all(|c| !c.is_uppercase())))
//!     });
//!
//! let verdict = validator.validate(&[("email", "required")], &data).unwrap();
//! match verdict {
//!     Verdict::Halted(error) => assert_eq!(error.message, "Alamat email wajib diisi"),
//!     _ => unreachable!(),
//! }
//! ```

mod engine;
mod errors;
mod messages;
mod pipe;
mod registry;
mod rules;
mod traits;
pub mod validators;

pub use engine::{Validator, Verdict};
pub use errors::{UsageError, ValidationError, ValidationErrors};
pub use messages::{capitalize, render_list, MessageTable};
pub use pipe::{respond_on_failure, FailureResponse, Responder, FAILURE_STATUS};
pub use registry::{RulePredicate, RuleRegistry};
pub use rules::{FieldSpec, RuleArg, RuleInstance, RuleSet};
pub use traits::ValueSource;
