//! Declarative field validation
//!
//! A model lists its fields together with the rules that apply to them; the
//! evaluator runs every rule and reports all failures at once instead of
//! stopping at the first one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{DomainError, DomainResult};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is a valid regex")
});

/// A single constraint on a string-valued field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present and not blank
    Required(&'static str),
    /// Value, when present, must look like an email address
    Email(&'static str),
    /// Value, when present, must not exceed the given number of characters
    MaxLength(usize, &'static str),
}

impl Rule {
    /// Evaluate the rule, returning the failure message when violated
    pub fn check(&self, value: Option<&str>) -> Option<&'static str> {
        match *self {
            Rule::Required(message) => match value {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some(message),
            },
            Rule::Email(message) => match value {
                Some(v) if !v.is_empty() && !is_valid_email(v) => Some(message),
                _ => None,
            },
            Rule::MaxLength(max, message) => match value {
                Some(v) if v.chars().count() > max => Some(message),
                _ => None,
            },
        }
    }
}

/// Rules attached to one field of a model
#[derive(Debug, Clone)]
pub struct FieldRules<'a> {
    pub field: &'static str,
    pub value: Option<&'a str>,
    pub rules: &'static [Rule],
}

impl<'a> FieldRules<'a> {
    pub fn new(field: &'static str, value: Option<&'a str>, rules: &'static [Rule]) -> Self {
        Self {
            field,
            value,
            rules,
        }
    }
}

/// One failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Trait for models carrying declarative field rules
pub trait Validatable {
    /// Fields and the rules that apply to them, in reporting order
    fn field_rules(&self) -> Vec<FieldRules<'_>>;

    /// Validate the model, collecting every failure into one error
    fn validate(&self) -> DomainResult<()> {
        validate_model(self)
    }

    /// Check validity without the error details
    fn is_valid(&self) -> bool {
        violations(self).is_empty()
    }
}

/// All rule violations of a model, in field declaration order
pub fn violations<T: Validatable + ?Sized>(model: &T) -> Vec<Violation> {
    model
        .field_rules()
        .iter()
        .flat_map(|field| {
            field.rules.iter().filter_map(move |rule| {
                rule.check(field.value).map(|message| Violation {
                    field: field.field,
                    message,
                })
            })
        })
        .collect()
}

/// Validate a model, returning `DomainError::Validation` with every message
pub fn validate_model<T: Validatable + ?Sized>(model: &T) -> DomainResult<()> {
    let failed = violations(model);
    if failed.is_empty() {
        return Ok(());
    }
    Err(DomainError::Validation {
        messages: failed.iter().map(|v| v.message.to_string()).collect(),
    })
}

/// Email address syntax check
///
/// The domain part must contain at least one dot, so `user@localhost` is
/// rejected.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
