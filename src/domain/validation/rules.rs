//! Individual field rules.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Draft, FormField};

// Local part, then one or more dot-terminated domain labels, then a TLD of
// at least two letters. Leading dots and ".." are checked separately.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Returns true if `value` matches the email grammar.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// One constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule<F: FormField> {
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// Non-empty, reported with the given message.
    Required(&'static str),
    /// Must match the email grammar.
    Email,
    /// Must equal another field of the same draft.
    Matches { other: F, message: &'static str },
}

impl<F: FormField> Rule<F> {
    /// Checks `value`, returning the message when the rule is violated.
    pub fn check<D: Draft<Field = F>>(&self, draft: &D, value: &str) -> Option<String> {
        let length = value.chars().count();
        match self {
            Rule::MinLength(min) if length < *min => Some(format!(
                "String must contain at least {} character(s)",
                min
            )),
            Rule::MaxLength(max) if length > *max => Some(format!(
                "String must contain at most {} character(s)",
                max
            )),
            Rule::Required(message) if value.is_empty() => Some((*message).to_string()),
            Rule::Email if !is_email(value) => Some("Invalid email".to_string()),
            Rule::Matches { other, message } if draft.value(*other) != value => {
                Some((*message).to_string())
            }
            _ => None,
        }
    }
}
