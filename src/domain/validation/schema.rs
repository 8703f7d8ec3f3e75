//! Ordered rule sets for a draft type.

use super::{Draft, FieldErrors, Rule};

/// Outcome of validating a draft; never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<D: Draft> {
    /// The draft, unchanged.
    Accepted(D),
    /// One message per offending field.
    Rejected(FieldErrors<D::Field>),
}

impl<D: Draft> ValidationResult<D> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }
}

/// Field rules for one draft type.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema<D: Draft> {
    rules: Vec<(D::Field, Rule<D::Field>)>,
}

impl<D: Draft> Schema<D> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds rules for a field; they are checked in the given order.
    pub fn field(mut self, field: D::Field, rules: impl IntoIterator<Item = Rule<D::Field>>) -> Self {
        self.rules
            .extend(rules.into_iter().map(|rule| (field, rule)));
        self
    }

    /// Validates every field without short-circuiting.
    ///
    /// Each field reports only the first rule it violates.
    pub fn validate(&self, draft: &D) -> ValidationResult<D> {
        let mut errors = FieldErrors::new();
        for (field, rule) in &self.rules {
            if errors.contains(*field) {
                continue;
            }
            if let Some(message) = rule.check(draft, draft.value(*field)) {
                errors.insert(*field, message);
            }
        }

        if errors.is_empty() {
            ValidationResult::Accepted(draft.clone())
        } else {
            ValidationResult::Rejected(errors)
        }
    }
}

impl<D: Draft> Default for Schema<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FormField;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Field {
        Name,
        Secret,
        Confirm,
    }

    impl FormField for Field {
        fn name(&self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Secret => "secret",
                Field::Confirm => "confirm",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct TestDraft {
        name: String,
        secret: String,
        confirm: String,
    }

    impl Draft for TestDraft {
        type Field = Field;

        fn fields() -> &'static [Field] {
            &[Field::Name, Field::Secret, Field::Confirm]
        }

        fn value(&self, field: Field) -> &str {
            match field {
                Field::Name => &self.name,
                Field::Secret => &self.secret,
                Field::Confirm => &self.confirm,
            }
        }

        fn set(&mut self, field: Field, value: String) {
            match field {
                Field::Name => self.name = value,
                Field::Secret => self.secret = value,
                Field::Confirm => self.confirm = value,
            }
        }
    }

    fn schema() -> Schema<TestDraft> {
        Schema::new()
            .field(Field::Name, [Rule::MinLength(2), Rule::MaxLength(5)])
            .field(Field::Secret, [Rule::Required("Secret is required")])
            .field(
                Field::Confirm,
                [Rule::Matches {
                    other: Field::Secret,
                    message: "Secrets do not match",
                }],
            )
    }

    #[test]
    fn reports_every_offending_field() {
        let draft = TestDraft {
            name: "x".to_string(),
            secret: String::new(),
            confirm: "y".to_string(),
        };
        let ValidationResult::Rejected(errors) = schema().validate(&draft) else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::Name),
            Some("String must contain at least 2 character(s)")
        );
        assert_eq!(errors.get(Field::Secret), Some("Secret is required"));
        assert_eq!(errors.get(Field::Confirm), Some("Secrets do not match"));
    }

    #[test]
    fn accepts_unchanged_draft() {
        let draft = TestDraft {
            name: " ab ".to_string(),
            secret: "s".to_string(),
            confirm: "s".to_string(),
        };
        assert_eq!(
            schema().validate(&draft),
            ValidationResult::Accepted(draft.clone())
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut draft = TestDraft {
            secret: "s".to_string(),
            confirm: "s".to_string(),
            ..Default::default()
        };
        draft.set(Field::Name, "ééééé".to_string());
        assert!(schema().validate(&draft).is_accepted());
    }

    #[test]
    fn field_named_resolves_wire_names() {
        assert_eq!(TestDraft::field_named("confirm"), Some(Field::Confirm));
        assert_eq!(TestDraft::field_named("nope"), None);
    }
}
