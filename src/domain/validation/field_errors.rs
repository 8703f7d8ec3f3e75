//! Field-keyed error mapping.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::FormField;

/// Mapping from field to exactly one human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, String>,
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records a message unless the field already has one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// All messages joined for an aggregate notice.
    pub fn summary(&self) -> String {
        self.errors
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// JSON object keyed by wire field name.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .errors
            .iter()
            .map(|(field, message)| (field.name().to_string(), Value::String(message.clone())))
            .collect();
        Value::Object(map)
    }
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Field {
        First,
        Second,
    }

    impl FormField for Field {
        fn name(&self) -> &'static str {
            match self {
                Field::First => "first",
                Field::Second => "second",
            }
        }
    }

    #[test]
    fn keeps_first_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::First, "too short");
        errors.insert(Field::First, "too long");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::First), Some("too short"));
    }

    #[test]
    fn summary_follows_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Second, "Second is required");
        errors.insert(Field::First, "First is required");
        assert_eq!(errors.summary(), "First is required, Second is required");
    }

    #[test]
    fn to_json_uses_wire_names() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Second, "bad");
        assert_eq!(errors.to_json(), json!({ "second": "bad" }));
    }
}
