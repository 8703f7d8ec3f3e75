//! Client-side draft validation.
//!
//! A [`Schema`] is an ordered list of field rules for one draft type. It is
//! fail-slow: every offending field is reported (one message each), passing
//! fields are not, and an accepted draft comes back exactly as it went in.
//!
//! # Example
//!
//! ```ignore
//! let schema = AddressDraft::page_schema();
//! match schema.validate(&draft) {
//!     ValidationResult::Accepted(draft) => client.create_address(&credential, id, &draft).await,
//!     ValidationResult::Rejected(errors) => show(errors.summary()),
//! }
//! ```

mod field_errors;
mod macros;
mod rules;
mod schema;

pub use field_errors::FieldErrors;
pub use rules::{is_email, Rule};
pub use schema::{Schema, ValidationResult};

use std::fmt::Debug;
use std::hash::Hash;

/// A closed enumeration of the fields of one draft type.
pub trait FormField: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Wire name of the field (matches the JSON key).
    fn name(&self) -> &'static str;
}

/// An in-memory, not-yet-persisted field set for one entity.
pub trait Draft: Clone + Debug + PartialEq + Send + Sync + 'static {
    type Field: FormField;

    /// Every field, in display order.
    fn fields() -> &'static [Self::Field];

    /// Current value of a field.
    fn value(&self, field: Self::Field) -> &str;

    /// Replaces the value of a field.
    fn set(&mut self, field: Self::Field, value: String);

    /// Looks a field up by its wire name.
    fn field_named(name: &str) -> Option<Self::Field> {
        Self::fields().iter().copied().find(|f| f.name() == name)
    }
}
