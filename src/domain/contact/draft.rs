//! Contact draft and its validation schemas.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::null_as_empty;
use crate::domain::validation::{Rule, Schema};

/// A contact being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

impl ContactDraft {
    /// Bounds and email format, as checked by the reusable contact form.
    pub fn form_schema() -> Schema<Self> {
        Schema::new()
            .field(ContactField::FirstName, [Rule::MinLength(2), Rule::MaxLength(100)])
            .field(ContactField::LastName, [Rule::MinLength(2), Rule::MaxLength(100)])
            .field(ContactField::Email, [Rule::Email])
            .field(ContactField::Phone, [Rule::MinLength(8), Rule::MaxLength(15)])
    }

    /// Presence only, as checked by the create/edit contact pages.
    pub fn page_schema() -> Schema<Self> {
        Schema::new()
            .field(ContactField::FirstName, [Rule::Required("First name is required")])
            .field(ContactField::LastName, [Rule::Required("Last name is required")])
            .field(ContactField::Email, [Rule::Required("Email is required")])
            .field(ContactField::Phone, [Rule::Required("Phone is required")])
    }
}

crate::impl_draft!(ContactDraft, ContactField {
    FirstName => first_name,
    LastName => last_name,
    Email => email,
    Phone => phone,
});
