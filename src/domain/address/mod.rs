//! Contact addresses.
//!
//! Two schemas exist for the same draft and they do not agree: the reusable
//! address form enforces length bounds, the create/edit pages only require
//! each field to be present. The driving controller picks one.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{null_as_empty, AddressId};
use crate::domain::validation::{Rule, Schema};

/// An address being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDraft {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub province: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub postal_code: String,
}

impl AddressDraft {
    /// Length bounds, as checked by the reusable address form.
    pub fn form_schema() -> Schema<Self> {
        let name_bounds = || [Rule::MinLength(2), Rule::MaxLength(100)];
        Schema::new()
            .field(AddressField::Street, name_bounds())
            .field(AddressField::City, name_bounds())
            .field(AddressField::Province, name_bounds())
            .field(AddressField::Country, name_bounds())
            .field(AddressField::PostalCode, [Rule::MinLength(5), Rule::MaxLength(10)])
    }

    /// Presence only, as checked by the create/edit address pages.
    pub fn page_schema() -> Schema<Self> {
        Schema::new()
            .field(AddressField::Street, [Rule::Required("Street is required")])
            .field(AddressField::City, [Rule::Required("City is required")])
            .field(AddressField::Province, [Rule::Required("Province/State is required")])
            .field(AddressField::Country, [Rule::Required("Country is required")])
            .field(AddressField::PostalCode, [Rule::Required("Postal Code is required")])
    }
}

crate::impl_draft!(AddressDraft, AddressField {
    Street => street,
    City => city,
    Province => province,
    Country => country,
    PostalCode => postal_code,
});

/// An address as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub id: AddressId,
    #[serde(flatten)]
    pub address: AddressDraft,
}
