//! Navigation targets.
//!
//! Controllers never build paths by hand; they name a [`Route`] and the
//! navigator decides what "going there" means for the current front end.

use std::fmt;
use std::str::FromStr;

use super::foundation::{AddressId, ContactId, ParseIdError};

/// A page of the dashboard a controller can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Register,
    Login,
    UserProfile,
    UserLogout,
    ContactList,
    ContactCreate,
    ContactDetail(ContactId),
    ContactEdit(ContactId),
    AddressCreate(ContactId),
    AddressEdit(ContactId, AddressId),
}

impl Route {
    /// Renders the route as an application path.
    pub fn path(&self) -> String {
        match self {
            Route::Register => "/register".to_string(),
            Route::Login => "/login".to_string(),
            Route::UserProfile => "/dashboard/users/profile".to_string(),
            Route::UserLogout => "/dashboard/users/logout".to_string(),
            Route::ContactList => "/dashboard/contacts".to_string(),
            Route::ContactCreate => "/dashboard/contacts/create".to_string(),
            Route::ContactDetail(id) => format!("/dashboard/contacts/{}", id),
            Route::ContactEdit(id) => format!("/dashboard/contacts/{}/edit", id),
            Route::AddressCreate(id) => format!("/dashboard/contacts/{}/addresses/create", id),
            Route::AddressEdit(id, address_id) => {
                format!("/dashboard/contacts/{}/addresses/{}/edit", id, address_id)
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseIdError {
            kind: "route",
            value: s.to_string(),
        };
        let segments: Vec<&str> = s
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let route = match segments.as_slice() {
            ["register"] => Route::Register,
            ["login"] => Route::Login,
            ["dashboard", "users", "profile"] => Route::UserProfile,
            ["dashboard", "users", "logout"] => Route::UserLogout,
            ["dashboard", "contacts"] => Route::ContactList,
            ["dashboard", "contacts", "create"] => Route::ContactCreate,
            ["dashboard", "contacts", id] => Route::ContactDetail(id.parse()?),
            ["dashboard", "contacts", id, "edit"] => Route::ContactEdit(id.parse()?),
            ["dashboard", "contacts", id, "addresses", "create"] => {
                Route::AddressCreate(id.parse()?)
            }
            ["dashboard", "contacts", id, "addresses", address_id, "edit"] => {
                Route::AddressEdit(id.parse()?, address_id.parse()?)
            }
            _ => return Err(unknown()),
        };
        Ok(route)
    }
}
