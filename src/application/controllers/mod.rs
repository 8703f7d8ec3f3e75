//! Form controllers, one per entity and mode.
//!
//! | Controller | Submits | Success target |
//! |---|---|---|
//! | `RegisterController` | `POST /users` | `/login` |
//! | `LoginController` | `POST /users/login` | `/dashboard/contacts` |
//! | `LogoutController` | `DELETE /users/logout` (on spawn) | `/login` |
//! | `ProfileController` | `PATCH /users/current` | none |
//! | `CreateContactController` | `POST /contacts` | `/dashboard/contacts` |
//! | `EditContactController` | `PATCH /contacts/{id}` | `/dashboard/contacts/{id}` |
//! | `CreateAddressController` | `POST /contacts/{id}/addresses` | `/dashboard/contacts/{id}` |
//! | `EditAddressController` | `PUT /contacts/{id}/addresses/{addressId}` | `/dashboard/contacts/{id}` |

mod address;
mod contact;
mod login;
mod logout;
mod profile;
mod register;

#[cfg(test)]
pub(crate) mod test_support;

pub use address::{CreateAddressController, EditAddressController};
pub use contact::{CreateContactController, EditContactController};
pub use login::LoginController;
pub use logout::{LogoutController, LogoutOutcome};
pub use profile::ProfileController;
pub use register::RegisterController;
