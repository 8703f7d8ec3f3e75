//! Application layer - Form controllers and the session they share.
//!
//! Controllers depend only on ports; wiring them to concrete adapters is
//! the binary's job.

pub mod controllers;
pub mod form;
pub mod queries;
mod session;

pub use controllers::{
    CreateAddressController, CreateContactController, EditAddressController,
    EditContactController, LoginController, LogoutController, LogoutOutcome, ProfileController,
    RegisterController,
};
pub use form::{
    FormContext, FormFailure, FormMessages, FormState, FormStatus, LoadMessages, LoadOutcome,
    SubmitOutcome,
};
pub use queries::{ContactDetail, ContactDirectory};
pub use session::SessionContext;
