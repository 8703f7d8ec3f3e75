//! Read-only views that do not drive a form.

mod contacts;

pub use contacts::{ContactDetail, ContactDirectory};
