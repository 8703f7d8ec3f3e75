//! Domain layer containing drafts, validation rules and read models.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, credential, errors, state machine)
//! - `validation` - Field rules, schemas and field-keyed error mappings
//! - `user` - Registration, login and profile drafts
//! - `contact` - Contact draft, records and list filters
//! - `address` - Address draft and records
//! - `navigation` - Routes a controller can navigate to

pub mod address;
pub mod contact;
pub mod foundation;
pub mod navigation;
pub mod user;
pub mod validation;
