//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the session credential, the state machine trait
//! and error types that form the vocabulary of the contact-desk domain.

mod credential;
mod errors;
mod ids;
mod serde_ext;
mod state_machine;

pub use credential::Credential;
pub use errors::{ErrorCode, InvalidTransition, ParseIdError};
pub use ids::{AddressId, ContactId};
pub use serde_ext::null_as_empty;
pub use state_machine::StateMachine;
