//! The form lifecycle every controller shares.
//!
//! A controller owns a [`FormState`] and a [`FormContext`]. Submitting runs
//! the same handshake for every entity:
//!
//! 1. `begin` validates; a rejection notifies and stops before the network
//! 2. the controller makes its one resource client call
//! 3. [`FormFailure::check`] lets status 200 through and nothing else
//! 4. `settle` notifies, navigates, and resets the status

mod context;
mod outcome;
mod state;
mod status;

pub use context::{FormContext, FormMessages, LoadMessages};
pub use outcome::{FormFailure, LoadOutcome, SubmitOutcome};
pub use state::FormState;
pub use status::FormStatus;
