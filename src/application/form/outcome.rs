//! What a submit or load ended in.

use serde_json::Value;

use super::FormStatus;
use crate::domain::foundation::ErrorCode;
use crate::domain::navigation::Route;
use crate::domain::validation::{FieldErrors, FormField};
use crate::ports::{ApiResponse, ClientResult, TransportError};

/// A submission or load that reached the network and did not succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum FormFailure {
    /// The server answered with anything but 200.
    Request { status: u16, errors: Option<Value> },
    /// No response was received.
    Transport(TransportError),
    /// A 200 whose body could not be read.
    Decode(String),
    /// The credential could not be persisted.
    Storage(String),
}

impl FormFailure {
    /// Interprets a client result: only status 200 passes.
    pub fn check(result: ClientResult) -> Result<ApiResponse, FormFailure> {
        let response = result.map_err(FormFailure::Transport)?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(FormFailure::Request {
                status: response.status(),
                errors: response.errors(),
            })
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        FormFailure::Decode(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        FormFailure::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FormFailure::Request { status: 401, .. } => ErrorCode::Unauthorized,
            FormFailure::Request { .. } => ErrorCode::RequestFailed,
            FormFailure::Transport(_) => ErrorCode::TransportFailed,
            FormFailure::Decode(_) => ErrorCode::DecodeFailed,
            FormFailure::Storage(_) => ErrorCode::StorageFailed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            FormFailure::Request { status, .. } => format!("Request failed with status {}", status),
            FormFailure::Transport(e) => e.to_string(),
            FormFailure::Decode(msg) => format!("Unexpected response body: {}", msg),
            FormFailure::Storage(msg) => format!("Credential storage failed: {}", msg),
        }
    }

    /// Server-supplied error detail, passed through untouched.
    pub fn detail(&self) -> Option<Value> {
        match self {
            FormFailure::Request { errors, .. } => errors.clone(),
            _ => None,
        }
    }

    /// Request failures are the server's answer; everything else is ours.
    pub fn is_request(&self) -> bool {
        matches!(self, FormFailure::Request { .. })
    }
}

impl std::fmt::Display for FormFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FormFailure {}

impl From<TransportError> for FormFailure {
    fn from(err: TransportError) -> Self {
        FormFailure::Transport(err)
    }
}

/// Result of one `submit` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<F: FormField> {
    /// Validation failed; nothing was sent.
    Rejected(FieldErrors<F>),
    /// Status 200. `target` is where the user was sent, if anywhere.
    Succeeded { target: Option<Route> },
    /// Sent, but did not succeed. The form is back to Idle.
    Failed(FormFailure),
    /// The form was not Idle; nothing happened.
    NotReady(FormStatus),
}

impl<F: FormField> SubmitOutcome<F> {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }

    pub fn target(&self) -> Option<Route> {
        match self {
            SubmitOutcome::Succeeded { target } => *target,
            _ => None,
        }
    }
}

/// Result of the read issued when an edit form mounts.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    /// The draft stays empty; the form is still usable.
    Failed(FormFailure),
    NotReady(FormStatus),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }
}
