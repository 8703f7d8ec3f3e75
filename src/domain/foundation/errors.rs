//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Local errors
    InvalidStateTransition,

    // Remote errors
    RequestFailed,
    Unauthorized,

    // Infrastructure errors
    TransportFailed,
    DecodeFailed,
    StorageFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::RequestFailed => "REQUEST_FAILED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::TransportFailed => "TRANSPORT_FAILED",
            ErrorCode::DecodeFailed => "DECODE_FAILED",
            ErrorCode::StorageFailed => "STORAGE_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// A status change the state machine does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: String,
    pub to: String,
}

impl InvalidTransition {
    pub fn new(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        Self {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidStateTransition
    }
}

/// A route or identifier string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: '{value}'")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::RequestFailed), "REQUEST_FAILED");
        assert_eq!(format!("{}", ErrorCode::TransportFailed), "TRANSPORT_FAILED");
        assert_eq!(
            format!("{}", ErrorCode::InvalidStateTransition),
            "INVALID_STATE_TRANSITION"
        );
    }

    #[test]
    fn invalid_transition_displays_both_states() {
        #[derive(Debug)]
        enum S {
            Idle,
            Succeeded,
        }
        let err = InvalidTransition::new(S::Succeeded, S::Idle);
        assert_eq!(err.to_string(), "Cannot transition from Succeeded to Idle");
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn parse_id_error_names_the_kind() {
        let err = ParseIdError {
            kind: "contact id",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid contact id: 'abc'");
    }
}
