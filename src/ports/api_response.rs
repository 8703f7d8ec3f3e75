//! Raw REST responses and transport failures.
//!
//! Resource clients hand the response back exactly as received: status plus
//! body text. Deciding what a status means, and decoding the `data` /
//! `errors` envelope, is the caller's job.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The only status treated as success by every controller.
pub const SUCCESS_STATUS: u16 = 200;

/// A response from the REST API, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Builds a response whose body is the given JSON value.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// True only for status 200; 201 and 204 are not special-cased.
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Decodes the whole body.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Decodes the `data` member of the success envelope.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        self.decode::<DataEnvelope<T>>().map(|envelope| envelope.data)
    }

    /// The `errors` member of the error envelope, as sent by the server.
    ///
    /// Returns `None` when the body is not JSON or carries no `errors`.
    pub fn errors(&self) -> Option<Value> {
        let mut envelope: Value = serde_json::from_str(&self.body).ok()?;
        match envelope.get_mut("errors").map(Value::take) {
            Some(Value::Null) | None => None,
            Some(errors) => Some(errors),
        }
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
