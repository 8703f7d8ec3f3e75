//! Strongly-typed identifier value objects.
//!
//! The API hands out numeric identifiers; routing supplies them as path
//! segments, so both directions (`Display` and `FromStr`) are provided.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseIdError;

/// Identifier of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self).map_err(|_| ParseIdError {
            kind: "contact id",
            value: s.to_string(),
        })
    }
}

/// Identifier of an address, scoped to its contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(i64);

impl AddressId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AddressId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self).map_err(|_| ParseIdError {
            kind: "address id",
            value: s.to_string(),
        })
    }
}
