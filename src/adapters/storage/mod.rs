//! Storage Adapters
//!
//! Implementations of the CredentialStore port.
//!
//! ## Available Adapters
//!
//! - **FileCredentialStore** - Stores the token as a JSON file on disk
//! - **InMemoryCredentialStore** - Stores the token in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileCredentialStore, InMemoryCredentialStore};
//!
//! // CLI: file-based storage
//! let store = FileCredentialStore::from_config(&config.storage);
//!
//! // Testing: in-memory storage
//! let store = InMemoryCredentialStore::with_token("abc");
//! ```

mod file_credential_store;
mod in_memory_credential_store;

pub use file_credential_store::FileCredentialStore;
pub use in_memory_credential_store::InMemoryCredentialStore;
