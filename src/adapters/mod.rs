//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the controllers to external systems:
//! - `rest` - Resource clients over HTTP (`reqwest`)
//! - `storage` - Credential stores (file, in-memory)
//! - `console` - Terminal notifier and navigator
//! - `memory` - Scripted and recording adapters for tests

pub mod console;
pub mod memory;
pub mod rest;
pub mod storage;

pub use console::{ConsoleNotifier, LoggingNavigator};
pub use memory::{RecordingNavigator, RecordingNotifier, ScriptedApi};
pub use rest::{ApiRequest, HttpMethod, RestClient};
pub use storage::{FileCredentialStore, InMemoryCredentialStore};
