//! In-memory adapters for tests and local development.
//!
//! - **ScriptedApi** - Resource client ports answered from a script
//! - **RecordingNotifier** / **RecordingNavigator** - Keep every notice and route change

mod recording;
mod scripted_api;

pub use recording::{RecordingNavigator, RecordingNotifier};
pub use scripted_api::ScriptedApi;
