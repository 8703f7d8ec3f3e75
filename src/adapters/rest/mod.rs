//! Outbound REST adapter.
//!
//! `request` builds one descriptor per endpoint; `RestClient` executes them
//! with `reqwest` and implements every resource client port.

mod request;
mod rest_client;

pub use request::{ApiRequest, HttpMethod};
pub use rest_client::RestClient;
