//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the form controllers and the outside world. Adapters implement these ports.
//!
//! ## Remote Ports
//!
//! - `UserClient`, `ContactClient`, `AddressClient` - One REST round trip per call
//!
//! ## Local Ports
//!
//! - `CredentialStore` - The persisted session token
//! - `Notifier` - User-visible success and error notices
//! - `Navigator` - Route changes after a form settles

mod api_response;
mod credential_store;
mod navigator;
mod notifier;
mod resource_clients;

pub use api_response::{ApiResponse, TransportError, SUCCESS_STATUS};
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use navigator::Navigator;
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use resource_clients::{AddressClient, ClientResult, ContactClient, UserClient};
