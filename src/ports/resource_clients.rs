//! Resource client ports, one trait per REST resource.
//!
//! Every method performs exactly one round trip and returns the
//! [`ApiResponse`] unmodified. Implementations must not:
//! - interpret the status (a 400 is `Ok(response)`, not an error)
//! - retry, or enforce a timeout of their own
//!
//! `Err` is reserved for transport failures where no response exists.

use async_trait::async_trait;

use super::{ApiResponse, TransportError};
use crate::domain::address::AddressDraft;
use crate::domain::contact::{ContactDraft, ContactQuery};
use crate::domain::foundation::{AddressId, ContactId, Credential};
use crate::domain::user::{LoginDraft, RegisterDraft};

/// Result of one resource client call.
pub type ClientResult = Result<ApiResponse, TransportError>;

/// `/users` endpoints.
#[async_trait]
pub trait UserClient: Send + Sync {
    /// `POST /users`
    async fn register(&self, draft: &RegisterDraft) -> ClientResult;

    /// `POST /users/login`
    async fn login(&self, draft: &LoginDraft) -> ClientResult;

    /// `GET /users/current`
    async fn current(&self, credential: &Credential) -> ClientResult;

    /// `PATCH /users/current` with `{name}`
    async fn update_name(&self, credential: &Credential, name: &str) -> ClientResult;

    /// `PATCH /users/current` with `{password}`
    async fn update_password(&self, credential: &Credential, password: &str) -> ClientResult;

    /// `DELETE /users/logout`
    async fn logout(&self, credential: &Credential) -> ClientResult;
}

/// `/contacts` endpoints.
#[async_trait]
pub trait ContactClient: Send + Sync {
    /// `POST /contacts`
    async fn create(&self, credential: &Credential, draft: &ContactDraft) -> ClientResult;

    /// `GET /contacts` with optional filters
    async fn list(&self, credential: &Credential, query: &ContactQuery) -> ClientResult;

    /// `GET /contacts/{id}`
    async fn get(&self, credential: &Credential, id: ContactId) -> ClientResult;

    /// `PATCH /contacts/{id}`
    async fn update(
        &self,
        credential: &Credential,
        id: ContactId,
        draft: &ContactDraft,
    ) -> ClientResult;
}

/// `/contacts/{id}/addresses` endpoints.
#[async_trait]
pub trait AddressClient: Send + Sync {
    /// `POST /contacts/{id}/addresses`
    async fn create(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        draft: &AddressDraft,
    ) -> ClientResult;

    /// `GET /contacts/{id}/addresses`
    async fn list(&self, credential: &Credential, contact_id: ContactId) -> ClientResult;

    /// `GET /contacts/{id}/addresses/{addressId}`
    async fn get(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
    ) -> ClientResult;

    /// `PUT /contacts/{id}/addresses/{addressId}`
    async fn update(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
        draft: &AddressDraft,
    ) -> ClientResult;
}
