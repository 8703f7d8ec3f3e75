//! REST client - Implementation of the resource client ports over `reqwest`.
//!
//! # Configuration
//!
//! ```ignore
//! let client = RestClient::from_config(&config.api)?;
//! let response = client.logout(&credential).await?;
//! ```
//!
//! The client performs one round trip per call. It sets no timeout and never
//! retries; any status, 4xx and 5xx included, comes back as `Ok`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::request::ApiRequest;
use crate::config::ApiConfig;
use crate::domain::address::AddressDraft;
use crate::domain::contact::{ContactDraft, ContactQuery};
use crate::domain::foundation::{AddressId, ContactId, Credential};
use crate::domain::user::{LoginDraft, RegisterDraft};
use crate::ports::{
    AddressClient, ApiResponse, ClientResult, ContactClient, TransportError, UserClient,
};

/// HTTP implementation of [`UserClient`], [`ContactClient`] and [`AddressClient`].
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: Client,
}

impl RestClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::invalid_request(format!("HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Puts a request on the wire and reads the whole body back.
    pub async fn execute(&self, request: ApiRequest) -> ClientResult {
        debug!(method = %request.method, path = %request.path, "Dispatching request");

        let mut builder = self
            .client
            .request(request.method.into(), request.url(&self.base_url));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!(method = %request.method, path = %request.path, status, "Response received");
        Ok(ApiResponse::new(status, body))
    }
}

fn map_send_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::invalid_request(error.to_string())
    } else if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::connect(error.to_string())
    } else {
        TransportError::network(error.to_string())
    }
}

#[async_trait]
impl UserClient for RestClient {
    async fn register(&self, draft: &RegisterDraft) -> ClientResult {
        self.execute(ApiRequest::register(draft)).await
    }

    async fn login(&self, draft: &LoginDraft) -> ClientResult {
        self.execute(ApiRequest::login(draft)).await
    }

    async fn current(&self, credential: &Credential) -> ClientResult {
        self.execute(ApiRequest::current_user(credential)).await
    }

    async fn update_name(&self, credential: &Credential, name: &str) -> ClientResult {
        self.execute(ApiRequest::update_name(credential, name)).await
    }

    async fn update_password(&self, credential: &Credential, password: &str) -> ClientResult {
        self.execute(ApiRequest::update_password(credential, password))
            .await
    }

    async fn logout(&self, credential: &Credential) -> ClientResult {
        self.execute(ApiRequest::logout(credential)).await
    }
}

#[async_trait]
impl ContactClient for RestClient {
    async fn create(&self, credential: &Credential, draft: &ContactDraft) -> ClientResult {
        self.execute(ApiRequest::create_contact(credential, draft))
            .await
    }

    async fn list(&self, credential: &Credential, query: &ContactQuery) -> ClientResult {
        self.execute(ApiRequest::list_contacts(credential, query))
            .await
    }

    async fn get(&self, credential: &Credential, id: ContactId) -> ClientResult {
        self.execute(ApiRequest::get_contact(credential, id)).await
    }

    async fn update(
        &self,
        credential: &Credential,
        id: ContactId,
        draft: &ContactDraft,
    ) -> ClientResult {
        self.execute(ApiRequest::update_contact(credential, id, draft))
            .await
    }
}

#[async_trait]
impl AddressClient for RestClient {
    async fn create(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        draft: &AddressDraft,
    ) -> ClientResult {
        self.execute(ApiRequest::create_address(credential, contact_id, draft))
            .await
    }

    async fn list(&self, credential: &Credential, contact_id: ContactId) -> ClientResult {
        self.execute(ApiRequest::list_addresses(credential, contact_id))
            .await
    }

    async fn get(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
    ) -> ClientResult {
        self.execute(ApiRequest::get_address(credential, contact_id, address_id))
            .await
    }

    async fn update(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
        draft: &AddressDraft,
    ) -> ClientResult {
        self.execute(ApiRequest::update_address(
            credential, contact_id, address_id, draft,
        ))
        .await
    }
}
