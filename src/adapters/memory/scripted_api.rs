//! Scripted REST API for testing.
//!
//! Implements every resource client port without a network. Each call is
//! recorded as the [`ApiRequest`] the real client would have sent, and
//! answered from a script.
//!
//! # Features
//!
//! - Responses per method and path (consumed in order, last one repeats)
//! - A fallback queue for calls with no path-specific script
//! - Transport error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let api = ScriptedApi::new()
//!     .on(HttpMethod::Delete, "/users/logout", ApiResponse::json(200, &json!({"data": "OK"})));
//!
//! api.logout(&credential).await?;
//! assert_eq!(api.calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::adapters::rest::{ApiRequest, HttpMethod};
use crate::domain::address::AddressDraft;
use crate::domain::contact::{ContactDraft, ContactQuery};
use crate::domain::foundation::{AddressId, ContactId, Credential};
use crate::domain::user::{LoginDraft, RegisterDraft};
use crate::ports::{
    AddressClient, ApiResponse, ClientResult, ContactClient, TransportError, UserClient,
};

type Script = VecDeque<ClientResult>;

/// Scripted implementation of the resource client ports.
#[derive(Debug, Clone, Default)]
pub struct ScriptedApi {
    routes: Arc<Mutex<HashMap<(HttpMethod, String), Script>>>,
    fallback: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method path` with the given response.
    pub fn on(self, method: HttpMethod, path: impl Into<String>, response: ApiResponse) -> Self {
        self.script(method, path, Ok(response))
    }

    /// Fails `method path` at the transport level.
    pub fn failing(
        self,
        method: HttpMethod,
        path: impl Into<String>,
        error: TransportError,
    ) -> Self {
        self.script(method, path, Err(error))
    }

    /// Answers the next call without a path-specific script.
    pub fn with_response(self, response: ApiResponse) -> Self {
        self.fallback.lock().unwrap().push_back(Ok(response));
        self
    }

    fn script(self, method: HttpMethod, path: impl Into<String>, result: ClientResult) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.into()))
            .or_default()
            .push_back(result);
        self
    }

    /// Every request received, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Requests received for one method and path.
    pub fn calls_to(&self, method: HttpMethod, path: &str) -> Vec<ApiRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    fn respond(&self, request: ApiRequest) -> ClientResult {
        let key = (request.method, request.path.clone());
        self.calls.lock().unwrap().push(request);

        if let Some(script) = self.routes.lock().unwrap().get_mut(&key) {
            if script.len() > 1 {
                if let Some(result) = script.pop_front() {
                    return result;
                }
            }
            if let Some(result) = script.front() {
                return result.clone();
            }
        }

        self.fallback
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::network(format!(
                    "no scripted response for {} {}",
                    key.0, key.1
                )))
            })
    }
}

#[async_trait]
impl UserClient for ScriptedApi {
    async fn register(&self, draft: &RegisterDraft) -> ClientResult {
        self.respond(ApiRequest::register(draft))
    }

    async fn login(&self, draft: &LoginDraft) -> ClientResult {
        self.respond(ApiRequest::login(draft))
    }

    async fn current(&self, credential: &Credential) -> ClientResult {
        self.respond(ApiRequest::current_user(credential))
    }

    async fn update_name(&self, credential: &Credential, name: &str) -> ClientResult {
        self.respond(ApiRequest::update_name(credential, name))
    }

    async fn update_password(&self, credential: &Credential, password: &str) -> ClientResult {
        self.respond(ApiRequest::update_password(credential, password))
    }

    async fn logout(&self, credential: &Credential) -> ClientResult {
        self.respond(ApiRequest::logout(credential))
    }
}

#[async_trait]
impl ContactClient for ScriptedApi {
    async fn create(&self, credential: &Credential, draft: &ContactDraft) -> ClientResult {
        self.respond(ApiRequest::create_contact(credential, draft))
    }

    async fn list(&self, credential: &Credential, query: &ContactQuery) -> ClientResult {
        self.respond(ApiRequest::list_contacts(credential, query))
    }

    async fn get(&self, credential: &Credential, id: ContactId) -> ClientResult {
        self.respond(ApiRequest::get_contact(credential, id))
    }

    async fn update(
        &self,
        credential: &Credential,
        id: ContactId,
        draft: &ContactDraft,
    ) -> ClientResult {
        self.respond(ApiRequest::update_contact(credential, id, draft))
    }
}

#[async_trait]
impl AddressClient for ScriptedApi {
    async fn create(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        draft: &AddressDraft,
    ) -> ClientResult {
        self.respond(ApiRequest::create_address(credential, contact_id, draft))
    }

    async fn list(&self, credential: &Credential, contact_id: ContactId) -> ClientResult {
        self.respond(ApiRequest::list_addresses(credential, contact_id))
    }

    async fn get(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
    ) -> ClientResult {
        self.respond(ApiRequest::get_address(credential, contact_id, address_id))
    }

    async fn update(
        &self,
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
        draft: &AddressDraft,
    ) -> ClientResult {
        self.respond(ApiRequest::update_address(
            credential, contact_id, address_id, draft,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn path_script_repeats_its_last_response() {
        let api = ScriptedApi::new().on(
            HttpMethod::Get,
            "/users/current",
            ApiResponse::json(200, &json!({ "data": { "username": "eko" } })),
        );
        let credential = Credential::new("t");

        assert_eq!(api.current(&credential).await.unwrap().status(), 200);
        assert_eq!(api.current(&credential).await.unwrap().status(), 200);
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn path_script_is_consumed_in_order() {
        let api = ScriptedApi::new()
            .on(HttpMethod::Delete, "/users/logout", ApiResponse::new(500, "{}"))
            .on(HttpMethod::Delete, "/users/logout", ApiResponse::new(200, "{}"));
        let credential = Credential::new("t");

        assert_eq!(api.logout(&credential).await.unwrap().status(), 500);
        assert_eq!(api.logout(&credential).await.unwrap().status(), 200);
    }

    #[tokio::test]
    async fn unscripted_call_is_a_transport_error() {
        let api = ScriptedApi::new();
        let result = api.logout(&Credential::new("t")).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
        assert_eq!(api.calls_to(HttpMethod::Delete, "/users/logout").len(), 1);
    }

    #[tokio::test]
    async fn records_the_request_the_real_client_would_send() {
        let api = ScriptedApi::new().with_response(ApiResponse::new(200, "{}"));
        ContactClient::get(&api, &Credential::new("abc"), ContactId::new(5))
            .await
            .unwrap();

        let call = &api.calls()[0];
        assert_eq!(call.path, "/contacts/5");
        assert_eq!(call.header("Authorization").as_deref(), Some("abc"));
    }
}
