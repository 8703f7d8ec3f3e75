//! Request descriptors for every REST endpoint.
//!
//! Building a request is pure: an [`ApiRequest`] names the method, path,
//! query, headers and body, and the executor only has to put it on the wire.

use serde_json::{json, Value};
use std::fmt;

use crate::domain::address::AddressDraft;
use crate::domain::contact::{ContactDraft, ContactQuery};
use crate::domain::foundation::{AddressId, ContactId, Credential};
use crate::domain::user::{LoginDraft, RegisterDraft};

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One REST call, fully described.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    credential: Credential,
}

impl ApiRequest {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            credential: Credential::anonymous(),
        }
    }

    fn authorized(mut self, credential: &Credential) -> Self {
        self.credential = credential.clone();
        self
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Headers in the order they are sent.
    ///
    /// `Authorization` carries the token verbatim (no scheme prefix) and is
    /// omitted for an anonymous credential.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![(ACCEPT, APPLICATION_JSON.to_string())];
        if self.body.is_some() {
            headers.push((CONTENT_TYPE, APPLICATION_JSON.to_string()));
        }
        if let Some(token) = self.credential.authorization() {
            headers.push((AUTHORIZATION, token.to_string()));
        }
        headers
    }

    /// Header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers()
            .into_iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Absolute URL without the query string.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    // === Users ===

    pub fn register(draft: &RegisterDraft) -> Self {
        Self::new(HttpMethod::Post, "/users").with_body(json!({
            "username": draft.username,
            "password": draft.password,
            "name": draft.name,
        }))
    }

    pub fn login(draft: &LoginDraft) -> Self {
        Self::new(HttpMethod::Post, "/users/login").with_body(json!({
            "username": draft.username,
            "password": draft.password,
        }))
    }

    pub fn current_user(credential: &Credential) -> Self {
        Self::new(HttpMethod::Get, "/users/current").authorized(credential)
    }

    pub fn update_name(credential: &Credential, name: &str) -> Self {
        Self::new(HttpMethod::Patch, "/users/current")
            .authorized(credential)
            .with_body(json!({ "name": name }))
    }

    pub fn update_password(credential: &Credential, password: &str) -> Self {
        Self::new(HttpMethod::Patch, "/users/current")
            .authorized(credential)
            .with_body(json!({ "password": password }))
    }

    pub fn logout(credential: &Credential) -> Self {
        Self::new(HttpMethod::Delete, "/users/logout").authorized(credential)
    }

    // === Contacts ===

    pub fn create_contact(credential: &Credential, draft: &ContactDraft) -> Self {
        Self::new(HttpMethod::Post, "/contacts")
            .authorized(credential)
            .with_body(contact_body(draft))
    }

    pub fn list_contacts(credential: &Credential, query: &ContactQuery) -> Self {
        Self::new(HttpMethod::Get, "/contacts")
            .authorized(credential)
            .with_query(query.to_pairs())
    }

    pub fn get_contact(credential: &Credential, id: ContactId) -> Self {
        Self::new(HttpMethod::Get, format!("/contacts/{}", id)).authorized(credential)
    }

    pub fn update_contact(credential: &Credential, id: ContactId, draft: &ContactDraft) -> Self {
        Self::new(HttpMethod::Patch, format!("/contacts/{}", id))
            .authorized(credential)
            .with_body(contact_body(draft))
    }

    // === Addresses ===

    pub fn create_address(
        credential: &Credential,
        contact_id: ContactId,
        draft: &AddressDraft,
    ) -> Self {
        Self::new(HttpMethod::Post, format!("/contacts/{}/addresses", contact_id))
            .authorized(credential)
            .with_body(address_body(draft))
    }

    pub fn list_addresses(credential: &Credential, contact_id: ContactId) -> Self {
        Self::new(HttpMethod::Get, format!("/contacts/{}/addresses", contact_id))
            .authorized(credential)
    }

    pub fn get_address(
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
    ) -> Self {
        Self::new(
            HttpMethod::Get,
            format!("/contacts/{}/addresses/{}", contact_id, address_id),
        )
        .authorized(credential)
    }

    pub fn update_address(
        credential: &Credential,
        contact_id: ContactId,
        address_id: AddressId,
        draft: &AddressDraft,
    ) -> Self {
        Self::new(
            HttpMethod::Put,
            format!("/contacts/{}/addresses/{}", contact_id, address_id),
        )
        .authorized(credential)
        .with_body(address_body(draft))
    }
}

fn contact_body(draft: &ContactDraft) -> Value {
    json!({
        "first_name": draft.first_name,
        "last_name": draft.last_name,
        "email": draft.email,
        "phone": draft.phone,
    })
}

fn address_body(draft: &AddressDraft) -> Value {
    json!({
        "street": draft.street,
        "city": draft.city,
        "province": draft.province,
        "country": draft.country,
        "postal_code": draft.postal_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> Credential {
        Credential::new("8f2c-token")
    }

    fn sample_address() -> AddressDraft {
        AddressDraft {
            street: "Jalan Merdeka 1".to_string(),
            city: "Bandung".to_string(),
            province: "Jawa Barat".to_string(),
            country: "Indonesia".to_string(),
            postal_code: "40111".to_string(),
        }
    }

    #[test]
    fn register_is_anonymous_with_json_body() {
        let request = ApiRequest::register(&RegisterDraft {
            username: "eko".to_string(),
            password: "rahasia".to_string(),
            name: "Eko".to_string(),
        });

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/users");
        assert_eq!(request.header("authorization"), None);
        assert_eq!(request.header("content-type").as_deref(), Some(APPLICATION_JSON));
        assert_eq!(
            request.body,
            Some(json!({ "username": "eko", "password": "rahasia", "name": "Eko" }))
        );
    }

    #[test]
    fn logout_sends_token_verbatim_without_body() {
        let request = ApiRequest::logout(&token());

        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/users/logout");
        assert_eq!(request.body, None);
        assert_eq!(
            request.headers(),
            vec![
                (ACCEPT, APPLICATION_JSON.to_string()),
                (AUTHORIZATION, "8f2c-token".to_string()),
            ]
        );
    }

    #[test]
    fn anonymous_credential_omits_authorization() {
        let request = ApiRequest::current_user(&Credential::anonymous());
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("Accept").as_deref(), Some(APPLICATION_JSON));
    }

    #[test]
    fn profile_updates_send_only_the_changed_member() {
        let name = ApiRequest::update_name(&token(), "Eko Kurniawan");
        assert_eq!(name.method, HttpMethod::Patch);
        assert_eq!(name.body, Some(json!({ "name": "Eko Kurniawan" })));

        let password = ApiRequest::update_password(&token(), "baru");
        assert_eq!(password.path, "/users/current");
        assert_eq!(password.body, Some(json!({ "password": "baru" })));
    }

    #[test]
    fn contact_update_is_patch_on_the_contact() {
        let draft = ContactDraft {
            first_name: "Budi".to_string(),
            last_name: "Santoso".to_string(),
            email: "budi@example.com".to_string(),
            phone: "08123456789".to_string(),
        };
        let request = ApiRequest::update_contact(&token(), ContactId::new(42), &draft);

        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path, "/contacts/42");
        assert_eq!(request.body.as_ref().unwrap()["last_name"], "Santoso");
    }

    #[test]
    fn list_contacts_carries_non_empty_filters() {
        let query = ContactQuery::new().with_page(2).with_name("budi").with_email("");
        let request = ApiRequest::list_contacts(&token(), &query);

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("name".to_string(), "budi".to_string()),
            ]
        );
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn address_update_is_put_with_both_ids() {
        let request = ApiRequest::update_address(
            &token(),
            ContactId::new(7),
            AddressId::new(3),
            &sample_address(),
        );

        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/contacts/7/addresses/3");
        assert_eq!(request.body.as_ref().unwrap()["postal_code"], "40111");
    }

    #[test]
    fn address_create_posts_under_the_contact() {
        let request = ApiRequest::create_address(&token(), ContactId::new(7), &sample_address());
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/contacts/7/addresses");
    }

    #[test]
    fn url_joins_base_and_path() {
        let request = ApiRequest::get_address(&token(), ContactId::new(1), AddressId::new(2));
        assert_eq!(
            request.url("http://localhost:3000/api/"),
            "http://localhost:3000/api/contacts/1/addresses/2"
        );
    }
}
