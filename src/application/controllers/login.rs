//! Sign-in form. A successful login stores the issued token.

use std::sync::Arc;

use crate::application::form::{FormContext, FormFailure, FormMessages, FormState, SubmitOutcome};
use crate::domain::foundation::Credential;
use crate::domain::navigation::Route;
use crate::domain::user::{LoginDraft, LoginField, LoginToken};
use crate::domain::validation::Schema;
use crate::ports::{ApiResponse, UserClient};

const MESSAGES: FormMessages = FormMessages {
    action: "login",
    success: "Login success",
    failure: "Failed to login",
    unreachable: "An error occurred while logging in",
};

pub struct LoginController {
    ctx: FormContext,
    users: Arc<dyn UserClient>,
    form: FormState<LoginDraft>,
}

impl LoginController {
    pub fn new(ctx: FormContext, users: Arc<dyn UserClient>) -> Self {
        Self {
            ctx,
            users,
            form: FormState::new(LoginDraft::page_schema()),
        }
    }

    pub fn with_schema(mut self, schema: Schema<LoginDraft>) -> Self {
        self.form.set_schema(schema);
        self
    }

    pub fn form(&self) -> &FormState<LoginDraft> {
        &self.form
    }

    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// `POST /users/login`; on 200 the `data.token` becomes the session
    /// credential before navigating to the contact list.
    pub async fn submit(&mut self) -> SubmitOutcome<LoginField> {
        let draft = match self.form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let result = match FormFailure::check(self.users.login(&draft).await) {
            Ok(response) => self.store_token(&response).await,
            Err(failure) => Err(failure),
        };

        self.form
            .settle(&self.ctx, MESSAGES, result, Some(Route::ContactList))
            .await
    }

    async fn store_token(&self, response: &ApiResponse) -> Result<(), FormFailure> {
        let issued: LoginToken = response
            .data()
            .map_err(|e| FormFailure::decode(e.to_string()))?;
        if issued.token.is_empty() {
            return Err(FormFailure::decode("login response carried an empty token"));
        }

        self.ctx
            .session()
            .sign_in(Credential::new(issued.token))
            .await
            .map_err(|e| FormFailure::storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::ScriptedApi;
    use crate::adapters::rest::HttpMethod;
    use crate::application::controllers::test_support::Harness;
    use crate::application::form::FormStatus;
    use crate::ports::CredentialStore;
    use serde_json::json;

    fn filled(harness: &Harness, api: ScriptedApi) -> LoginController {
        let mut controller = LoginController::new(harness.ctx.clone(), Arc::new(api));
        controller.set(LoginField::Username, "eko");
        controller.set(LoginField::Password, "rahasia");
        controller
    }

    #[tokio::test]
    async fn success_stores_token_and_opens_contacts() {
        let harness = Harness::anonymous().await;
        let api = ScriptedApi::new().on(
            HttpMethod::Post,
            "/users/login",
            ApiResponse::json(200, &json!({ "data": { "token": "8f2c-token" } })),
        );
        let mut controller = filled(&harness, api);

        let outcome = controller.submit().await;

        assert_eq!(outcome.target(), Some(Route::ContactList));
        assert_eq!(harness.store.load().await, Credential::new("8f2c-token"));
        assert_eq!(
            harness.ctx.session().credential().await,
            Credential::new("8f2c-token")
        );
        assert_eq!(harness.navigator.routes(), vec![Route::ContactList]);
    }

    #[tokio::test]
    async fn wrong_password_keeps_session_anonymous() {
        let harness = Harness::anonymous().await;
        let api = ScriptedApi::new().on(
            HttpMethod::Post,
            "/users/login",
            ApiResponse::json(401, &json!({ "errors": "Username or password wrong" })),
        );
        let mut controller = filled(&harness, api);

        let outcome = controller.submit().await;

        let SubmitOutcome::Failed(failure) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(failure.code().to_string(), "UNAUTHORIZED");
        assert!(!harness.store.load().await.is_authenticated());
        assert_eq!(controller.form().status(), FormStatus::Idle);
        assert!(harness.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn ok_without_token_is_a_decode_failure() {
        let harness = Harness::anonymous().await;
        let api = ScriptedApi::new().on(
            HttpMethod::Post,
            "/users/login",
            ApiResponse::json(200, &json!({ "data": {} })),
        );
        let mut controller = filled(&harness, api);

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(FormFailure::Decode(_))));
        assert_eq!(harness.notifier.errors()[0].message, "Failed to login");
        assert!(harness.notifier.successes().is_empty());
    }
}
