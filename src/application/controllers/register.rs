//! Sign-up form.

use std::sync::Arc;

use crate::application::form::{FormContext, FormFailure, FormMessages, FormState, SubmitOutcome};
use crate::domain::navigation::Route;
use crate::domain::user::{RegisterDraft, RegisterField};
use crate::domain::validation::Schema;
use crate::ports::UserClient;

const MESSAGES: FormMessages = FormMessages {
    action: "register",
    success: "Register success",
    failure: "Failed to register",
    unreachable: "An error occurred while registering",
};

pub struct RegisterController {
    ctx: FormContext,
    users: Arc<dyn UserClient>,
    form: FormState<RegisterDraft>,
}

impl RegisterController {
    pub fn new(ctx: FormContext, users: Arc<dyn UserClient>) -> Self {
        Self {
            ctx,
            users,
            form: FormState::new(RegisterDraft::page_schema()),
        }
    }

    pub fn with_schema(mut self, schema: Schema<RegisterDraft>) -> Self {
        self.form.set_schema(schema);
        self
    }

    pub fn form(&self) -> &FormState<RegisterDraft> {
        &self.form
    }

    pub fn set(&mut self, field: RegisterField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// `POST /users`, then on to the login page.
    pub async fn submit(&mut self) -> SubmitOutcome<RegisterField> {
        let draft = match self.form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let result = FormFailure::check(self.users.register(&draft).await).map(|_| ());
        self.form
            .settle(&self.ctx, MESSAGES, result, Some(Route::Login))
            .await
    }
}
