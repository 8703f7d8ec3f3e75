//! Create and edit contact forms.

use std::sync::Arc;

use crate::application::form::{
    FormContext, FormFailure, FormMessages, FormState, FormStatus, LoadMessages, LoadOutcome,
    SubmitOutcome,
};
use crate::domain::contact::{ContactDraft, ContactField};
use crate::domain::foundation::ContactId;
use crate::domain::navigation::Route;
use crate::domain::validation::Schema;
use crate::ports::ContactClient;

const CREATE: FormMessages = FormMessages {
    action: "create_contact",
    success: "Contact created successfully",
    failure: "Failed to create contact",
    unreachable: "An error occurred while creating contact",
};

const UPDATE: FormMessages = FormMessages {
    action: "update_contact",
    success: "Contact updated successfully",
    failure: "Failed to update contact",
    unreachable: "An error occurred while updating contact",
};

pub(crate) const LOAD_CONTACT: LoadMessages = LoadMessages {
    action: "load_contact",
    failure: "Failed to fetch contact details",
    unreachable: "An error occurred while fetching contact details",
};

/// New contact, checked with the reusable form's bounds.
pub struct CreateContactController {
    ctx: FormContext,
    contacts: Arc<dyn ContactClient>,
    form: FormState<ContactDraft>,
}

impl CreateContactController {
    pub fn new(ctx: FormContext, contacts: Arc<dyn ContactClient>) -> Self {
        Self {
            ctx,
            contacts,
            form: FormState::new(ContactDraft::form_schema()),
        }
    }

    pub fn with_schema(mut self, schema: Schema<ContactDraft>) -> Self {
        self.form.set_schema(schema);
        self
    }

    pub fn form(&self) -> &FormState<ContactDraft> {
        &self.form
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// `POST /contacts`, then back to the list.
    pub async fn submit(&mut self) -> SubmitOutcome<ContactField> {
        let draft = match self.form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(self.contacts.create(&credential, &draft).await).map(|_| ());
        self.form
            .settle(&self.ctx, CREATE, result, Some(Route::ContactList))
            .await
    }
}

/// Existing contact, loaded on mount and checked for presence only.
pub struct EditContactController {
    ctx: FormContext,
    contacts: Arc<dyn ContactClient>,
    contact_id: ContactId,
    form: FormState<ContactDraft>,
}

impl EditContactController {
    pub fn new(ctx: FormContext, contacts: Arc<dyn ContactClient>, contact_id: ContactId) -> Self {
        Self {
            ctx,
            contacts,
            contact_id,
            form: FormState::loading(ContactDraft::page_schema()),
        }
    }

    pub async fn mount(
        ctx: FormContext,
        contacts: Arc<dyn ContactClient>,
        contact_id: ContactId,
    ) -> (Self, LoadOutcome) {
        let mut controller = Self::new(ctx, contacts, contact_id);
        let outcome = controller.load().await;
        (controller, outcome)
    }

    pub fn with_schema(mut self, schema: Schema<ContactDraft>) -> Self {
        self.form.set_schema(schema);
        self
    }

    pub fn form(&self) -> &FormState<ContactDraft> {
        &self.form
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// `GET /contacts/{id}` into the draft.
    pub async fn load(&mut self) -> LoadOutcome {
        if self.form.status() != FormStatus::Loading {
            return LoadOutcome::NotReady(self.form.status());
        }

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(self.contacts.get(&credential, self.contact_id).await)
            .and_then(|response| {
                response
                    .data::<ContactDraft>()
                    .map_err(|e| FormFailure::decode(e.to_string()))
            });
        self.form.finish_load(&self.ctx, LOAD_CONTACT, result).await
    }

    /// `PATCH /contacts/{id}`, then on to the contact's detail page.
    pub async fn submit(&mut self) -> SubmitOutcome<ContactField> {
        let draft = match self.form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(
            self.contacts
                .update(&credential, self.contact_id, &draft)
                .await,
        )
        .map(|_| ());
        self.form
            .settle(
                &self.ctx,
                UPDATE,
                result,
                Some(Route::ContactDetail(self.contact_id)),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::ScriptedApi;
    use crate::adapters::rest::HttpMethod;
    use crate::application::controllers::test_support::Harness;
    use crate::ports::ApiResponse;
    use serde_json::json;

    fn budi() -> serde_json::Value {
        json!({
            "id": 42,
            "first_name": "Budi",
            "last_name": "Santoso",
            "email": "budi@example.com",
            "phone": "08123456789"
        })
    }

    #[tokio::test]
    async fn create_uses_form_bounds() {
        let harness = Harness::signed_in("t").await;
        let api = ScriptedApi::new();
        let mut controller = CreateContactController::new(harness.ctx, Arc::new(api.clone()));
        controller.set(ContactField::FirstName, "B");
        controller.set(ContactField::LastName, "Santoso");
        controller.set(ContactField::Email, "not-an-email");
        controller.set(ContactField::Phone, "08123456789");

        let SubmitOutcome::Rejected(errors) = controller.submit().await else {
            panic!("expected rejection");
        };

        assert_eq!(
            errors.get(ContactField::FirstName),
            Some("String must contain at least 2 character(s)")
        );
        assert_eq!(errors.get(ContactField::Email), Some("Invalid email"));
        assert_eq!(errors.len(), 2);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn create_success_returns_to_the_list() {
        let harness = Harness::signed_in("t").await;
        let api = ScriptedApi::new().on(
            HttpMethod::Post,
            "/contacts",
            ApiResponse::json(200, &json!({ "data": budi() })),
        );
        let mut controller = CreateContactController::new(harness.ctx, Arc::new(api.clone()));
        controller.set(ContactField::FirstName, "Budi");
        controller.set(ContactField::LastName, "Santoso");
        controller.set(ContactField::Email, "budi@example.com");
        controller.set(ContactField::Phone, "08123456789");

        let outcome = controller.submit().await;

        assert_eq!(outcome.target(), Some(Route::ContactList));
        assert_eq!(harness.notifier.successes()[0].message, "Contact created successfully");
        assert_eq!(harness.navigator.routes(), vec![Route::ContactList]);
        assert_eq!(api.calls()[0].body.as_ref().unwrap()["email"], "budi@example.com");
    }

    #[tokio::test]
    async fn create_with_201_is_still_a_failure() {
        let harness = Harness::signed_in("t").await;
        let api = ScriptedApi::new().on(
            HttpMethod::Post,
            "/contacts",
            ApiResponse::json(201, &json!({ "data": budi() })),
        );
        let mut controller = CreateContactController::new(harness.ctx, Arc::new(api));
        controller.set(ContactField::FirstName, "Budi");
        controller.set(ContactField::LastName, "Santoso");
        controller.set(ContactField::Email, "budi@example.com");
        controller.set(ContactField::Phone, "08123456789");

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(FormFailure::Request { status: 201, .. })));
        assert!(harness.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn edit_loads_then_updates_and_opens_detail() {
        let harness = Harness::signed_in("t").await;
        let id = ContactId::new(42);
        let api = ScriptedApi::new()
            .on(HttpMethod::Get, "/contacts/42", ApiResponse::json(200, &json!({ "data": budi() })))
            .on(HttpMethod::Patch, "/contacts/42", ApiResponse::json(200, &json!({ "data": budi() })));

        let (mut controller, loaded) =
            EditContactController::mount(harness.ctx.clone(), Arc::new(api.clone()), id).await;
        assert!(loaded.is_loaded());
        assert_eq!(controller.form().draft().first_name, "Budi");

        controller.set(ContactField::Phone, "0899");
        let outcome = controller.submit().await;

        assert_eq!(outcome.target(), Some(Route::ContactDetail(id)));
        let patch = &api.calls_to(HttpMethod::Patch, "/contacts/42")[0];
        assert_eq!(patch.body.as_ref().unwrap()["phone"], "0899");
        assert_eq!(harness.navigator.last(), Some(Route::ContactDetail(id)));
    }

    #[tokio::test]
    async fn edit_rejects_blank_fields_with_page_messages() {
        let harness = Harness::signed_in("t").await;
        let api = ScriptedApi::new().on(
            HttpMethod::Get,
            "/contacts/42",
            ApiResponse::json(200, &json!({ "data": { "first_name": "Budi", "last_name": null } })),
        );
        let (mut controller, _) =
            EditContactController::mount(harness.ctx.clone(), Arc::new(api.clone()), ContactId::new(42)).await;

        let SubmitOutcome::Rejected(errors) = controller.submit().await else {
            panic!("expected rejection");
        };

        assert_eq!(
            errors.summary(),
            "Last name is required, Email is required, Phone is required"
        );
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn edit_update_failure_notifies_and_returns_to_idle() {
        let harness = Harness::signed_in("t").await;
        let api = ScriptedApi::new()
            .on(HttpMethod::Get, "/contacts/42", ApiResponse::json(200, &json!({ "data": budi() })))
            .on(
                HttpMethod::Patch,
                "/contacts/42",
                ApiResponse::json(400, &json!({ "errors": "email is not valid" })),
            );
        let (mut controller, _) =
            EditContactController::mount(harness.ctx.clone(), Arc::new(api), ContactId::new(42)).await;

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(controller.form().status(), FormStatus::Idle);
        let errors = harness.notifier.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Failed to update contact");
        assert!(harness.navigator.routes().is_empty());
    }
}
