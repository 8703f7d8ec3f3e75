//! Current user's profile: display name and password.
//!
//! Two independent forms share one controller. The name form is in edit
//! mode and loads `/users/current` on mount; the password form starts empty
//! and is cleared again after a successful change.

use std::sync::Arc;

use crate::application::form::{
    FormContext, FormFailure, FormMessages, FormState, FormStatus, LoadMessages, LoadOutcome,
    SubmitOutcome,
};
use crate::domain::user::{PasswordDraft, PasswordField, ProfileDraft, ProfileField, UserProfile};
use crate::domain::validation::Schema;
use crate::ports::UserClient;

const LOAD: LoadMessages = LoadMessages {
    action: "load_profile",
    failure: "Failed to fetch profile",
    unreachable: "An error occurred while fetching profile",
};

const NAME: FormMessages = FormMessages {
    action: "update_name",
    success: "Profile updated successfully",
    failure: "Failed to update profile",
    unreachable: "An error occurred while updating profile",
};

const PASSWORD: FormMessages = FormMessages {
    action: "update_password",
    success: "Password updated successfully",
    failure: "Failed to update password",
    unreachable: "An error occurred while updating password",
};

pub struct ProfileController {
    ctx: FormContext,
    users: Arc<dyn UserClient>,
    profile: Option<UserProfile>,
    name_form: FormState<ProfileDraft>,
    password_form: FormState<PasswordDraft>,
}

impl ProfileController {
    /// A controller waiting for [`load`](Self::load).
    pub fn new(ctx: FormContext, users: Arc<dyn UserClient>) -> Self {
        Self {
            ctx,
            users,
            profile: None,
            name_form: FormState::loading(ProfileDraft::page_schema()),
            password_form: FormState::new(PasswordDraft::page_schema()),
        }
    }

    /// Creates the controller and issues the mount-time read.
    pub async fn mount(ctx: FormContext, users: Arc<dyn UserClient>) -> (Self, LoadOutcome) {
        let mut controller = Self::new(ctx, users);
        let outcome = controller.load().await;
        (controller, outcome)
    }

    pub fn with_name_schema(mut self, schema: Schema<ProfileDraft>) -> Self {
        self.name_form.set_schema(schema);
        self
    }

    pub fn with_password_schema(mut self, schema: Schema<PasswordDraft>) -> Self {
        self.password_form.set_schema(schema);
        self
    }

    /// The user as last loaded, if the load succeeded.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn name_form(&self) -> &FormState<ProfileDraft> {
        &self.name_form
    }

    pub fn password_form(&self) -> &FormState<PasswordDraft> {
        &self.password_form
    }

    pub fn set_name(&mut self, field: ProfileField, value: impl Into<String>) {
        self.name_form.set(field, value);
    }

    pub fn set_password(&mut self, field: PasswordField, value: impl Into<String>) {
        self.password_form.set(field, value);
    }

    /// `GET /users/current` into the name form.
    pub async fn load(&mut self) -> LoadOutcome {
        if self.name_form.status() != FormStatus::Loading {
            return LoadOutcome::NotReady(self.name_form.status());
        }

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(self.users.current(&credential).await).and_then(|response| {
            response
                .data::<UserProfile>()
                .map_err(|e| FormFailure::decode(e.to_string()))
        });

        let result = result.map(|profile| {
            let draft = ProfileDraft {
                name: profile.name.clone(),
            };
            self.profile = Some(profile);
            draft
        });

        self.name_form.finish_load(&self.ctx, LOAD, result).await
    }

    /// `PATCH /users/current {name}`. Stays on the profile page.
    pub async fn submit_name(&mut self) -> SubmitOutcome<ProfileField> {
        let draft = match self.name_form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(self.users.update_name(&credential, &draft.name).await);
        if result.is_ok() {
            if let Some(profile) = self.profile.as_mut() {
                profile.name = draft.name.clone();
            }
        }

        self.name_form
            .settle(&self.ctx, NAME, result.map(|_| ()), None)
            .await
    }

    /// `PATCH /users/current {password}` once the confirmation matches.
    pub async fn submit_password(&mut self) -> SubmitOutcome<PasswordField> {
        let draft = match self.password_form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(
            self.users
                .update_password(&credential, &draft.password)
                .await,
        )
        .map(|_| ());
        let succeeded = result.is_ok();

        let outcome = self
            .password_form
            .settle(&self.ctx, PASSWORD, result, None)
            .await;
        if succeeded {
            self.password_form.set_draft(PasswordDraft::default());
        }
        outcome
    }
}
