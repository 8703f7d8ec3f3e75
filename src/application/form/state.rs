//! Draft state shared by every form controller.

use tracing::{debug, info, warn};

use super::{FormContext, FormFailure, FormMessages, FormStatus, LoadMessages, LoadOutcome, SubmitOutcome};
use crate::domain::foundation::StateMachine;
use crate::domain::navigation::Route;
use crate::domain::validation::{Draft, FieldErrors, Schema, ValidationResult};
use crate::ports::Notice;

/// Draft, status, field errors and schema of one form instance.
#[derive(Debug, Clone)]
pub struct FormState<D: Draft> {
    draft: D,
    status: FormStatus,
    field_errors: FieldErrors<D::Field>,
    schema: Schema<D>,
}

impl<D: Draft + Default> FormState<D> {
    /// An empty form, ready for input.
    pub fn new(schema: Schema<D>) -> Self {
        Self::with_status(schema, FormStatus::Idle)
    }

    /// An empty form waiting for its record to load.
    pub fn loading(schema: Schema<D>) -> Self {
        Self::with_status(schema, FormStatus::Loading)
    }

    fn with_status(schema: Schema<D>, status: FormStatus) -> Self {
        Self {
            draft: D::default(),
            status,
            field_errors: FieldErrors::new(),
            schema,
        }
    }
}

impl<D: Draft> FormState<D> {
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn field_errors(&self) -> &FieldErrors<D::Field> {
        &self.field_errors
    }

    pub fn set(&mut self, field: D::Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    pub fn set_draft(&mut self, draft: D) {
        self.draft = draft;
    }

    pub fn set_schema(&mut self, schema: Schema<D>) {
        self.schema = schema;
    }

    fn advance(&mut self, target: FormStatus) {
        match self.status.transition_to(target) {
            Ok(next) => self.status = next,
            Err(e) => warn!(error = %e, "Ignoring form transition"),
        }
    }

    /// Validates the draft and moves Idle → Submitting.
    ///
    /// `Err` carries the outcome to return without touching the network.
    pub async fn begin(&mut self, ctx: &FormContext) -> Result<D, SubmitOutcome<D::Field>> {
        if !self.status.is_idle() {
            return Err(SubmitOutcome::NotReady(self.status));
        }

        match self.schema.validate(&self.draft) {
            ValidationResult::Rejected(errors) => {
                debug!(fields = errors.len(), "Draft rejected");
                self.field_errors = errors.clone();
                ctx.notify(Notice::error(errors.summary()).with_detail(Some(errors.to_json())))
                    .await;
                Err(SubmitOutcome::Rejected(errors))
            }
            ValidationResult::Accepted(draft) => {
                self.field_errors.clear();
                self.advance(FormStatus::Submitting);
                Ok(draft)
            }
        }
    }

    /// Settles a submission: notify, navigate on success, and return to Idle
    /// unless the user was sent elsewhere.
    pub async fn settle(
        &mut self,
        ctx: &FormContext,
        messages: FormMessages,
        result: Result<(), FormFailure>,
        target: Option<Route>,
    ) -> SubmitOutcome<D::Field> {
        match result {
            Ok(()) => {
                self.advance(FormStatus::Succeeded);
                info!(action = messages.action, "Submission succeeded");
                ctx.notify(Notice::success(messages.success)).await;
                match target {
                    Some(route) => ctx.navigate(route),
                    None => self.advance(FormStatus::Idle),
                }
                SubmitOutcome::Succeeded { target }
            }
            Err(failure) => {
                self.advance(FormStatus::Failed);
                ctx.notify_failure(
                    messages.action,
                    &failure,
                    messages.failure,
                    messages.unreachable,
                )
                .await;
                self.advance(FormStatus::Idle);
                SubmitOutcome::Failed(failure)
            }
        }
    }

    /// Settles the mount-time read. The form becomes Idle either way.
    pub async fn finish_load(
        &mut self,
        ctx: &FormContext,
        messages: LoadMessages,
        result: Result<D, FormFailure>,
    ) -> LoadOutcome {
        let outcome = match result {
            Ok(draft) => {
                debug!(action = messages.action, "Record loaded");
                self.draft = draft;
                LoadOutcome::Loaded
            }
            Err(failure) => {
                ctx.notify_failure(
                    messages.action,
                    &failure,
                    messages.failure,
                    messages.unreachable,
                )
                .await;
                LoadOutcome::Failed(failure)
            }
        };
        self.advance(FormStatus::Idle);
        outcome
    }
}
