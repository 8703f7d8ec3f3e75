//! Collaborators shared by every form controller.

use std::sync::Arc;

use super::FormFailure;
use crate::application::SessionContext;
use crate::domain::navigation::Route;
use crate::ports::{Navigator, Notice, Notifier};

/// Notice texts for one submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    /// Short name used in log events.
    pub action: &'static str,
    pub success: &'static str,
    /// Shown when the server answers with anything but 200.
    pub failure: &'static str,
    /// Shown when no response was received.
    pub unreachable: &'static str,
}

/// Notice texts for the read an edit form issues on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMessages {
    pub action: &'static str,
    pub failure: &'static str,
    pub unreachable: &'static str,
}

/// Session, notifier and navigator, cloned into each controller.
#[derive(Clone)]
pub struct FormContext {
    session: SessionContext,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl FormContext {
    pub fn new(
        session: SessionContext,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            notifier,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn notify(&self, notice: Notice) {
        self.notifier.notify(notice).await;
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Error notice for a failure, logged at a level matching its cause.
    pub async fn notify_failure(
        &self,
        action: &'static str,
        failure: &FormFailure,
        failure_text: &str,
        unreachable_text: &str,
    ) {
        let notice = match failure {
            FormFailure::Request { status, .. } => {
                tracing::warn!(action, status, "Request rejected by server");
                Notice::error(failure_text).with_detail(failure.detail())
            }
            FormFailure::Transport(e) => {
                tracing::error!(action, error = %e, "Request did not complete");
                Notice::error(unreachable_text)
            }
            FormFailure::Decode(_) | FormFailure::Storage(_) => {
                tracing::error!(action, code = %failure.code(), error = %failure, "Request handling failed");
                Notice::error(failure_text)
            }
        };
        self.notify(notice).await;
    }
}

impl std::fmt::Debug for FormContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
