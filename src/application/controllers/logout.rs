//! Logout fires as soon as the controller exists.
//!
//! There is no draft and nothing to validate: `spawn` starts the
//! `DELETE /users/logout` round trip on the runtime immediately, and the
//! returned handle only observes how it ended.
//!
//! Once the server accepts the logout the outcome is `Succeeded`, even if
//! the credential store cannot be cleared; that is reported as a separate
//! error notice.

use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::application::form::{FormContext, FormFailure};
use crate::domain::navigation::Route;
use crate::ports::{Notice, UserClient};

const ACTION: &str = "logout";
const SUCCESS: &str = "Logged out successfully";
const FAILURE: &str = "Failed to logout";
const UNREACHABLE: &str = "An error occurred while logging out";
const STALE_CREDENTIAL: &str = "Logged out, but the saved session could not be removed";

/// How the logout ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    Succeeded,
    Failed(FormFailure),
    /// The task panicked or was cancelled before settling.
    Aborted(String),
}

impl LogoutOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, LogoutOutcome::Succeeded)
    }
}

/// Handle on a logout already in flight.
pub struct LogoutController {
    handle: JoinHandle<LogoutOutcome>,
}

impl LogoutController {
    /// Starts the logout. Requires a running tokio runtime.
    pub fn spawn(ctx: FormContext, users: Arc<dyn UserClient>) -> Self {
        let handle = tokio::spawn(run(ctx, users));
        Self { handle }
    }

    /// Waits for the logout to settle.
    pub async fn finished(self) -> LogoutOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(action = ACTION, error = %e, "Logout task did not complete");
                LogoutOutcome::Aborted(e.to_string())
            }
        }
    }
}

async fn run(ctx: FormContext, users: Arc<dyn UserClient>) -> LogoutOutcome {
    let credential = ctx.session().credential().await;
    if let Err(failure) = FormFailure::check(users.logout(&credential).await) {
        ctx.notify_failure(ACTION, &failure, FAILURE, UNREACHABLE).await;
        return LogoutOutcome::Failed(failure);
    }

    // The server session is gone; a store that cannot be cleared does not
    // undo that.
    if let Err(e) = ctx.session().sign_out().await {
        error!(action = ACTION, error = %e, "Stored credential could not be removed");
        ctx.notify(
            Notice::error(STALE_CREDENTIAL)
                .with_detail(Some(Value::String(e.to_string()))),
        )
        .await;
    }

    info!(action = ACTION, "Submission succeeded");
    ctx.notify(Notice::success(SUCCESS)).await;
    ctx.navigate(Route::Login);
    LogoutOutcome::Succeeded
}
