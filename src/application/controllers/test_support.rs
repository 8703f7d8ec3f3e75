//! Shared wiring for controller tests.

use std::sync::Arc;

use crate::adapters::memory::{RecordingNavigator, RecordingNotifier};
use crate::adapters::storage::InMemoryCredentialStore;
use crate::application::form::FormContext;
use crate::application::SessionContext;

pub struct Harness {
    pub ctx: FormContext,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
    pub store: InMemoryCredentialStore,
}

impl Harness {
    pub async fn anonymous() -> Self {
        Self::with_store(InMemoryCredentialStore::new()).await
    }

    pub async fn signed_in(token: &str) -> Self {
        Self::with_store(InMemoryCredentialStore::with_token(token)).await
    }

    async fn with_store(store: InMemoryCredentialStore) -> Self {
        let notifier = RecordingNotifier::new();
        let navigator = RecordingNavigator::new();
        let session = SessionContext::open(Arc::new(store.clone())).await;
        let ctx = FormContext::new(
            session,
            Arc::new(notifier.clone()),
            Arc::new(navigator.clone()),
        );
        Self {
            ctx,
            notifier,
            navigator,
            store,
        }
    }
}
