//! Recording notifier and navigator for testing.
//!
//! Both adapters keep everything they receive so tests can assert on the
//! exact sequence of notices and route changes.
//!
//! # Example
//!
//! ```ignore
//! let notifier = RecordingNotifier::new();
//! let navigator = RecordingNavigator::new();
//! // ... drive a controller ...
//! assert_eq!(notifier.successes().len(), 1);
//! assert_eq!(navigator.last(), Some(Route::Login));
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::navigation::Route;
use crate::ports::{Navigator, Notice, NoticeLevel, Notifier};

/// Notifier that stores every notice.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices, in delivery order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<Notice> {
        self.with_level(NoticeLevel::Success)
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.with_level(NoticeLevel::Error)
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    fn with_level(&self, level: NoticeLevel) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.level == level)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Navigator that stores every route change.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
