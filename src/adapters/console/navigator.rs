//! Navigator for the command line.
//!
//! A terminal has no pages to move between, so a route change is logged and
//! remembered for the caller to print as a hint.

use std::sync::{Arc, Mutex};
use tracing::info;

use crate::domain::navigation::Route;
use crate::ports::Navigator;

#[derive(Debug, Clone, Default)]
pub struct LoggingNavigator {
    last: Arc<Mutex<Option<Route>>>,
}

impl LoggingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent route change, if any.
    pub fn last(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        info!(route = %route, "Navigating");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ContactId;

    #[test]
    fn remembers_the_latest_route() {
        let navigator = LoggingNavigator::new();
        assert_eq!(navigator.last(), None);

        navigator.navigate(Route::ContactList);
        navigator.navigate(Route::ContactDetail(ContactId::new(3)));

        assert_eq!(navigator.last(), Some(Route::ContactDetail(ContactId::new(3))));
    }
}
