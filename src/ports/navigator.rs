//! Navigator Port - Moves the user to another page after a form settles.

use crate::domain::navigation::Route;

/// Port for route changes. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
