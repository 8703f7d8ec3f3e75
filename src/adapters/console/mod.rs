//! Terminal adapters for the notifier and navigator ports.

mod navigator;
mod notifier;

pub use navigator::LoggingNavigator;
pub use notifier::ConsoleNotifier;
