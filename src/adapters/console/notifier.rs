//! Terminal notifier.
//!
//! Success notices go to stdout, errors to stderr. The server's `errors`
//! detail, when present, is printed beneath the message as indented JSON.

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::{Notice, NoticeLevel, Notifier};

/// Prints notices for a human at a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Text shown for a notice.
    pub fn render(notice: &Notice) -> String {
        let mut text = format!("{}: {}", notice.title, notice.message);
        if let Some(detail) = &notice.detail {
            let detail = match detail {
                Value::String(s) => s.clone(),
                other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
            };
            for line in detail.lines() {
                text.push_str("\n  ");
                text.push_str(line);
            }
        }
        text
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notice: Notice) {
        let text = Self::render(&notice);
        match notice.level {
            NoticeLevel::Success => println!("{}", text),
            NoticeLevel::Error => eprintln!("{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_title_and_message() {
        let notice = Notice::success("Contact created successfully");
        assert_eq!(
            ConsoleNotifier::render(&notice),
            "Success: Contact created successfully"
        );
    }

    #[test]
    fn string_detail_is_printed_as_is() {
        let notice = Notice::error("Request failed").with_detail(Some(json!("Unauthorized")));
        assert_eq!(
            ConsoleNotifier::render(&notice),
            "Error: Request failed\n  Unauthorized"
        );
    }

    #[test]
    fn structured_detail_is_indented() {
        let notice = Notice::error("Validation failed")
            .with_detail(Some(json!({ "city": "City is required" })));
        let text = ConsoleNotifier::render(&notice);
        assert!(text.starts_with("Error: Validation failed\n  {"));
        assert!(text.contains("\n    \"city\": \"City is required\""));
    }
}
