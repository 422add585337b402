//! Logs every HTML file created in the repository.
//!
//! Enterprise events also carry the node's permission snapshot, which is
//! logged after the creation line.

use crate::domain::{EventRecord, EventType};
use crate::filter::{AndFilter, EventFilter, IsFileFilter, MimeTypeFilter};
use crate::port::EventHandler;
use tracing::info;

pub const DEFAULT_MIME_TYPE: &str = "text/html";

pub struct HtmlContentCreatedHandler {
    filter: AndFilter<IsFileFilter, MimeTypeFilter>,
}

impl HtmlContentCreatedHandler {
    pub fn new() -> Self {
        Self::with_mime_type(DEFAULT_MIME_TYPE)
    }

    /// Same handler, but matching files of `mime_type` instead of HTML.
    pub fn with_mime_type(mime_type: impl Into<String>) -> Self {
        Self {
            filter: IsFileFilter.and(MimeTypeFilter::of(mime_type)),
        }
    }
}

impl Default for HtmlContentCreatedHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for HtmlContentCreatedHandler {
    fn handled_event_types(&self) -> &[EventType] {
        &[EventType::NodeCreated]
    }

    fn event_filter(&self) -> &dyn EventFilter {
        &self.filter
    }

    fn handle_event(&self, event: &EventRecord) {
        info!(
            "An HTML content named {} has been created!",
            event.resource().name
        );

        match event {
            EventRecord::Standard(_) => {}
            EventRecord::Enterprise(enterprise) => {
                let data = &enterprise.data;
                info!(
                    "Permissions - reader authorities: {}",
                    format_list(&data.resource_reader_authorities)
                );
                info!(
                    "Permissions - denied authorities: {}",
                    format_list(&data.resource_denied_authorities)
                );
                info!(
                    "Permissions - reader security controls: {}",
                    format_list(&data.resource_reader_security_controls)
                );
            }
        }
    }
}

fn format_list(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{enterprise_record, standard_record};
    use tracing_test::traced_test;

    fn lines_with<'a>(lines: &[&'a str], needle: &str) -> Vec<&'a str> {
        lines.iter().copied().filter(|l| l.contains(needle)).collect()
    }

    #[test]
    fn test_filter_accepts_created_html_files_only() {
        let handler = HtmlContentCreatedHandler::new();
        assert!(handler.accepts(&standard_record("test.html", "text/html", true)));
        assert!(!handler.accepts(&standard_record("test.txt", "text/plain", true)));
    }

    #[test]
    fn test_configured_mime_type() {
        let handler = HtmlContentCreatedHandler::with_mime_type("application/pdf");
        assert!(handler.accepts(&standard_record("a.pdf", "application/pdf", true)));
        assert!(!handler.accepts(&standard_record("a.html", "text/html", true)));
    }

    #[traced_test]
    #[test]
    fn test_standard_event_logs_single_line() {
        HtmlContentCreatedHandler::new()
            .handle_event(&standard_record("test.html", "text/html", true));

        assert!(logs_contain("An HTML content named test.html has been created!"));
        assert!(!logs_contain("Permissions -"));
    }

    #[traced_test]
    #[test]
    fn test_enterprise_event_logs_permissions_in_order() {
        HtmlContentCreatedHandler::new().handle_event(&enterprise_record("test.html", "text/html"));

        logs_assert(|lines: &[&str]| {
            let created = lines_with(lines, "has been created!");
            let permissions = lines_with(lines, "Permissions -");
            if created.len() != 1 {
                return Err(format!("expected one creation line, got {}", created.len()));
            }
            let expected = [
                "Permissions - reader authorities: [GROUP_EVERYONE]",
                "Permissions - denied authorities: []",
                "Permissions - reader security controls: []",
            ];
            if permissions.len() != expected.len() {
                return Err(format!("expected 3 permission lines, got {}", permissions.len()));
            }
            for (line, want) in permissions.iter().zip(expected) {
                if !line.contains(want) {
                    return Err(format!("expected `{want}` in `{line}`"));
                }
            }
            Ok(())
        });
    }
}
