//! mailto: link composition for support requests

use super::form_state::FormData;
use super::tags::tag_label;

/// Fixed destination for support requests
pub const SUPPORT_ADDRESS: &str = "ahmadalzein06@gmail.com";

/// Prefix of every request subject
pub const SUBJECT_PREFIX: &str = "Tawba Support • ";

/// A composed support request ready to hand off to a mail client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub subject: String,
    pub body: String,
    pub uri: String,
}

impl MailtoLink {
    /// Compose the subject, body and encoded URI from form data
    pub fn compose(data: &FormData) -> Self {
        let label = tag_label(&data.tag);
        let subject = format!("{SUBJECT_PREFIX}{label}");
        let body = [
            format!("Name: {}", data.name),
            format!("Email: {}", data.email),
            format!("Tag: {label}"),
            String::new(),
            data.description.clone(),
        ]
        .join("\n");

        let uri = format!(
            "mailto:{SUPPORT_ADDRESS}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        );

        Self { subject, body, uri }
    }
}

impl std::fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data(name: &str, email: &str, tag: &str, description: &str) -> FormData {
        FormData {
            name: name.to_string(),
            email: email.to_string(),
            tag: tag.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_feature_request_link() {
        let link = MailtoLink::compose(&data(
            "Sara",
            "sara@example.com",
            "feature-request",
            "Add a dark mode",
        ));

        assert_eq!(link.subject, "Tawba Support • Feature request");
        assert_eq!(
            link.body,
            "Name: Sara\nEmail: sara@example.com\nTag: Feature request\n\nAdd a dark mode"
        );
        assert_eq!(
            link.uri,
            "mailto:ahmadalzein06@gmail.com\
             ?subject=Tawba%20Support%20%E2%80%A2%20Feature%20request\
             &body=Name%3A%20Sara%0AEmail%3A%20sara%40example.com%0ATag%3A%20Feature%20request%0A%0AAdd%20a%20dark%20mode"
        );
    }

    #[test]
    fn test_unknown_tag_uses_raw_value() {
        let link = MailtoLink::compose(&data("Ali", "ali@x.io", "billing", "Charged twice"));
        assert_eq!(link.subject, "Tawba Support • billing");
        assert!(link.body.contains("Tag: billing\n"));
    }

    #[test]
    fn test_multiline_description_is_kept_raw_in_body() {
        let link = MailtoLink::compose(&data(
            "Ali",
            "ali@x.io",
            "major-issue",
            "Step 1\nStep 2",
        ));
        assert!(link.body.ends_with("\n\nStep 1\nStep 2"));
        assert!(link.uri.ends_with("%0A%0AStep%201%0AStep%202"));
    }

    #[test]
    fn test_query_delimiters_are_escaped() {
        let link = MailtoLink::compose(&data(
            "A&B",
            "a@b.c",
            "general-issue",
            "x=1?y#z 100%",
        ));
        let (_, query) = link.uri.split_once('?').unwrap();
        // Only our own separator survives unescaped
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(query.matches('?').count(), 0);
        assert!(query.contains("Name%3A%20A%26B"));
        assert!(query.contains("x%3D1%3Fy%23z%20100%25"));
    }

    #[test]
    fn test_display_is_uri() {
        let link = MailtoLink::compose(&data("a", "a@b.c", "general-issue", "d"));
        assert_eq!(link.to_string(), link.uri);
    }
}
