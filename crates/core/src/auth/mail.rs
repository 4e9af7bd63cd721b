//! Verification and password reset mail drafts.

use garuga_shared::email::MailDraft;

/// Draft asking `display_name` to confirm their address through `link`.
///
/// The name is user input, so the HTML part carries it escaped.
pub(crate) fn verification_draft(to: &str, display_name: &str, link: &str) -> MailDraft {
    let (greeting, html_greeting) = if display_name.trim().is_empty() {
        ("Hi,".to_string(), "Hi,".to_string())
    } else {
        (
            format!("Hi {display_name},"),
            format!("Hi {},", ammonia::clean_text(display_name)),
        )
    };

    MailDraft {
        to: to.to_string(),
        subject: "Verify your email address - Garuga Resort".to_string(),
        text_body: format!(
            r"{greeting}

Welcome to Garuga Resort! Please verify your email address by opening the link below:

{link}

If you didn't create an account, you can safely ignore this email."
        ),
        html_body: format!(
            r#"<p>{html_greeting}</p>
<p>Welcome to Garuga Resort! Please verify your email address:</p>
<p><a href="{link}">Verify my email</a></p>
<p>If you didn't create an account, you can safely ignore this email.</p>"#
        ),
    }
}

/// Draft carrying the password reset link.
pub(crate) fn reset_draft(to: &str, link: &str) -> MailDraft {
    MailDraft {
        to: to.to_string(),
        subject: "Reset your password - Garuga Resort".to_string(),
        text_body: format!(
            r"Hi,

We received a request to reset your Garuga Resort password. Open the link below to choose a new one:

{link}

If you didn't ask for a reset, you can safely ignore this email."
        ),
        html_body: format!(
            r#"<p>Hi,</p>
<p>We received a request to reset your Garuga Resort password.</p>
<p><a href="{link}">Reset my password</a></p>
<p>If you didn't ask for a reset, you can safely ignore this email.</p>"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_draft_carries_link_in_both_bodies() {
        let link = "myresort://verify?email=a%40b.com&token=abc";
        let draft = verification_draft("a@b.com", "Ann", link);
        assert_eq!(draft.to, "a@b.com");
        assert!(draft.text_body.starts_with("Hi Ann,"));
        assert!(draft.text_body.contains(link));
        assert!(draft.html_body.contains(&format!("href=\"{link}\"")));
    }

    #[test]
    fn test_verification_draft_escapes_name_in_html_only() {
        let link = "myresort://verify?email=a%40b.com&token=abc";
        let name = "<script>alert(1)</script>";
        let draft = verification_draft("a@b.com", name, link);

        assert!(!draft.html_body.contains("<script>"));
        assert!(draft.html_body.contains("&lt;script&gt;"));
        assert!(draft.text_body.starts_with("Hi <script>alert(1)</script>,"));
    }

    #[test]
    fn test_verification_draft_without_name() {
        let draft = verification_draft("a@b.com", "  ", "myresort://verify");
        assert!(draft.text_body.starts_with("Hi,"));
        assert!(draft.html_body.starts_with("<p>Hi,</p>"));
    }

    #[test]
    fn test_reset_draft_carries_link() {
        let link = "myresort://reset?email=a%40b.com";
        let draft = reset_draft("a@b.com", link);
        assert!(draft.subject.starts_with("Reset your password"));
        assert!(draft.text_body.contains(link));
        assert!(draft.html_body.contains(link));
    }
}
