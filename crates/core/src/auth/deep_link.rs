//! Deep links that resume the verification and reset flows.
//!
//! Links look like `scheme://verify?email=<encoded>&token=<token>` and
//! `scheme://reset?email=<encoded>`.

use thiserror::Error;
use url::Url;

const VERIFY_HOST: &str = "verify";
const RESET_HOST: &str = "reset";

/// Errors raised while parsing or rendering a deep link.
#[derive(Debug, Error)]
pub enum DeepLinkError {
    /// The link is not a valid URI.
    #[error("malformed link: {0}")]
    Malformed(#[from] url::ParseError),

    /// The link uses another application's scheme.
    #[error("unexpected scheme: {0}")]
    UnknownScheme(String),

    /// The link targets a flow this app does not handle.
    #[error("unexpected host: {0}")]
    UnknownHost(String),

    /// A required query parameter is absent or empty.
    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),
}

/// A recognized deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// Email verification link.
    Verify {
        /// Address being verified.
        email: String,
        /// Verification token.
        token: String,
    },
    /// Password reset link.
    Reset {
        /// Address whose password is being reset.
        email: String,
    },
}

impl DeepLink {
    /// Parses `link`, accepting only the given custom `scheme`.
    pub fn parse(link: &str, scheme: &str) -> Result<Self, DeepLinkError> {
        let url = Url::parse(link.trim())?;

        if !url.scheme().eq_ignore_ascii_case(scheme) {
            return Err(DeepLinkError::UnknownScheme(url.scheme().to_string()));
        }

        match url.host_str().unwrap_or_default() {
            VERIFY_HOST => Ok(Self::Verify {
                email: required_param(&url, "email")?,
                token: required_param(&url, "token")?,
            }),
            RESET_HOST => Ok(Self::Reset {
                email: required_param(&url, "email")?,
            }),
            other => Err(DeepLinkError::UnknownHost(other.to_string())),
        }
    }

    /// Renders the link under `scheme`, percent-encoding query values.
    pub fn to_url(&self, scheme: &str) -> Result<String, DeepLinkError> {
        let mut url = Url::parse(&format!("{scheme}://{}", self.host()))?;
        {
            let mut query = url.query_pairs_mut();
            match self {
                Self::Verify { email, token } => {
                    query.append_pair("email", email).append_pair("token", token);
                }
                Self::Reset { email } => {
                    query.append_pair("email", email);
                }
            }
        }
        Ok(url.into())
    }

    /// The email address carried by the link.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Verify { email, .. } | Self::Reset { email } => email,
        }
    }

    const fn host(&self) -> &'static str {
        match self {
            Self::Verify { .. } => VERIFY_HOST,
            Self::Reset { .. } => RESET_HOST,
        }
    }
}

fn required_param(url: &Url, name: &'static str) -> Result<String, DeepLinkError> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(DeepLinkError::MissingParameter(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_verify_link_decodes_email() {
        let link = DeepLink::parse("myresort://verify?email=guest%40example.com&token=XYZ", "myresort")
            .unwrap();
        assert_eq!(
            link,
            DeepLink::Verify {
                email: "guest@example.com".to_string(),
                token: "XYZ".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_reset_link() {
        let link = DeepLink::parse("myresort://reset?email=guest@example.com", "myresort").unwrap();
        assert_eq!(link.email(), "guest@example.com");
        assert!(matches!(link, DeepLink::Reset { .. }));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(DeepLink::parse("MyResort://reset?email=a@b.com", "myresort").is_ok());
    }

    #[rstest]
    #[case("https://verify?email=a@b.com&token=t")]
    #[case("otherapp://verify?email=a@b.com&token=t")]
    fn test_rejects_foreign_scheme(#[case] link: &str) {
        assert!(matches!(
            DeepLink::parse(link, "myresort"),
            Err(DeepLinkError::UnknownScheme(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_host() {
        assert!(matches!(
            DeepLink::parse("myresort://bookings?id=B001", "myresort"),
            Err(DeepLinkError::UnknownHost(host)) if host == "bookings"
        ));
    }

    #[rstest]
    #[case("myresort://verify?email=a@b.com", "token")]
    #[case("myresort://verify?token=XYZ", "email")]
    #[case("myresort://verify?email=&token=XYZ", "email")]
    #[case("myresort://reset", "email")]
    fn test_rejects_missing_parameters(#[case] link: &str, #[case] missing: &str) {
        match DeepLink::parse(link, "myresort") {
            Err(DeepLinkError::MissingParameter(name)) => assert_eq!(name, missing),
            other => panic!("expected missing {missing}, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            DeepLink::parse("not a link", "myresort"),
            Err(DeepLinkError::Malformed(_))
        ));
    }

    #[test]
    fn test_rendered_link_encodes_and_parses_back() {
        let link = DeepLink::Verify {
            email: "guest+vip@example.com".to_string(),
            token: "abc123".to_string(),
        };
        let rendered = link.to_url("myresort").unwrap();
        assert_eq!(
            rendered,
            "myresort://verify?email=guest%2Bvip%40example.com&token=abc123"
        );
        assert_eq!(DeepLink::parse(&rendered, "myresort").unwrap(), link);
    }
}
