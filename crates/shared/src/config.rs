//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Authentication session configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Outgoing mail configuration.
    #[serde(default)]
    pub email: EmailConfig,
}

/// Authentication session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Custom URI scheme used by verification and reset links.
    #[serde(default = "default_deep_link_scheme")]
    pub deep_link_scheme: String,
    /// Email of the built-in demo account.
    #[serde(default = "default_demo_email")]
    pub demo_email: String,
    /// Password of the built-in demo account.
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
    /// Display name of the built-in demo account.
    #[serde(default = "default_demo_display_name")]
    pub demo_display_name: String,
    /// User id of the built-in demo account.
    #[serde(default = "default_demo_user_id")]
    pub demo_user_id: String,
    /// Minimum accepted password length on registration.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Token that verifies the signed-in user without a pending record.
    #[serde(default = "default_instant_verify_token")]
    pub instant_verify_token: String,
}

fn default_deep_link_scheme() -> String {
    "myresort".to_string()
}

fn default_demo_email() -> String {
    "test@myresort.com".to_string()
}

fn default_demo_password() -> String {
    "password123".to_string()
}

fn default_demo_display_name() -> String {
    "Test User".to_string()
}

fn default_demo_user_id() -> String {
    "user123".to_string()
}

fn default_min_password_length() -> usize {
    6
}

fn default_instant_verify_token() -> String {
    "instant-verify".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            deep_link_scheme: default_deep_link_scheme(),
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
            demo_display_name: default_demo_display_name(),
            demo_user_id: default_demo_user_id(),
            min_password_length: default_min_password_length(),
            instant_verify_token: default_instant_verify_token(),
        }
    }
}

/// SMTP configuration for verification and reset mails.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Deliver mail over SMTP. When false the console keeps drafts in memory.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025 // mailpit / mailhog
}

fn default_from_email() -> String {
    "noreply@myresort.com".to_string()
}

fn default_from_name() -> String {
    "Garuga Resort".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GARUGA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_defaults_match_demo_account() {
        let auth = AuthConfig::default();
        assert_eq!(auth.demo_email, "test@myresort.com");
        assert_eq!(auth.demo_password, "password123");
        assert_eq!(auth.min_password_length, 6);
        assert_eq!(auth.instant_verify_token, "instant-verify");
        assert_eq!(auth.deep_link_scheme, "myresort");
    }

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(["RUN_MODE", "GARUGA__AUTH__DEEP_LINK_SCHEME"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.auth.deep_link_scheme, "myresort");
            assert_eq!(config.email.from_name, "Garuga Resort");
        });
    }

    #[test]
    fn test_load_reads_prefixed_environment() {
        temp_env::with_vars(
            [
                ("GARUGA__AUTH__DEEP_LINK_SCHEME", Some("garuga")),
                ("GARUGA__EMAIL__SMTP_PORT", Some("2525")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.auth.deep_link_scheme, "garuga");
                assert_eq!(config.email.smtp_port, 2525);
                assert_eq!(config.auth.min_password_length, 6);
            },
        );
    }
}
