//! Authentication state types.

use chrono::NaiveDateTime;
use garuga_shared::types::UserId;
use serde::{Deserialize, Serialize};

/// A signed-in or freshly registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Optional avatar reference.
    pub photo_url: Option<String>,
    /// Whether the email address has been verified.
    pub email_verified: bool,
    /// When the account was created (resort local time).
    pub created_at: NaiveDateTime,
}

/// Snapshot of the session's authentication status.
///
/// Every transition publishes a whole new value; observers never see a
/// half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// An operation is in flight.
    pub is_loading: bool,
    /// The authenticated user, if any.
    pub current_user: Option<User>,
    /// Non-fatal error to surface as a banner.
    pub error: Option<String>,
    /// Mirror of `current_user.email_verified`.
    pub is_email_verified: bool,
}

impl AuthState {
    /// State for a freshly authenticated user.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            is_loading: false,
            is_email_verified: user.email_verified,
            current_user: Some(user),
            error: None,
        }
    }

    /// Derives the state machine phase from this snapshot.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            return SessionPhase::Loading;
        }
        match &self.current_user {
            None => SessionPhase::Anonymous,
            Some(user) if user.email_verified => SessionPhase::AuthenticatedVerified,
            Some(_) => SessionPhase::AuthenticatedUnverified,
        }
    }
}

/// Phases of the authentication state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No authenticated user.
    Anonymous,
    /// A credential operation is running.
    Loading,
    /// Signed in, email not yet verified.
    AuthenticatedUnverified,
    /// Signed in with a verified email.
    AuthenticatedVerified,
}

/// Outcome of a validation-driving operation.
///
/// Failures are values, never errors: `message` carries the text shown to
/// the user for both success and failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the operation succeeded.
    pub is_valid: bool,
    /// Human-readable message.
    pub message: Option<String>,
}

impl ValidationResult {
    /// Success without a message.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// Success with a message.
    #[must_use]
    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: Some(message.into()),
        }
    }

    /// Failure with a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Login form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub display_name: String,
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
    /// Password typed a second time.
    pub confirm_password: String,
}
