//! Authentication error types.
//!
//! The `Display` text of each variant is the message shown to the user.

use thiserror::Error;

/// Errors produced by session operations and form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    // ========== Credential Errors ==========
    /// Email/password pair does not match an account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No signed-in user matches the verification request.
    #[error("No matching account found for verification")]
    NoMatchingAccount,

    /// Verification token does not match the pending record.
    #[error("Invalid or expired verification link")]
    InvalidVerificationLink,

    /// Verification mail requested without a signed-in user.
    #[error("No signed-in account to verify")]
    NoSignedInAccount,

    /// Verification mail requested for a verified user.
    #[error("Email is already verified")]
    AlreadyVerified,

    // ========== Validation Errors ==========
    /// Registration email lacks an `@`.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Form email lacks an `@`.
    #[error("Please enter a valid email address")]
    MalformedEmail,

    /// Password shorter than the configured minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Registration form without a name.
    #[error("Please enter your name")]
    MissingDisplayName,

    /// Registration form without an email.
    #[error("Please enter your email")]
    MissingEmail,

    /// Reset form without an email.
    #[error("Please enter your email address")]
    MissingResetEmail,

    /// Login form with a blank field.
    #[error("Please enter your email and password")]
    MissingCredentials,
}
