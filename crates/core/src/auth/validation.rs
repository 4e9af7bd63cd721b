//! Form validation rules for the login, registration and reset forms.

use super::error::AuthError;
use super::types::{LoginRequest, RegisterRequest, ValidationResult};

/// Returns true if `email` looks like an address (contains `@`).
#[must_use]
pub fn looks_like_email(email: &str) -> bool {
    email.contains('@')
}

/// Checks the registration credentials accepted by the session.
///
/// The email must contain `@` and the password must be at least
/// `min_password_length` characters.
pub fn check_credentials(
    email: &str,
    password: &str,
    min_password_length: usize,
) -> Result<(), AuthError> {
    if !looks_like_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if password.chars().count() < min_password_length {
        return Err(AuthError::PasswordTooShort {
            min: min_password_length,
        });
    }
    Ok(())
}

/// Validates the login form before a sign-in attempt.
#[must_use]
pub fn validate_login(request: &LoginRequest) -> ValidationResult {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return ValidationResult::failure(AuthError::MissingCredentials.to_string());
    }
    ValidationResult::ok()
}

/// Validates the registration form.
///
/// Rules are checked in order and the first failure wins.
#[must_use]
pub fn validate_registration(
    request: &RegisterRequest,
    min_password_length: usize,
) -> ValidationResult {
    match registration_error(request, min_password_length) {
        Some(err) => ValidationResult::failure(err.to_string()),
        None => ValidationResult::ok(),
    }
}

fn registration_error(request: &RegisterRequest, min_password_length: usize) -> Option<AuthError> {
    if request.display_name.trim().is_empty() {
        return Some(AuthError::MissingDisplayName);
    }
    if request.email.trim().is_empty() {
        return Some(AuthError::MissingEmail);
    }
    if !looks_like_email(&request.email) {
        return Some(AuthError::MalformedEmail);
    }
    if request.password.chars().count() < min_password_length {
        return Some(AuthError::PasswordTooShort {
            min: min_password_length,
        });
    }
    if request.password != request.confirm_password {
        return Some(AuthError::PasswordMismatch);
    }
    None
}

/// Validates the password reset form.
#[must_use]
pub fn validate_reset_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::failure(AuthError::MissingResetEmail.to_string());
    }
    if !looks_like_email(email) {
        return ValidationResult::failure(AuthError::MalformedEmail.to_string());
    }
    ValidationResult::ok()
}
