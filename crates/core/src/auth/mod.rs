//! Authentication session and credential validation.
//!
//! This module provides:
//! - The session state machine (`AuthSession`) over an observable `AuthState`
//! - Registration, sign-in, and reset form validation
//! - Verification and reset deep links

mod deep_link;
mod error;
mod mail;
mod session;
mod types;
mod validation;


pub use deep_link::{DeepLink, DeepLinkError};
pub use error::AuthError;
pub use session::AuthSession;
pub use types::{
    AuthState, LoginRequest, RegisterRequest, SessionPhase, User, ValidationResult,
};
pub use validation::{
    check_credentials, looks_like_email, validate_login, validate_registration,
    validate_reset_email,
};
