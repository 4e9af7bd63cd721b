//! The authentication session.
//!
//! One `AuthSession` owns one `AuthState` cell. Operations are serialized by
//! a writer lock held for their whole duration, and each transition
//! publishes a complete new state on a watch channel that UI observers can
//! subscribe to.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use garuga_shared::config::AuthConfig;
use garuga_shared::email::{EmailError, MailComposer};
use garuga_shared::types::UserId;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::deep_link::DeepLink;
use super::error::AuthError;
use super::mail::{reset_draft, verification_draft};
use super::types::{AuthState, SessionPhase, User, ValidationResult};
use super::validation::{check_credentials, looks_like_email};
use crate::clock::Clock;

const REGISTERED_MESSAGE: &str =
    "Registration successful! Please check your email to verify your account.";
const VERIFIED_MESSAGE: &str = "Email verified successfully";
const RESET_SENT_MESSAGE: &str = "Password reset email sent. Check your inbox.";
const VERIFICATION_SENT_MESSAGE: &str = "Verification email sent. Check your inbox.";

/// Verification link issued to the current user and not yet used.
#[derive(Debug, Clone)]
struct PendingVerification {
    email: String,
    token: String,
}

/// State guarded by the writer lock.
#[derive(Debug, Default)]
struct Writer {
    pending: Option<PendingVerification>,
}

/// Authentication session: credential checks, registration, verification.
///
/// Every public operation is total. Failures, including a panicking
/// collaborator, come back as [`ValidationResult`] values and `is_loading`
/// is always cleared before an operation returns.
pub struct AuthSession {
    config: AuthConfig,
    mailer: Arc<dyn MailComposer>,
    clock: Arc<dyn Clock>,
    state: watch::Sender<AuthState>,
    writer: Mutex<Writer>,
}

impl AuthSession {
    /// Creates an anonymous session.
    #[must_use]
    pub fn new(config: AuthConfig, mailer: Arc<dyn MailComposer>, clock: Arc<dyn Clock>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            config,
            mailer,
            clock,
            state,
            writer: Mutex::new(Writer::default()),
        }
    }

    /// Signs in with the demo account credentials.
    pub fn sign_in(&self, email: &str, password: &str) -> ValidationResult {
        let mut writer = self.lock();
        let _loading = self.begin();
        self.run("sign_in", "Login failed", || {
            self.try_sign_in(&mut writer, email, password)
        })
    }

    /// Registers a new, unverified user and mails a verification link.
    pub fn register(&self, email: &str, password: &str, display_name: &str) -> ValidationResult {
        let mut writer = self.lock();
        let _loading = self.begin();
        self.run("register", "Registration failed", || {
            self.try_register(&mut writer, email, password, display_name)
        })
    }

    /// Mails a password reset link. Does not touch the signed-in user.
    pub fn send_password_reset(&self, email: &str) -> ValidationResult {
        let _writer = self.lock();
        self.run("send_password_reset", "Failed to send reset email", || {
            self.try_send_password_reset(email)
        })
    }

    /// Verifies `email` with `token`.
    ///
    /// Succeeds when the pair matches the pending verification, or when
    /// `token` is the instant-verify token and `email` is the signed-in
    /// user's address.
    pub fn verify_email(&self, email: &str, token: &str) -> ValidationResult {
        let mut writer = self.lock();
        let _loading = self.begin();
        self.run("verify_email", "Verification failed", || {
            self.try_verify_email(&mut writer, email, token)
        })
    }

    /// Issues a fresh verification link for the signed-in, unverified user.
    pub fn resend_verification(&self) -> ValidationResult {
        let mut writer = self.lock();
        let _loading = self.begin();
        self.run("resend_verification", "Failed to send verification email", || {
            self.try_resend_verification(&mut writer)
        })
    }

    /// Handles a deep link opened from outside the app.
    ///
    /// Verification links are delegated to [`Self::verify_email`]; reset
    /// links are accepted and left to the UI. Anything unrecognized
    /// returns `false`.
    pub fn handle_deep_link(&self, link: &str) -> bool {
        match DeepLink::parse(link, &self.config.deep_link_scheme) {
            Ok(DeepLink::Verify { email, token }) => self.verify_email(&email, &token).is_valid,
            Ok(DeepLink::Reset { email }) => {
                info!(email = %email, "Password reset link opened");
                true
            }
            Err(e) => {
                debug!(error = %e, "Ignoring deep link");
                false
            }
        }
    }

    /// Clears the session and any pending verification.
    pub fn sign_out(&self) {
        let mut writer = self.lock();
        writer.pending = None;
        self.publish(|_| AuthState::default());
        info!("User signed out");
    }

    /// Returns the signed-in user, if any.
    pub fn get_current_user(&self) -> Option<User> {
        self.state.borrow().current_user.clone()
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Returns the current state machine phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn try_sign_in(
        &self,
        writer: &mut Writer,
        email: &str,
        password: &str,
    ) -> Result<ValidationResult, AuthError> {
        if email != self.config.demo_email || password != self.config.demo_password {
            info!(email = %email, "Failed sign-in attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: UserId::new(self.config.demo_user_id.as_str()),
            email: email.to_string(),
            display_name: self.config.demo_display_name.clone(),
            photo_url: None,
            email_verified: true,
            created_at: self.clock.now(),
        };

        info!(user_id = %user.id, "User signed in");
        writer.pending = None;
        self.publish(|_| AuthState::authenticated(user));
        Ok(ValidationResult::ok())
    }

    fn try_register(
        &self,
        writer: &mut Writer,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<ValidationResult, AuthError> {
        check_credentials(email, password, self.config.min_password_length)?;

        let now = self.clock.now();
        let user = User {
            id: UserId::new(format!("user{}", now.and_utc().timestamp_millis())),
            email: email.to_string(),
            display_name: display_name.to_string(),
            photo_url: None,
            email_verified: false,
            created_at: now,
        };

        info!(user_id = %user.id, email = %user.email, "User registered");
        let pending = issue_pending(email);
        self.publish(|_| AuthState::authenticated(user.clone()));
        self.mail_verification(&user, &pending.token);
        writer.pending = Some(pending);

        Ok(ValidationResult::ok_with(REGISTERED_MESSAGE))
    }

    fn try_send_password_reset(&self, email: &str) -> Result<ValidationResult, AuthError> {
        if !looks_like_email(email) {
            return Err(AuthError::MalformedEmail);
        }

        let sent = DeepLink::Reset {
            email: email.to_string(),
        }
        .to_url(&self.config.deep_link_scheme)
        .map_err(|e| EmailError::BuildError(e.to_string()))
        .and_then(|link| self.mailer.compose(reset_draft(email, &link)));

        match sent {
            Ok(()) => info!(email = %email, "Password reset mail composed"),
            Err(e) => self.report_mail_failure(&e),
        }

        Ok(ValidationResult::ok_with(RESET_SENT_MESSAGE))
    }

    fn try_verify_email(
        &self,
        writer: &mut Writer,
        email: &str,
        token: &str,
    ) -> Result<ValidationResult, AuthError> {
        let Some(user) = self.get_current_user().filter(|user| user.email == email) else {
            info!(email = %email, "Verification for unknown account");
            return Err(AuthError::NoMatchingAccount);
        };

        let pending_matches = writer
            .pending
            .as_ref()
            .is_some_and(|pending| pending.email == email && pending.token == token);
        let instant = token == self.config.instant_verify_token;

        if !pending_matches && !instant {
            info!(user_id = %user.id, "Verification token rejected");
            return Err(AuthError::InvalidVerificationLink);
        }

        writer.pending = None;
        let verified = User {
            email_verified: true,
            ..user
        };
        info!(user_id = %verified.id, "Email verified");
        self.publish(|state| AuthState {
            is_loading: false,
            current_user: Some(verified),
            error: state.error.clone(),
            is_email_verified: true,
        });

        Ok(ValidationResult::ok_with(VERIFIED_MESSAGE))
    }

    fn try_resend_verification(&self, writer: &mut Writer) -> Result<ValidationResult, AuthError> {
        let user = self.get_current_user().ok_or(AuthError::NoSignedInAccount)?;
        if user.email_verified {
            return Err(AuthError::AlreadyVerified);
        }

        let pending = issue_pending(&user.email);
        self.mail_verification(&user, &pending.token);
        writer.pending = Some(pending);

        Ok(ValidationResult::ok_with(VERIFICATION_SENT_MESSAGE))
    }

    fn mail_verification(&self, user: &User, token: &str) {
        let sent = DeepLink::Verify {
            email: user.email.clone(),
            token: token.to_string(),
        }
        .to_url(&self.config.deep_link_scheme)
        .map_err(|e| EmailError::BuildError(e.to_string()))
        .and_then(|link| {
            self.mailer
                .compose(verification_draft(&user.email, &user.display_name, &link))
        });

        match sent {
            Ok(()) => info!(user_id = %user.id, "Verification mail composed"),
            Err(e) => self.report_mail_failure(&e),
        }
    }

    fn report_mail_failure(&self, error: &EmailError) {
        warn!(error = %error, "Mail composition failed");
        let message = format!("Could not open mail app: {error}");
        self.publish(|state| AuthState {
            error: Some(message),
            ..state.clone()
        });
    }

    /// Runs one operation body, turning rejections and panics into a
    /// failed [`ValidationResult`]. A panic's message is also left in
    /// `AuthState.error`.
    fn run(
        &self,
        operation: &'static str,
        fallback: &'static str,
        body: impl FnOnce() -> Result<ValidationResult, AuthError>,
    ) -> ValidationResult {
        match catch_unwind(AssertUnwindSafe(body)) {
            Ok(outcome) => settle(operation, outcome),
            Err(payload) => {
                let message = panic_message(payload.as_ref())
                    .unwrap_or(fallback)
                    .to_string();
                error!(operation, reason = %message, "Operation failed unexpectedly");
                self.publish(|state| AuthState {
                    error: Some(message.clone()),
                    ..state.clone()
                });
                ValidationResult::failure(message)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Writer> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enters the loading phase; the returned guard leaves it on drop.
    fn begin(&self) -> LoadingGuard<'_> {
        self.publish(|state| AuthState {
            is_loading: true,
            error: None,
            ..state.clone()
        });
        LoadingGuard { state: &self.state }
    }

    /// Replaces the whole state with the value computed from the current one.
    fn publish(&self, next: impl FnOnce(&AuthState) -> AuthState) {
        self.state.send_modify(|state| *state = next(state));
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Clears `is_loading` when dropped, including during unwinding.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<AuthState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            if !state.is_loading {
                return false;
            }
            *state = AuthState {
                is_loading: false,
                ..state.clone()
            };
            true
        });
    }
}

fn issue_pending(email: &str) -> PendingVerification {
    PendingVerification {
        email: email.to_string(),
        token: Uuid::new_v4().simple().to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

fn settle(operation: &'static str, outcome: Result<ValidationResult, AuthError>) -> ValidationResult {
    outcome.unwrap_or_else(|err| {
        debug!(operation, reason = %err, "Operation rejected");
        ValidationResult::failure(err.to_string())
    })
}
