//! Mail composition for verification and password reset links.
//!
//! The session only needs something that accepts a draft. `SmtpComposer`
//! builds the message with `lettre` and hands it to a background task for
//! delivery; `Outbox` keeps drafts in memory.

use std::sync::{Mutex, PoisonError};

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    /// No mail client is available to take the draft.
    #[error("Mail client unavailable: {0}")]
    Unavailable(String),
}

/// A mail ready to be handed to the mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    /// Destination address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text_body: String,
    /// HTML body.
    pub html_body: String,
}

/// Something that can take a mail draft off the session's hands.
pub trait MailComposer: Send + Sync {
    /// Hands a draft to the mail client.
    ///
    /// Returning `Ok` means the draft was accepted, not that it was delivered.
    fn compose(&self, draft: MailDraft) -> Result<(), EmailError>;
}

/// In-memory composer that records every accepted draft.
#[derive(Debug, Default)]
pub struct Outbox {
    drafts: Mutex<Vec<MailDraft>>,
}

impl Outbox {
    /// Creates an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every draft composed so far.
    #[must_use]
    pub fn drafts(&self) -> Vec<MailDraft> {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent draft, if any.
    #[must_use]
    pub fn last(&self) -> Option<MailDraft> {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of drafts composed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when nothing has been composed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MailComposer for Outbox {
    fn compose(&self, draft: MailDraft) -> Result<(), EmailError> {
        debug!(to = %draft.to, subject = %draft.subject, "Draft stored in outbox");
        self.drafts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(draft);
        Ok(())
    }
}

/// SMTP-backed composer.
///
/// Messages are built synchronously and delivered by a tokio task, so
/// `compose` never blocks on the network.
#[derive(Clone)]
pub struct SmtpComposer {
    config: EmailConfig,
    queue: mpsc::UnboundedSender<Message>,
}

impl SmtpComposer {
    /// Creates the composer and spawns its delivery task.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be configured.
    pub fn spawn(config: EmailConfig) -> Result<(Self, JoinHandle<()>), EmailError> {
        let transport = create_transport(&config)?;
        let (queue, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(deliver(transport, rx));

        info!(
            smtp_host = %config.smtp_host,
            smtp_port = %config.smtp_port,
            "SMTP composer started"
        );

        Ok((Self { config, queue }, handle))
    }

    /// Builds a multipart (plain text + HTML) message from a draft.
    fn build_message(&self, draft: &MailDraft) -> Result<Message, EmailError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .to(draft
                .to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?)
            .subject(draft.subject.as_str())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(draft.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(draft.html_body.clone()),
                    ),
            )
            .map_err(|e| EmailError::BuildError(e.to_string()))
    }
}

impl MailComposer for SmtpComposer {
    fn compose(&self, draft: MailDraft) -> Result<(), EmailError> {
        let message = self.build_message(&draft)?;
        self.queue
            .send(message)
            .map_err(|_| EmailError::Unavailable("delivery task has stopped".to_string()))?;
        debug!(to = %draft.to, subject = %draft.subject, "Mail queued for delivery");
        Ok(())
    }
}

/// Creates an SMTP transport.
fn create_transport(config: &EmailConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
    let builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        .map_err(|e| EmailError::SendError(e.to_string()))?
        .port(config.smtp_port);

    let builder = if config.smtp_username.is_empty() {
        builder
    } else {
        builder.credentials(Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        ))
    };

    Ok(builder.build())
}

async fn deliver(
    transport: AsyncSmtpTransport<Tokio1Executor>,
    mut rx: mpsc::UnboundedReceiver<Message>,
) {
    while let Some(message) = rx.recv().await {
        match transport.send(message).await {
            Ok(_) => debug!("Mail delivered"),
            Err(e) => warn!(error = %e, "Mail delivery failed"),
        }
    }
    debug!("Mail delivery task finished");
}

#[cfg(test)]
#[path = "email_tests.rs"]
mod tests;
