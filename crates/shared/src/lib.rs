//! Shared types and configuration for Garuga.
//!
//! This crate provides common pieces used by the core logic and the console:
//! - Typed IDs for type-safe record references
//! - Configuration management
//! - The mail composition collaborator (SMTP and in-memory outbox)

pub mod config;
pub mod email;
pub mod types;

pub use config::{AppConfig, AuthConfig, EmailConfig};
pub use email::{EmailError, MailComposer, MailDraft, Outbox, SmtpComposer};
