//! Core business logic for Garuga.
//!
//! This crate contains the resort app's logic with ZERO UI or storage
//! dependencies. Screens call into it and render whatever it returns.
//!
//! # Modules
//!
//! - `auth` - Authentication session, validation rules and deep links
//! - `clock` - Injectable time source
//! - `navigation` - Screen routes and the navigation callback
//! - `reports` - Financial report aggregation and display formatting
//! - `resort` - Bookings, rooms, transactions and dashboard filters

pub mod auth;
pub mod clock;
pub mod navigation;
pub mod reports;
pub mod resort;

pub use auth::{AuthSession, AuthState, User, ValidationResult};
pub use clock::{Clock, FixedClock, SystemClock};
pub use navigation::{Navigator, Route, landing_route};
pub use reports::{FinancialReport, ReportPeriod, ReportService};
pub use resort::ResortData;
