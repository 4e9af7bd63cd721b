//! Financial report generation.
//!
//! Pure functions over [`ResortData`](crate::resort::ResortData):
//! - Revenue totals (all time, monthly, daily, any [`ReportPeriod`])
//! - Occupancy rate
//! - Booking counts and average booking value
//! - Revenue by room type

pub mod format;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use format::{format_amount, format_percent, format_whole_amount};
pub use service::ReportService;
pub use types::*;
