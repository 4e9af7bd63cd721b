//! Garuga Console
//!
//! Runs the resort app's flows from the terminal: signs into the demo
//! account, optionally opens a deep link passed as the first argument, and
//! prints the dashboards and financial report.

use std::sync::Arc;

use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use garuga_core::navigation::{Navigator, Route, landing_route};
use garuga_core::reports::{ReportService, format_amount, format_percent, format_whole_amount};
use garuga_core::resort::{BookingFilter, BookingSummary, RoomFilter, RoomSummary, floors};
use garuga_core::{AuthSession, Clock, ResortData, SystemClock};
use garuga_shared::{AppConfig, MailComposer, Outbox, SmtpComposer};

/// Navigator that only logs where the app would go.
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        info!(route = %route, "Navigate");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garuga=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Pick the mail collaborator
    let outbox = Arc::new(Outbox::new());
    let (mailer, delivery): (Arc<dyn MailComposer>, _) = if config.email.enabled {
        let (composer, handle) = SmtpComposer::spawn(config.email.clone())?;
        (Arc::new(composer), Some(handle))
    } else {
        info!("SMTP disabled, keeping mail drafts in memory");
        (outbox.clone(), None)
    };

    let clock = Arc::new(SystemClock);
    let session = AuthSession::new(config.auth.clone(), mailer, clock.clone());
    let navigator = LogNavigator;

    // Log every published state
    let mut states = session.subscribe();
    let watcher = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            debug!(
                phase = ?state.phase(),
                error = state.error.as_deref().unwrap_or(""),
                "Auth state changed"
            );
        }
    });

    let signed_in = session.sign_in(&config.auth.demo_email, &config.auth.demo_password);
    if !signed_in.is_valid {
        warn!(message = signed_in.message.as_deref().unwrap_or(""), "Demo sign-in failed");
    }

    if let Some(link) = std::env::args().nth(1) {
        let handled = session.handle_deep_link(&link);
        info!(handled, "Deep link opened");
    }

    navigator.navigate(landing_route(&session.state()));

    let data = ResortData::sample();
    print_bookings(&data);
    print_rooms(&data);

    let report = ReportService::generate_financial_report(&data, clock.now());
    info!(
        total_revenue = %format_amount(report.total_revenue),
        monthly_revenue = %format_amount(report.monthly_revenue),
        daily_revenue = %format_amount(report.daily_revenue),
        occupancy_rate = %format_percent(report.occupancy_rate),
        average_booking_value = %format_whole_amount(report.average_booking_value),
        "Financial report"
    );
    for share in report.room_type_shares() {
        info!(
            room_type = %share.room_type,
            revenue = %format_amount(share.revenue),
            share = %format_percent(share.share),
            "Revenue by room type"
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !outbox.is_empty() {
        info!(drafts = outbox.len(), "Mail drafts kept in memory");
    }

    // Dropping the session closes the mail queue and the state channel
    drop(session);
    if let Some(handle) = delivery {
        handle.await?;
    }
    watcher.await?;

    Ok(())
}

fn print_bookings(data: &ResortData) {
    let summary = BookingSummary::from_bookings(&data.bookings);
    info!(
        total = summary.total,
        active = summary.active,
        cancelled = summary.cancelled,
        "Bookings"
    );

    for booking in BookingFilter::default().apply(&data.bookings) {
        info!(
            id = %booking.id,
            guest = %booking.guest_name,
            room = %booking.room_number,
            nights = booking.nights(),
            amount = %format_amount(booking.total_amount),
            status = booking.status.label(),
            "Booking"
        );
    }
}

fn print_rooms(data: &ResortData) {
    let summary = RoomSummary::from_rooms(&data.rooms);
    info!(
        total = summary.total,
        available = summary.available,
        occupied = summary.occupied,
        "Rooms"
    );

    for floor in floors(&data.rooms) {
        let filter = RoomFilter {
            floor: Some(floor),
            status: None,
        };
        for room in filter.apply(&data.rooms) {
            info!(
                floor,
                number = %room.number,
                room_type = %room.room_type,
                price = %format_amount(room.price_per_night),
                status = room.status.label(),
                guest = room.current_guest.as_deref().unwrap_or("-"),
                "Room"
            );
        }
    }
}
