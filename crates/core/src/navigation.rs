//! Screen routes and the navigation callback.
//!
//! Routes are opaque names handed to whatever navigation controller the
//! front end provides. The core only decides where to go.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{AuthState, SessionPhase};

/// A route name the core does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

/// App screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Sign-in form.
    Login,
    /// Registration form.
    Register,
    /// Forgot-password form.
    Forgot,
    /// Dashboard menu.
    Home,
    /// Bookings dashboard.
    Bookings,
    /// Rooms dashboard.
    Rooms,
    /// Revenue dashboard.
    Revenue,
}

impl Route {
    /// Every route.
    pub const ALL: [Self; 7] = [
        Self::Login,
        Self::Register,
        Self::Forgot,
        Self::Home,
        Self::Bookings,
        Self::Rooms,
        Self::Revenue,
    ];

    /// Route name passed to the navigation controller.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Forgot => "forgot",
            Self::Home => "home",
            Self::Bookings => "bookings",
            Self::Rooms => "rooms",
            Self::Revenue => "revenue",
        }
    }

    /// Returns true for screens behind a verified session.
    #[must_use]
    pub const fn requires_session(self) -> bool {
        match self {
            Self::Login | Self::Register | Self::Forgot => false,
            Self::Home | Self::Bookings | Self::Rooms | Self::Revenue => true,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|route| route.as_str() == name)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Navigation controller supplied by the front end.
pub trait Navigator {
    /// Shows `route`.
    fn navigate(&self, route: Route);
}

/// Where to go after the session state changes.
#[must_use]
pub fn landing_route(state: &AuthState) -> Route {
    match state.phase() {
        SessionPhase::AuthenticatedVerified => Route::Home,
        SessionPhase::Anonymous | SessionPhase::Loading | SessionPhase::AuthenticatedUnverified => {
            Route::Login
        }
    }
}

/// Returns `requested`, or the landing route when `requested` needs a
/// verified session that `state` does not have.
#[must_use]
pub fn resolve_route(requested: Route, state: &AuthState) -> Route {
    if requested.requires_session() && state.phase() != SessionPhase::AuthenticatedVerified {
        landing_route(state)
    } else {
        requested
    }
}
