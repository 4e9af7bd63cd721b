//! Typed IDs for type-safe record references.
//!
//! Using typed IDs prevents accidentally passing a `RoomId` where a `BookingId` is expected.
//! Resort records carry short human-readable ids (`B001`, `R001`), so the wrappers hold strings.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an empty id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("id must not be empty")]
pub struct EmptyIdError;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = EmptyIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(EmptyIdError);
                }
                Ok(Self::new(trimmed))
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user.");
typed_id!(BookingId, "Unique identifier for a booking.");
typed_id!(RoomId, "Unique identifier for a room.");
typed_id!(TransactionId, "Unique identifier for a payment transaction.");
