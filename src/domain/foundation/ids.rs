//! Identifier value objects.
//!
//! Generated content (concepts, vendors, categories) carries string ids that
//! are minted at generation time from an ordinal position and a
//! high-resolution stamp. Sessions carry a random id that is otherwise
//! inert to the wizard logic.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a generated event concept.
    ConceptId
);

string_id!(
    /// Identifier of a single vendor suggestion.
    VendorId
);

string_id!(
    /// Identifier of a vendor category.
    CategoryId
);

/// Identifier for one wizard session.
///
/// Generated once when the session starts, in the form
/// `session-<unix millis>-<random>-<random>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!(
            "session-{}-{}-{}",
            Utc::now().timestamp_millis(),
            &random[..9],
            &random[9..18]
        ))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Returns a nanosecond stamp for composing generation-time ids.
///
/// Stamps are strictly increasing within the process, so two batches
/// produced within the same clock tick still get distinct ids.
pub fn next_id_stamp() -> u64 {
    let now = Utc::now()
        .timestamp_nanos_opt()
        .map(|nanos| nanos.max(0) as u64)
        .unwrap_or_default();

    let mut previous = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(previous + 1);
        match LAST_STAMP.compare_exchange_weak(
            previous,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => previous = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn session_id_has_expected_shape() {
        let id = SessionId::new();
        let parts: Vec<&str> = id.as_str().split('-').collect();

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "session");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert_eq!(parts[3].len(), 9);
    }

    #[test]
    fn session_ids_differ() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn id_stamps_are_strictly_increasing() {
        let stamps: Vec<u64> = (0..1_000).map(|_| next_id_stamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn id_stamps_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..500).map(|_| next_id_stamp()).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for stamp in handle.join().unwrap() {
                assert!(seen.insert(stamp), "duplicate stamp {}", stamp);
            }
        }
    }

    #[test]
    fn string_ids_display_their_value() {
        let id = ConceptId::new("concept-1-42");
        assert_eq!(id.to_string(), "concept-1-42");
        assert_eq!(VendorId::from("v1").as_str(), "v1");
    }

    #[test]
    fn string_ids_serialize_transparently() {
        let json = serde_json::to_string(&CategoryId::new("venue")).unwrap();
        assert_eq!(json, "\"venue\"");
    }
}
