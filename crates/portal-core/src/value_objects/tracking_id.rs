//! Tracking identifier - the short public token citizens use to look up a complaint
//!
//! Always 10 uppercase alphanumeric characters, generated randomly at intake.
//! Lookups normalize input to uppercase so a citizen can paste the token in
//! any case.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Public tracking token for a complaint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingId(String);

impl TrackingId {
    /// Token length in characters
    pub const LENGTH: usize = 10;

    /// Characters a token may contain
    pub const CHARSET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Generate a new random tracking identifier
    ///
    /// Uniqueness is not guaranteed by generation alone; callers must
    /// collision-check against the store and regenerate on conflict.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let token: String = (0..Self::LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..Self::CHARSET.len());
                Self::CHARSET[idx] as char
            })
            .collect();
        Self(token)
    }

    /// Parse a tracking identifier, normalizing to uppercase
    pub fn parse(s: &str) -> Result<Self, TrackingIdParseError> {
        let normalized = s.trim().to_ascii_uppercase();

        if normalized.len() != Self::LENGTH {
            return Err(TrackingIdParseError::WrongLength(normalized.len()));
        }

        if !normalized
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(TrackingIdParseError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Get the token as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a tracking identifier from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrackingIdParseError {
    #[error("tracking identifier must be {} characters, got {0}", TrackingId::LENGTH)]
    WrongLength(usize),

    #[error("tracking identifier may only contain letters and digits")]
    InvalidCharacter,
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackingId {
    type Err = TrackingIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackingId::parse(s)
    }
}

impl Serialize for TrackingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TrackingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TrackingId::parse(&s).map_err(serde::de::Error::custom)
    }
}
