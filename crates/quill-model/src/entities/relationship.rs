//! Relationship entities - user-to-user relationship state and its wire codec

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::User;

/// User-to-user relationship state
///
/// The wire form is a bare integer, never the variant name. The numeric
/// values are frozen; reassigning them breaks every peer on the federation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RelationshipStatus {
    /// Request sent, the other side has not answered yet
    Pending = 0,
    /// Both sides are friends
    Accepted = 1,
    /// The other user is blocked
    Blocked = 2,
}

impl RelationshipStatus {
    /// Decode a raw wire integer
    ///
    /// Anything outside the mapped set is a hard error carrying the raw
    /// value; unknown states are never coerced to an existing one.
    pub fn from_i64(value: i64) -> Result<Self, UnknownRelationshipStatus> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Accepted),
            2 => Ok(Self::Blocked),
            other => Err(UnknownRelationshipStatus(other)),
        }
    }

    /// Get the wire integer for this status
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Accepted => 1,
            Self::Blocked => 2,
        }
    }

    /// Get the name of this status
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Blocked => "Blocked",
        }
    }
}

/// Error for a wire integer with no mapped relationship status
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown relationship status value: {0}")]
pub struct UnknownRelationshipStatus(pub i64);

impl Serialize for RelationshipStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for RelationshipStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::from_i64(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

/// A relationship entry: the other user plus the current state
///
/// State transitions (pending to accepted and so on) are decided by the
/// server; this type only carries whatever the wire says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub user: User,
    #[serde(rename = "type")]
    pub status: RelationshipStatus,
}

impl Relationship {
    /// Create a relationship entry
    #[must_use]
    pub fn new(user: User, status: RelationshipStatus) -> Self {
        Self { user, status }
    }
}
