//! User entity - another account on the federation, as peers see it

use serde::{Deserialize, Serialize};

/// Public user profile
///
/// `mention` is the federation-wide address (`name@domain`) handed out by the
/// server; the client treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub mention: String,
    pub name: String,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl User {
    /// Create a user profile
    #[must_use]
    pub fn new(
        mention: impl Into<String>,
        name: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            mention: mention.into(),
            name: name.into(),
            display_name,
        }
    }

    /// Name to show in lists: display name when set, mention otherwise
    #[must_use]
    pub fn display_or_mention(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.mention)
    }
}
