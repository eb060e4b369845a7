use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of catalog categories used for filtering and random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Love,
    Career,
    Wealth,
    General,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Love, Self::Career, Self::Wealth, Self::General];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::General => "general",
        }
    }

    /// Case-sensitive lookup; the wire format is lowercase only.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "love" => Some(Self::Love),
            "career" => Some(Self::Career),
            "wealth" => Some(Self::Wealth),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog message. Immutable once created; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    pub id: i64,
    pub message: String,
    pub category: Category,
}

/// A user's bookmark of a catalog fortune, stamped with the server clock at
/// save time. Duplicate (`user_id`, `fortune_id`) pairs are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFortune {
    pub id: i64,
    pub user_id: i64,
    pub fortune_id: i64,
    pub saved_at: DateTime<Utc>,
}
