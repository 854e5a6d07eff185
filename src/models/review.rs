// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Customer review as served by the reviews endpoint. Read-only here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: String,
    /// Null when the author's account no longer exists.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Shown in place of a missing author name.
pub const ANONYMOUS_AUTHOR: &str = "Покупатель";

impl Review {
    pub fn author(&self) -> &str {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_AUTHOR)
    }

    /// Avatar fallback: first character of the author name.
    pub fn initial(&self) -> String {
        self.author().chars().next().map(String::from).unwrap_or_default()
    }

    /// Number of filled stars out of five.
    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(5))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<Review>,
}
