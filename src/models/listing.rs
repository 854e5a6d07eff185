// src/models/listing.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image used when a listing is created without one of its own.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1538481199705-c710c4e965fc?w=800&q=80";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Badge text shown on catalog cards.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Обычный",
            Rarity::Rare => "Редкий",
            Rarity::Epic => "Эпический",
            Rarity::Legendary => "Легендарный",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Rarity::Common => "badge rarity-common",
            Rarity::Rare => "badge rarity-rare",
            Rarity::Epic => "badge rarity-epic",
            Rarity::Legendary => "badge rarity-legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rarity: {0}")]
pub struct UnknownRarity(pub String);

impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRarity(s.to_string()))
    }
}

/// Lifecycle state of a listing as stored remotely.
///
/// The store also knows states this front end never produces (its own insert
/// default is `moderation`); those decode to `Unknown` and are shown but never
/// toggled.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Sold,
    Pending,
    #[serde(other)]
    Unknown,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Pending => "pending",
            ListingStatus::Unknown => "unknown",
        }
    }

    /// The status the admin toggle moves to, if any.
    pub fn toggled(self) -> Option<ListingStatus> {
        match self {
            ListingStatus::Active => Some(ListingStatus::Sold),
            ListingStatus::Sold => Some(ListingStatus::Active),
            ListingStatus::Pending | ListingStatus::Unknown => None,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ListingStatus::Active => "badge status-active",
            ListingStatus::Sold => "badge status-sold",
            ListingStatus::Pending | ListingStatus::Unknown => "badge status-pending",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub level: i32,
    pub power: String,
    #[serde(deserialize_with = "decimal")]
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub rarity: Rarity,
    pub status: ListingStatus,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub seller_rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST` on the listings resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub level: i32,
    pub power: String,
    pub price: f64,
    pub rarity: Rarity,
    pub image_url: String,
    pub status: ListingStatus,
}

/// Body of `PUT` on the listings resource.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: ListingStatus,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListingsResponse {
    #[serde(default)]
    pub listings: Vec<Listing>,
}

// Decimal columns come back either as JSON numbers or as strings like "15000.00".
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid decimal: {s:?}"))),
        }
    }
}

fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_f64()
}

fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(NumberOrText::into_f64)
        .transpose()
}
