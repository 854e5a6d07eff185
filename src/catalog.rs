//! Storefront catalog: the seeded account collection and the filter/sort
//! pipeline that decides which cards are shown and in what order.
use crate::models::listing::{Listing, ListingStatus, Rarity};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RarityFilter {
    #[default]
    All,
    Only(Rarity),
}

impl RarityFilter {
    /// Filters offered as buttons, in display order. `common` is accepted by
    /// the pipeline but has no button.
    pub const BUTTONS: [RarityFilter; 4] = [
        RarityFilter::All,
        RarityFilter::Only(Rarity::Legendary),
        RarityFilter::Only(Rarity::Epic),
        RarityFilter::Only(Rarity::Rare),
    ];

    pub fn matches(self, listing: &Listing) -> bool {
        match self {
            RarityFilter::All => true,
            RarityFilter::Only(rarity) => listing.rarity == rarity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RarityFilter::All => "all",
            RarityFilter::Only(rarity) => rarity.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RarityFilter::All => "Все",
            RarityFilter::Only(Rarity::Legendary) => "Легендарные",
            RarityFilter::Only(Rarity::Epic) => "Эпические",
            RarityFilter::Only(Rarity::Rare) => "Редкие",
            RarityFilter::Only(Rarity::Common) => "Обычные",
        }
    }
}

impl fmt::Display for RarityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RarityFilter {
    type Err = crate::models::listing::UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RarityFilter::All),
            other => other.parse().map(RarityFilter::Only),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Insertion order of the collection.
    #[default]
    Popularity,
    PriceAscending,
    PriceDescending,
    /// Highest level first.
    Level,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::Level,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popular",
            SortKey::PriceAscending => "price-asc",
            SortKey::PriceDescending => "price-desc",
            SortKey::Level => "level",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popularity => "По популярности",
            SortKey::PriceAscending => "Сначала дешевые",
            SortKey::PriceDescending => "Сначала дорогие",
            SortKey::Level => "По уровню",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Listings to render for the given filter and sort key.
///
/// The sort is stable: equal keys keep collection order.
pub fn visible_listings(listings: &[Listing], filter: RarityFilter, sort: SortKey) -> Vec<Listing> {
    let mut visible: Vec<Listing> = listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect();

    match sort {
        SortKey::Popularity => {}
        SortKey::PriceAscending => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDescending => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Level => visible.sort_by(|a, b| b.level.cmp(&a.level)),
    }
    visible
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: i64,
    title: &str,
    level: i32,
    power: &str,
    price: f64,
    image_url: &str,
    rarity: Rarity,
    seller: &str,
    rating: f64,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        description: None,
        level,
        power: power.to_string(),
        price,
        image_url: Some(image_url.to_string()),
        rarity,
        status: ListingStatus::Active,
        seller_name: Some(seller.to_string()),
        seller_rating: Some(rating),
        created_at: None,
        updated_at: None,
    }
}

/// The fixed collection shown on the storefront.
pub fn catalog_accounts() -> Vec<Listing> {
    vec![
        seeded(
            1,
            "Аккаунт с легендарными героями",
            85,
            "1.2M",
            15000.0,
            "https://images.unsplash.com/photo-1538481199705-c710c4e965fc?w=800&q=80",
            Rarity::Legendary,
            "ProGamer2024",
            4.9,
        ),
        seeded(
            2,
            "Топовый аккаунт для PvP",
            78,
            "980K",
            12000.0,
            "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=800&q=80",
            Rarity::Epic,
            "MasterSword",
            4.8,
        ),
        seeded(
            3,
            "Прокачанный аккаунт с артефактами",
            72,
            "850K",
            9500.0,
            "https://images.unsplash.com/photo-1579373903781-fd5c0c30c4cd?w=800&q=80",
            Rarity::Epic,
            "GameLegend",
            4.7,
        ),
        seeded(
            4,
            "Аккаунт с редкими скинами",
            65,
            "720K",
            7500.0,
            "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=800&q=80",
            Rarity::Rare,
            "SwordKing",
            4.6,
        ),
        seeded(
            5,
            "Стартовый аккаунт для новичков",
            45,
            "450K",
            3500.0,
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&q=80",
            Rarity::Rare,
            "Newbie Pro",
            4.5,
        ),
        seeded(
            6,
            "Аккаунт с максимальными скиллами",
            90,
            "1.5M",
            18000.0,
            "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=800&q=80",
            Rarity::Legendary,
            "UltraPlayer",
            5.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(listings: &[Listing]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    #[test]
    fn seeded_collection_has_unique_ids() {
        let accounts = catalog_accounts();
        let mut seen = ids(&accounts);
        seen.dedup();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn popularity_keeps_insertion_order() {
        let accounts = catalog_accounts();
        let shown = visible_listings(&accounts, RarityFilter::All, SortKey::Popularity);
        assert_eq!(ids(&shown), ids(&accounts));
    }

    #[test]
    fn price_sorts_both_ways() {
        let accounts = catalog_accounts();
        let asc = visible_listings(&accounts, RarityFilter::All, SortKey::PriceAscending);
        assert_eq!(ids(&asc), vec![5, 4, 3, 2, 1, 6]);
        let desc = visible_listings(&accounts, RarityFilter::All, SortKey::PriceDescending);
        assert_eq!(ids(&desc), vec![6, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn level_sort_is_highest_first_within_filter() {
        let accounts = catalog_accounts();
        let shown = visible_listings(
            &accounts,
            RarityFilter::Only(Rarity::Legendary),
            SortKey::Level,
        );
        assert_eq!(ids(&shown), vec![6, 1]);
    }

    #[test]
    fn filter_and_sort_keys_parse_from_control_values() {
        assert_eq!("all".parse::<RarityFilter>(), Ok(RarityFilter::All));
        assert_eq!("epic".parse::<RarityFilter>(), Ok(RarityFilter::Only(Rarity::Epic)));
        assert_eq!("price-desc".parse::<SortKey>(), Ok(SortKey::PriceDescending));
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
