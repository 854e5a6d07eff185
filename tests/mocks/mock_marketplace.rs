use gamevault::api::{ApiError, ListingsApi, ReviewsApi};
use gamevault::models::listing::{Listing, ListingStatus, NewListing, Rarity, StatusUpdate};
use gamevault::models::review::Review;
use std::cell::RefCell;

/// Every request the mock received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchListings(ListingStatus),
    Create(NewListing),
    UpdateStatus(StatusUpdate),
    FetchReviews,
}

/// In-memory stand-in for the remote listings and reviews resources.
#[derive(Debug, Default)]
pub struct MockMarketplace {
    pub calls: RefCell<Vec<Call>>,
    pub store: RefCell<Vec<Listing>>,
    pub reviews: Vec<Review>,
    pub fetch_error: Option<ApiError>,
    pub create_error: Option<ApiError>,
    pub update_error: Option<ApiError>,
    pub reviews_error: Option<ApiError>,
}

impl MockMarketplace {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self { store: RefCell::new(listings), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ListingsApi for MockMarketplace {
    async fn fetch_listings(&self, status: ListingStatus) -> Result<Vec<Listing>, ApiError> {
        self.record(Call::FetchListings(status));
        if let Some(err) = &self.fetch_error {
            return Err(err.clone());
        }
        Ok(self
            .store
            .borrow()
            .iter()
            .filter(|l| l.status == status)
            .cloned()
            .collect())
    }

    async fn create_listing(&self, listing: &NewListing) -> Result<(), ApiError> {
        self.record(Call::Create(listing.clone()));
        if let Some(err) = &self.create_error {
            return Err(err.clone());
        }
        let mut store = self.store.borrow_mut();
        let id = store.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        store.push(Listing {
            id,
            title: listing.title.clone(),
            description: Some(listing.description.clone()),
            level: listing.level,
            power: listing.power.clone(),
            price: listing.price,
            image_url: Some(listing.image_url.clone()),
            rarity: listing.rarity,
            status: listing.status,
            seller_name: None,
            seller_rating: None,
            created_at: Some("2024-10-01 12:00:00".into()),
            updated_at: None,
        });
        Ok(())
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<(), ApiError> {
        self.record(Call::UpdateStatus(update));
        if let Some(err) = &self.update_error {
            return Err(err.clone());
        }
        if let Some(listing) = self.store.borrow_mut().iter_mut().find(|l| l.id == update.id) {
            listing.status = update.status;
        }
        Ok(())
    }
}

impl ReviewsApi for MockMarketplace {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.record(Call::FetchReviews);
        match &self.reviews_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.reviews.clone()),
        }
    }
}

pub fn listing(id: i64, rarity: Rarity, status: ListingStatus) -> Listing {
    Listing {
        id,
        title: format!("Account #{id}"),
        description: None,
        level: 40 + id as i32,
        power: format!("{}K", 100 * id),
        price: 1000.0 * id as f64,
        image_url: Some(format!("https://img.example/{id}.jpg")),
        rarity,
        status,
        seller_name: Some("Seller".into()),
        seller_rating: Some(4.5),
        created_at: Some("2024-09-30 08:15:00".into()),
        updated_at: None,
    }
}

pub fn review(id: i64, rating: u8) -> Review {
    Review {
        id,
        rating,
        comment: format!("Review {id}"),
        is_verified: id % 2 == 0,
        created_at: "2024-09-30 08:15:00".into(),
        username: Some(format!("user{id}")),
        avatar_url: None,
    }
}
