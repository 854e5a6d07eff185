//! Reviews shown on the storefront.
use crate::api::ReviewsApi;
use crate::models::review::Review;
use leptos::logging::warn;

/// Cards rendered at most.
pub const REVIEW_CARD_LIMIT: usize = 6;
/// Summary figures shown under the cards; not derived from fetched reviews.
pub const AVERAGE_RATING: &str = "4.9";
pub const HAPPY_CUSTOMERS: &str = "1000+";

/// Fetches reviews, treating any failure as an empty list.
pub async fn load_reviews<R: ReviewsApi>(api: &R) -> Vec<Review> {
    match api.fetch_reviews().await {
        Ok(reviews) => reviews,
        Err(err) => {
            warn!("[REVIEWS] Falling back to no reviews: {}", err);
            Vec::new()
        }
    }
}

pub fn featured_reviews(reviews: &[Review]) -> &[Review] {
    &reviews[..reviews.len().min(REVIEW_CARD_LIMIT)]
}
