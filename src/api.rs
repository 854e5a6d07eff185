use crate::config::ApiConfig;
use crate::models::listing::{Listing, ListingStatus, ListingsResponse, NewListing, StatusUpdate};
use crate::models::review::{Review, ReviewsResponse};
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// The listings resource. Client futures are `!Send`; they run on
/// `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait ListingsApi {
    async fn fetch_listings(&self, status: ListingStatus) -> Result<Vec<Listing>, ApiError>;
    async fn create_listing(&self, listing: &NewListing) -> Result<(), ApiError>;
    async fn update_status(&self, update: StatusUpdate) -> Result<(), ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait ReviewsApi {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ApiError>;
}

/// HTTP binding of both remote resources.
#[derive(Debug, Clone)]
pub struct HttpMarketplace {
    config: ApiConfig,
}

impl HttpMarketplace {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn ensure_success(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(response.json::<T>().await?)
}

impl ListingsApi for HttpMarketplace {
    async fn fetch_listings(&self, status: ListingStatus) -> Result<Vec<Listing>, ApiError> {
        log!("[API] GET {}?status={}", self.config.listings_url, status);
        let response = Request::get(&self.config.listings_url)
            .query([("status", status.as_str())])
            .send()
            .await?;
        // The store answers errors with a JSON `{ error }` body and no `listings`.
        ensure_success(&response)?;
        let body: ListingsResponse = decode(response).await?;
        log!("[API] Received {} listings", body.listings.len());
        Ok(body.listings)
    }

    async fn create_listing(&self, listing: &NewListing) -> Result<(), ApiError> {
        log!("[API] POST {} title={:?}", self.config.listings_url, listing.title);
        let request = Request::post(&self.config.listings_url)
            .json(listing)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await?;
        ensure_success(&response)
    }

    async fn update_status(&self, update: StatusUpdate) -> Result<(), ApiError> {
        log!("[API] PUT {} id={} status={}", self.config.listings_url, update.id, update.status);
        let request = Request::put(&self.config.listings_url)
            .json(&update)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await?;
        ensure_success(&response)
    }
}

impl ReviewsApi for HttpMarketplace {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ApiError> {
        log!("[API] GET {}", self.config.reviews_url);
        let response = Request::get(&self.config.reviews_url).send().await?;
        let body: ReviewsResponse = decode(response).await?;
        Ok(body.reviews)
    }
}
