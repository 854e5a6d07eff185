/// Remote endpoints the storefront and admin console talk to.
///
/// The WASM bundle has no process environment, so overrides are read at
/// build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub listings_url: String,
    pub reviews_url: String,
}

pub const DEFAULT_LISTINGS_URL: &str =
    "https://functions.poehali.dev/6d0b5ebb-af6a-4d0a-833a-adb6a2c6b1b4";
pub const DEFAULT_REVIEWS_URL: &str =
    "https://functions.poehali.dev/ea9cac52-5bf0-4133-87c7-3c8d1cdae472";

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self {
            listings_url: option_env!("GAMEVAULT_LISTINGS_URL")
                .unwrap_or(DEFAULT_LISTINGS_URL)
                .to_string(),
            reviews_url: option_env!("GAMEVAULT_REVIEWS_URL")
                .unwrap_or(DEFAULT_REVIEWS_URL)
                .to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
