//! Admin console workflow: the create form, status toggling and the
//! reload-after-mutation sequence, kept apart from the view so it can run
//! against any [`ListingsApi`].
use crate::api::{ApiError, ListingsApi};
use crate::models::listing::{
    Listing, ListingStatus, NewListing, Rarity, StatusUpdate, DEFAULT_IMAGE_URL,
};
use crate::utils::fetch_guard::{FetchGuard, FetchTicket};
use leptos::logging::{error, log};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing notification raised by an admin action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Успешно".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Ошибка".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl FormError {
    pub fn notice(&self) -> Notice {
        match self {
            FormError::MissingField(_) => Notice::error("Заполните все обязательные поля"),
            FormError::InvalidNumber { field, .. } => {
                Notice::error(format!("Поле «{}» должно быть числом", field_label(field)))
            }
        }
    }
}

fn field_label(field: &str) -> &'static str {
    match field {
        "title" => "Название",
        "level" => "Уровень",
        "power" => "Мощность",
        "price" => "Цена",
        _ => "?",
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Raw text of the create form. Numeric fields stay text until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub level: String,
    pub power: String,
    pub price: String,
    pub rarity: Rarity,
    pub image_url: String,
}

impl Default for ListingForm {
    /// Both the initial form and the post-create reset.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            level: String::new(),
            power: String::new(),
            price: String::new(),
            rarity: Rarity::Rare,
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl From<&Listing> for ListingForm {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            description: listing.description.clone().unwrap_or_default(),
            level: listing.level.to_string(),
            power: listing.power.clone(),
            price: listing.price.to_string(),
            rarity: listing.rarity,
            image_url: listing.image_url.clone().unwrap_or_default(),
        }
    }
}

impl ListingForm {
    /// Checks required fields, then parses level and price.
    ///
    /// Missing fields are reported before malformed numbers so an empty form
    /// always yields `MissingField`.
    pub fn validate(&self) -> Result<NewListing, FormError> {
        for (field, value) in [
            ("title", &self.title),
            ("level", &self.level),
            ("power", &self.power),
            ("price", &self.price),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        let level = self
            .level
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidNumber { field: "level", value: self.level.clone() })?;
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| FormError::InvalidNumber { field: "price", value: self.price.clone() })?;

        Ok(NewListing {
            title: self.title.clone(),
            description: self.description.clone(),
            level,
            power: self.power.clone(),
            price,
            rarity: self.rarity,
            image_url: self.image_url.clone(),
            status: ListingStatus::Active,
        })
    }
}

/// Counts shown on the statistics tab, derived from the loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingStats {
    pub total: usize,
    pub active: usize,
    pub sold: usize,
}

impl ListingStats {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let count = |status| listings.iter().filter(|l| l.status == status).count();
        Self {
            total: listings.len(),
            active: count(ListingStatus::Active),
            sold: count(ListingStatus::Sold),
        }
    }
}

/// Result of a create or status change, ready to be applied to [`AdminState`].
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub notice: Notice,
    pub reset_form: bool,
    /// Set only when the write succeeded and the table must be re-fetched.
    pub reload: bool,
}

/// Orders the table loads of one admin view.
///
/// Only the most recently started load may land. Loads start on mount and
/// after a successful mutation; a rejected or failed mutation starts none, so
/// it never supersedes a load already in flight.
#[derive(Debug, Clone, Default)]
pub struct LoadSequence {
    guard: FetchGuard,
}

impl LoadSequence {
    pub fn start(&self) -> FetchTicket {
        self.guard.begin()
    }

    /// Ticket for the reload a finished mutation asks for, if any.
    pub fn after_mutation(&self, outcome: &MutationOutcome) -> Option<FetchTicket> {
        outcome.reload.then(|| self.start())
    }
}

/// Everything the admin page holds for its lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub listings: Vec<Listing>,
    pub form: ListingForm,
    pub notice: Option<Notice>,
    pub submitting: bool,
}

impl AdminState {
    pub fn stats(&self) -> ListingStats {
        ListingStats::from_listings(&self.listings)
    }

    /// A failed reload keeps the previous table.
    pub fn apply_reload(&mut self, result: Result<Vec<Listing>, ApiError>) {
        match result {
            Ok(listings) => self.listings = listings,
            Err(err) => {
                error!("[ADMIN] Failed to load listings: {}", err);
                self.notice = Some(Notice::error("Не удалось загрузить объявления"));
            }
        }
    }

    /// Applies a table load unless a newer one started after it. Returns
    /// whether the result was used.
    pub fn apply_load(&mut self, ticket: &FetchTicket, result: Result<Vec<Listing>, ApiError>) -> bool {
        if !ticket.is_current() {
            log!("[ADMIN] Discarding stale listings load");
            return false;
        }
        self.apply_reload(result);
        true
    }

    /// Notice, form reset and busy flag. The reload is started separately
    /// through [`LoadSequence::after_mutation`].
    pub fn apply_mutation(&mut self, outcome: MutationOutcome) {
        self.submitting = false;
        self.notice = Some(outcome.notice);
        if outcome.reset_form {
            self.form = ListingForm::default();
        }
    }
}

pub async fn load_active_listings<A: ListingsApi>(api: &A) -> Result<Vec<Listing>, ApiError> {
    api.fetch_listings(ListingStatus::Active).await
}

/// Validates the form and sends the create request. No request is made when
/// validation fails.
pub async fn create_listing<A: ListingsApi>(api: &A, form: &ListingForm) -> Result<(), AdminError> {
    let listing = form.validate()?;
    api.create_listing(&listing).await?;
    log!("[ADMIN] Created listing {:?}", listing.title);
    Ok(())
}

/// Create; the outcome asks for a reload on success.
pub async fn submit_listing<A: ListingsApi>(api: &A, form: &ListingForm) -> MutationOutcome {
    match create_listing(api, form).await {
        Ok(()) => MutationOutcome {
            notice: Notice::success("Объявление создано"),
            reset_form: true,
            reload: true,
        },
        Err(AdminError::Validation(err)) => {
            log!("[ADMIN] Create rejected: {}", err);
            MutationOutcome { notice: err.notice(), reset_form: false, reload: false }
        }
        Err(AdminError::Api(err)) => {
            error!("[ADMIN] Create failed: {}", err);
            MutationOutcome {
                notice: Notice::error("Не удалось создать объявление"),
                reset_form: false,
                reload: false,
            }
        }
    }
}

/// Flip a listing between active and sold; the outcome asks for a reload on
/// success.
///
/// Returns `None` without touching the network for any other status.
pub async fn toggle_listing_status<A: ListingsApi>(
    api: &A,
    listing: &Listing,
) -> Option<MutationOutcome> {
    let status = listing.status.toggled()?;
    let update = StatusUpdate { id: listing.id, status };
    let outcome = match api.update_status(update).await {
        Ok(()) => {
            log!("[ADMIN] Listing {} is now {}", listing.id, status);
            MutationOutcome {
                notice: Notice::success("Статус обновлён"),
                reset_form: false,
                reload: true,
            }
        }
        Err(err) => {
            error!("[ADMIN] Status update for {} failed: {}", listing.id, err);
            MutationOutcome {
                notice: Notice::error("Не удалось обновить статус"),
                reset_form: false,
                reload: false,
            }
        }
    };
    Some(outcome)
}
