//! Booking Workflow
//!
//! unbooked -> pending (form open) -> booked.
//!
//! Duplicates are caught by a check-then-insert against the remote table,
//! so two sessions racing on the same cat and email can both succeed.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::api::{ApiError, CatalogBackend};
use crate::cache::{BookingCache, KeyValueStore};
use crate::models::{Cat, NewBooking};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Введите корректный email")]
    InvalidEmail,
    #[error("Вы уже записались на просмотр этой кошки")]
    AlreadyBooked,
    #[error("Ошибка записи на просмотр: {0}")]
    Backend(#[from] ApiError),
}

/// Trimmed address, or `InvalidEmail`
pub fn validate_email(raw: &str) -> Result<String, BookingError> {
    let email = raw.trim();
    if email_regex().is_match(email) {
        Ok(email.to_string())
    } else {
        Err(BookingError::InvalidEmail)
    }
}

/// Per-cat state as seen by this browser
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookingState {
    Unbooked,
    Pending,
    Booked,
}

impl BookingState {
    pub fn resolve(cat_id: u32, booked: &BTreeMap<u32, String>, pending: Option<u32>) -> Self {
        if booked.contains_key(&cat_id) {
            BookingState::Booked
        } else if pending == Some(cat_id) {
            BookingState::Pending
        } else {
            BookingState::Unbooked
        }
    }

    pub fn can_choose(self) -> bool {
        self == BookingState::Unbooked
    }

    pub fn button_label(self) -> &'static str {
        match self {
            BookingState::Unbooked => "Выбрать",
            BookingState::Pending => "Оформляем...",
            BookingState::Booked => "Вы записаны",
        }
    }
}

/// Local cache check, email validation, remote existence check, insert
pub struct BookingWorkflow<'a, B: CatalogBackend + ?Sized, S: KeyValueStore> {
    backend: &'a B,
    cache: BookingCache<S>,
}

impl<'a, B: CatalogBackend + ?Sized, S: KeyValueStore> BookingWorkflow<'a, B, S> {
    pub fn new(backend: &'a B, cache: BookingCache<S>) -> Self {
        Self { backend, cache }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &BookingCache<S> {
        &self.cache
    }

    pub async fn book(&mut self, cat: &Cat, raw_email: &str) -> Result<NewBooking, BookingError> {
        if self.cache.is_booked(cat.id) {
            tracing::debug!("cat {} already booked locally by {:?}", cat.id, self.cache.email_for(cat.id));
            return Err(BookingError::AlreadyBooked);
        }
        let email = validate_email(raw_email)?;

        if let Some(existing) = self.backend.find_booking(cat.id, &email).await? {
            tracing::info!("cat {} already booked as row {}", cat.id, existing.id);
            return Err(BookingError::AlreadyBooked);
        }

        let booking = NewBooking {
            cat_id: cat.id,
            cat_name: cat.name.clone(),
            email,
        };
        self.backend.insert_booking(&booking).await?;

        // The row exists remotely now; a cache write failure only costs the shortcut
        if let Err(e) = self.cache.record(booking.cat_id, &booking.email) {
            tracing::warn!("booking for cat {} not cached: {}", booking.cat_id, e);
        }
        Ok(booking)
    }
}
