//! `bookings` table

use reqwest::Method;

use super::{check_status, ApiError, SupabaseClient};
use crate::models::{Booking, NewBooking};

const BOOKING_COLUMNS: &str = "id,cat_id,cat_name,email";

/// PostgREST filter for one cat and email
fn booking_lookup_params(cat_id: u32, email: &str) -> Vec<(&'static str, String)> {
    vec![
        ("select", BOOKING_COLUMNS.to_string()),
        ("cat_id", format!("eq.{}", cat_id)),
        ("email", format!("eq.{}", email)),
        ("limit", "1".to_string()),
    ]
}

impl SupabaseClient {
    pub(super) async fn select_booking(&self, cat_id: u32, email: &str) -> Result<Option<Booking>, ApiError> {
        let response = self
            .request(Method::GET, "bookings")?
            .query(&booking_lookup_params(cat_id, email))
            .send()
            .await?;
        let rows: Vec<Booking> = check_status(response).await?.json().await?;
        Ok(rows.into_iter().next())
    }

    pub(super) async fn create_booking(&self, booking: &NewBooking) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, "bookings")?
            .header("Prefer", "return=minimal")
            .json(booking)
            .send()
            .await?;
        check_status(response).await?;
        tracing::info!("booking stored for cat {}", booking.cat_id);
        Ok(())
    }
}
