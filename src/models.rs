//! Frontend Models
//!
//! Rows of the remote `cats` and `bookings` tables.

use serde::{Deserialize, Serialize};

/// Cat row (read-only reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Cat {
    /// Image to render, or `placeholder` when the URL is missing or blank
    pub fn image_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }
}

/// Booking row as read back from the remote table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub cat_id: u32,
    pub cat_name: String,
    pub email: String,
}

/// Booking row to insert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub cat_id: u32,
    pub cat_name: String,
    pub email: String,
}
