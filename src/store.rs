//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Cat;

/// Progress of the remote cat list
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cats from the remote table
    pub cats: Vec<Cat>,
    pub cats_status: LoadStatus,
    /// Booked cats for this browser (cat id -> email), mirrored from the local cache
    pub bookings: BTreeMap<u32, String>,
    /// Raw search input
    pub query: String,
    /// Section whose nav button is highlighted
    pub active_section: Option<&'static str>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_cats(store: &AppStore, cats: Vec<Cat>) {
    *store.cats().write() = cats;
    *store.cats_status().write() = LoadStatus::Loaded;
}

pub fn store_set_load_error(store: &AppStore, message: String) {
    *store.cats_status().write() = LoadStatus::Failed(message);
}

pub fn store_record_booking(store: &AppStore, cat_id: u32, email: String) {
    store.bookings().write().insert(cat_id, email);
}
