//! Application Context
//!
//! Configuration and UI signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Cat;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Resolved configuration
    pub config: StoredValue<AppConfig>,
    /// Cat whose booking form is open (the pending cat) - read
    pub booking_target: ReadSignal<Option<Cat>>,
    /// Cat whose booking form is open - write
    set_booking_target: WriteSignal<Option<Cat>>,
    /// Page-level status message - read
    pub notice: ReadSignal<Option<String>>,
    /// Page-level status message - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        booking_target: (ReadSignal<Option<Cat>>, WriteSignal<Option<Cat>>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            booking_target: booking_target.0,
            set_booking_target: booking_target.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Id of the cat in the pending state, if any
    pub fn pending_cat_id(&self) -> Option<u32> {
        self.booking_target.with(|target| target.as_ref().map(|cat| cat.id))
    }

    /// Open the booking form for a cat
    pub fn open_booking(&self, cat: Cat) {
        self.set_notice.set(None);
        self.set_booking_target.set(Some(cat));
    }

    pub fn close_booking(&self) {
        self.set_booking_target.set(None);
    }

    pub fn notify(&self, message: String) {
        self.set_notice.set(Some(message));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}
