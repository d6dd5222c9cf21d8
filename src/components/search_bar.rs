//! Search Bar Component
//!
//! Free-text breed search. Every keystroke rewrites the query in the store.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-container">
            <input
                id="searchInput"
                class="form-control search-input"
                type="search"
                placeholder="Поиск по породам..."
                autocomplete="off"
                prop:value=move || store.query().get()
                on:input=move |ev| {
                    *store.query().write() = event_target_value(&ev);
                }
            />
        </div>
    }
}
