//! Cat Catalog App
//!
//! Root component: breed catalog with search and navigation, plus the
//! remote cat list and its booking form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{CatalogBackend, SupabaseClient};
use crate::breeds::CATALOG;
use crate::cache::{browser_store, BookingCache};
use crate::components::{BookingForm, CatList, NoResults, SearchBar, SectionBlock, SectionNav};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Cat;
use crate::search;
use crate::store::{store_set_cats, store_set_load_error, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (booking_target, set_booking_target) = signal::<Option<Cat>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let ctx = AppContext::new(config.clone(), (booking_target, set_booking_target), (notice, set_notice));
    provide_context(ctx);

    // Restore booked cats from the local cache before the list renders
    let cache = BookingCache::load(browser_store(), &config.cache_key);
    *store.bookings().write() = cache.entries().clone();

    // Load cats on mount
    Effect::new(move |_| {
        let backend = ctx.config.with_value(|config| config.backend.clone());
        spawn_local(async move {
            let client = SupabaseClient::new(backend);
            match client.list_cats().await {
                Ok(cats) => {
                    tracing::info!("loaded {} cats", cats.len());
                    store_set_cats(&store, cats);
                }
                Err(e) => {
                    tracing::error!("loading cats failed: {}", e);
                    store_set_load_error(&store, e.to_string());
                }
            }
        });
    });

    // Recomputed on every keystroke
    let filter = Memo::new(move |_| store.query().with(|query| search::filter_catalog(CATALOG, query)));

    view! {
        <div class="app-layout">
            <header class="header">
                <h1>"🐱 Породы кошек"</h1>
                <p class="header__subtitle">"Каталог пород и запись на знакомство с нашими кошками"</p>
            </header>

            <SectionNav sections=CATALOG />
            <SearchBar />

            {move || notice.get().map(|message| view! {
                <div class="notice">
                    <span>{message}</span>
                    <button class="notice__close" on:click=move |_| ctx.clear_notice()>"×"</button>
                </div>
            })}

            <main id="main" class="main-content">
                <CatList />

                <Show when=move || filter.with(|f| f.show_empty_state)>
                    <NoResults />
                </Show>

                {CATALOG.iter().map(|section| view! {
                    <SectionBlock section=*section filter=filter />
                }).collect_view()}
            </main>

            <BookingForm />
        </div>
    }
}
