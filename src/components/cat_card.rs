//! Cat Card Component
//!
//! One cat from the remote table with its "choose" control.

use leptos::prelude::*;

use crate::booking::BookingState;
use crate::context::AppContext;
use crate::models::Cat;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CatCard(cat: Cat) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = cat.id;
    let image = ctx
        .config
        .with_value(|config| cat.image_src(&config.placeholder_image).to_string());
    let name = cat.name.clone();
    let breed = cat.breed.clone().unwrap_or_default();
    let description = cat.description.clone().unwrap_or_default();

    // Booked state comes from the local cache mirror, no request needed
    let state = Memo::new(move |_| {
        let pending = ctx.pending_cat_id();
        store.bookings().with(|booked| BookingState::resolve(id, booked, pending))
    });

    let choose = move |_| {
        if state.get().can_choose() {
            ctx.open_booking(cat.clone());
        }
    };

    view! {
        <div class="cat-card card">
            <div class="card__body cat-card__body">
                <img class="cat-card__image" src=image alt=name.clone() />
                <h3 class="cat-card__name">{name}</h3>
                <p class="cat-card__breed">{breed}</p>
                <p class="cat-card__description">{description}</p>
                <button
                    class=move || match state.get() {
                        BookingState::Booked => "btn btn--secondary",
                        _ => "btn btn--primary",
                    }
                    disabled=move || !state.get().can_choose()
                    on:click=choose
                >
                    {move || state.get().button_label()}
                </button>
            </div>
        </div>
    }
}
