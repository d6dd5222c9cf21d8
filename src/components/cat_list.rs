//! Cat List Component
//!
//! Cats loaded from the remote table, with loading and error states.

use leptos::prelude::*;

use crate::components::CatCard;
use crate::store::{use_app_store, AppStateStoreFields, LoadStatus};

#[component]
pub fn CatList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="cat-list" class="cat-list">
            <h2 class="cat-list__title">"Наши кошки"</h2>
            {move || match store.cats_status().get() {
                LoadStatus::Loading => view! {
                    <p class="cat-list__status">"Загрузка..."</p>
                }.into_any(),
                LoadStatus::Failed(message) => view! {
                    <p class="cat-list__status error">{format!("Ошибка загрузки данных: {}", message)}</p>
                }.into_any(),
                LoadStatus::Loaded => {
                    if store.cats().with(|cats| cats.is_empty()) {
                        view! { <p class="cat-list__status">"Нет данных о кошках."</p> }.into_any()
                    } else {
                        view! {
                            <p class="cat-list__status">
                                {move || format!("Найдено: {}", store.cats().with(|cats| cats.len()))}
                            </p>
                            <For
                                each=move || store.cats().get()
                                key=|cat| cat.id
                                children=move |cat| view! { <CatCard cat=cat /> }
                            />
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
