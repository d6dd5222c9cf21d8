//! Empty-state card shown when the search matches no breed.

use leptos::prelude::*;

#[component]
pub fn NoResults() -> impl IntoView {
    view! {
        <div id="noResults" class="no-results">
            <div class="card">
                <div class="card__body no-results__body">
                    <h3>"🔍 Ничего не найдено"</h3>
                    <p>"Попробуйте изменить поисковый запрос или просмотрите все породы"</p>
                </div>
            </div>
        </div>
    }
}
