//! Breed Section Component
//!
//! Static breed sections and cards, shown or hidden by the search filter.

use leptos::prelude::*;

use crate::breeds::{BreedCard, BreedSection, CARE_LABEL, TEMPERAMENT_LABEL};
use crate::search::FilterResult;

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

#[component]
fn BreedCardView(card: BreedCard, filter: Memo<FilterResult>) -> impl IntoView {
    let id = card.id;

    view! {
        <article
            class="breed-card card"
            style:display=move || display(filter.with(|f| f.card_visible(id)))
        >
            <div class="card__body">
                <h3 class="breed-card__title">{card.title}</h3>
                <p>{card.summary}</p>
                <div class="breed-info">
                    <h4>{TEMPERAMENT_LABEL}</h4>
                    <p>{card.temperament}</p>
                    <h4>{CARE_LABEL}</h4>
                    <p>{card.care}</p>
                </div>
                <p class="suitable-for">{card.suitable_for}</p>
            </div>
        </article>
    }
}

#[component]
pub fn SectionBlock(section: BreedSection, filter: Memo<FilterResult>) -> impl IntoView {
    let id = section.id;

    view! {
        <section
            id=id
            class="breed-section"
            style:display=move || display(filter.with(|f| f.section_visible(id)))
        >
            <h2 class="section-title">{section.title}</h2>
            <div class="breed-grid">
                {section.cards.iter().map(|card| view! {
                    <BreedCardView card=*card filter=filter />
                }).collect_view()}
            </div>
        </section>
    }
}
