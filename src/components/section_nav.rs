//! Section Navigation Component
//!
//! One button per breed section; clicking marks it active and scrolls the
//! section into view.

use leptos::prelude::*;

use crate::breeds::BreedSection;
use crate::store::{use_app_store, AppStateStoreFields};

fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::warn!("section #{} not found", id);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn SectionNav(sections: &'static [BreedSection]) -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav">
            {sections.iter().map(|section| {
                let id = section.id;
                let is_active = move || store.active_section().get() == Some(id);
                view! {
                    <button
                        class=move || if is_active() { "nav__btn active" } else { "nav__btn" }
                        data-target=id
                        on:click=move |_| {
                            *store.active_section().write() = Some(id);
                            scroll_to_section(id);
                        }
                    >
                        {section.title}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
