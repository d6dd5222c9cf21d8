//! UI Components
//!
//! Reusable Leptos components.

mod booking_form;
mod breed_section;
mod cat_card;
mod cat_list;
mod no_results;
mod search_bar;
mod section_nav;

pub use booking_form::BookingForm;
pub use breed_section::SectionBlock;
pub use cat_card::CatCard;
pub use cat_list::CatList;
pub use no_results::NoResults;
pub use search_bar::SearchBar;
pub use section_nav::SectionNav;
