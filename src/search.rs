//! Breed Search
//!
//! Case-insensitive substring filter over the static breed cards.
//! Recomputed from scratch for every keystroke.

use std::collections::HashSet;

use crate::breeds::{BreedCard, BreedSection};

/// Visibility of cards and sections for one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterResult {
    pub visible_cards: HashSet<&'static str>,
    pub visible_sections: HashSet<&'static str>,
    pub show_empty_state: bool,
}

impl FilterResult {
    pub fn card_visible(&self, card_id: &str) -> bool {
        self.visible_cards.contains(card_id)
    }

    pub fn section_visible(&self, section_id: &str) -> bool {
        self.visible_sections.contains(section_id)
    }
}

/// Trim and lower-case raw input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `query` must already be normalized
pub fn card_matches(query: &str, card: &BreedCard) -> bool {
    query.is_empty()
        || card.title.to_lowercase().contains(query)
        || card.full_text().to_lowercase().contains(query)
}

pub fn filter_catalog(sections: &[BreedSection], raw_query: &str) -> FilterResult {
    let query = normalize_query(raw_query);
    let mut result = FilterResult::default();

    for section in sections {
        let mut section_has_visible = false;
        for card in section.cards {
            if card_matches(&query, card) {
                result.visible_cards.insert(card.id);
                section_has_visible = true;
            }
        }
        if query.is_empty() || section_has_visible {
            result.visible_sections.insert(section.id);
        }
    }

    result.show_empty_state = !query.is_empty() && result.visible_cards.is_empty();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::CATALOG;

    fn total_cards() -> usize {
        CATALOG.iter().map(|s| s.cards.len()).sum()
    }

    #[test]
    fn test_empty_query_shows_everything() {
        for query in ["", "   ", "\t"] {
            let result = filter_catalog(CATALOG, query);
            assert_eq!(result.visible_cards.len(), total_cards());
            assert_eq!(result.visible_sections.len(), CATALOG.len());
            assert!(!result.show_empty_state);
        }
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let result = filter_catalog(CATALOG, "МЕЙН");
        assert!(result.card_visible("maine-coon"));
        assert!(!result.card_visible("persian"));
        assert!(result.section_visible("longhair"));
        assert!(!result.section_visible("shorthair"));
        assert!(!result.show_empty_state);
    }

    #[test]
    fn test_full_text_match() {
        // Only in the care line of the Persian card
        let result = filter_catalog(CATALOG, "уход за глазами");
        assert_eq!(result.visible_cards.len(), 1);
        assert!(result.card_visible("persian"));
    }

    #[test]
    fn test_visibility_iff_substring() {
        for query in ["сфинкс", "детьми", "шерсть", "ласков", "zzz"] {
            let result = filter_catalog(CATALOG, query);
            let needle = normalize_query(query);
            for card in CATALOG.iter().flat_map(|s| s.cards) {
                let expected = card.title.to_lowercase().contains(&needle)
                    || card.full_text().to_lowercase().contains(&needle);
                assert_eq!(result.card_visible(card.id), expected, "{} / {}", query, card.id);
            }
        }
    }

    #[test]
    fn test_rendered_heading_matches_every_card() {
        let result = filter_catalog(CATALOG, "характер");
        assert_eq!(result.visible_cards.len(), total_cards());
        assert_eq!(result.visible_sections.len(), CATALOG.len());
        assert!(!result.show_empty_state);
    }

    #[test]
    fn test_section_hidden_without_visible_cards() {
        let result = filter_catalog(CATALOG, "сфинкс");
        assert!(result.section_visible("hairless"));
        assert!(!result.section_visible("shorthair"));
        assert!(!result.section_visible("longhair"));
    }

    #[test]
    fn test_no_match_shows_empty_state() {
        let result = filter_catalog(CATALOG, "динозавр");
        assert!(result.visible_cards.is_empty());
        assert!(result.visible_sections.is_empty());
        assert!(result.show_empty_state);
    }

    #[test]
    fn test_query_is_trimmed() {
        let padded = filter_catalog(CATALOG, "  сибирская ");
        let plain = filter_catalog(CATALOG, "сибирская");
        assert_eq!(padded, plain);
        assert!(plain.card_visible("siberian"));
    }
}
