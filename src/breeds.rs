//! Breed Catalog
//!
//! Static breed sections rendered on the page and searched by `search`.

/// Headings rendered above the temperament and care lines
pub const TEMPERAMENT_LABEL: &str = "Характер";
pub const CARE_LABEL: &str = "Уход";

/// One breed summary card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreedCard {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub temperament: &'static str,
    pub care: &'static str,
    pub suitable_for: &'static str,
}

impl BreedCard {
    /// Every visible text of the card, in render order
    pub fn full_text(&self) -> String {
        [
            self.title,
            self.summary,
            TEMPERAMENT_LABEL,
            self.temperament,
            CARE_LABEL,
            self.care,
            self.suitable_for,
        ]
        .join(" ")
    }
}

/// A group of breed cards with its own nav button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreedSection {
    pub id: &'static str,
    pub title: &'static str,
    pub cards: &'static [BreedCard],
}

pub static CATALOG: &[BreedSection] = &[
    BreedSection {
        id: "shorthair",
        title: "Короткошёрстные",
        cards: &[
            BreedCard {
                id: "british-shorthair",
                title: "Британская короткошёрстная",
                summary: "Плотная плюшевая шерсть, круглая морда и медные глаза.",
                temperament: "Спокойная, независимая, не навязчивая.",
                care: "Вычёсывать раз в неделю, следить за весом.",
                suitable_for: "Подходит для квартиры и занятых хозяев.",
            },
            BreedCard {
                id: "scottish-fold",
                title: "Шотландская вислоухая",
                summary: "Узнаётся по загнутым вперёд ушам и совиному взгляду.",
                temperament: "Ласковая, общительная, любит людей.",
                care: "Регулярно чистить уши, наблюдать за суставами.",
                suitable_for: "Подходит для семей с детьми.",
            },
            BreedCard {
                id: "abyssinian",
                title: "Абиссинская",
                summary: "Тикированная шерсть тёплого рыжего оттенка.",
                temperament: "Активная, любопытная, игривая.",
                care: "Нужны игрушки и когтеточки, шерсть почти не линяет.",
                suitable_for: "Подходит для активных хозяев.",
            },
        ],
    },
    BreedSection {
        id: "longhair",
        title: "Длинношёрстные",
        cards: &[
            BreedCard {
                id: "maine-coon",
                title: "Мейн-кун",
                summary: "Одна из самых крупных пород, кисточки на ушах.",
                temperament: "Дружелюбный великан, ладит с собаками.",
                care: "Вычёсывать два-три раза в неделю.",
                suitable_for: "Подходит для просторного дома.",
            },
            BreedCard {
                id: "persian",
                title: "Персидская",
                summary: "Длинная шелковистая шерсть и короткий нос.",
                temperament: "Тихая, размеренная, любит уют.",
                care: "Ежедневное вычёсывание и уход за глазами.",
                suitable_for: "Подходит для спокойной обстановки.",
            },
            BreedCard {
                id: "siberian",
                title: "Сибирская",
                summary: "Густой водоотталкивающий подшёрсток.",
                temperament: "Смелая, преданная, отличный охотник.",
                care: "Вычёсывать в период линьки.",
                suitable_for: "Часто подходит аллергикам.",
            },
        ],
    },
    BreedSection {
        id: "hairless",
        title: "Бесшёрстные",
        cards: &[
            BreedCard {
                id: "canadian-sphynx",
                title: "Канадский сфинкс",
                summary: "Кожа без шерсти, большие уши и тёплое тело.",
                temperament: "Очень контактный, не любит одиночества.",
                care: "Купать раз в неделю, держать в тепле.",
                suitable_for: "Подходит для хозяев, которые часто дома.",
            },
            BreedCard {
                id: "don-sphynx",
                title: "Донской сфинкс",
                summary: "Складчатая кожа и крепкое телосложение.",
                temperament: "Ласковый, терпеливый, умный.",
                care: "Защищать от солнца и сквозняков.",
                suitable_for: "Подходит для семей с детьми.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let sections: HashSet<_> = CATALOG.iter().map(|s| s.id).collect();
        assert_eq!(sections.len(), CATALOG.len());

        let cards: Vec<_> = CATALOG.iter().flat_map(|s| s.cards).map(|c| c.id).collect();
        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), cards.len());
    }

    #[test]
    fn test_full_text_contains_every_field() {
        let card = &CATALOG[0].cards[0];
        let text = card.full_text();
        assert!(text.starts_with(card.title));
        assert!(text.contains(card.temperament));
        assert!(text.contains(TEMPERAMENT_LABEL));
        assert!(text.contains(CARE_LABEL));
        assert!(text.ends_with(card.suitable_for));
    }
}
