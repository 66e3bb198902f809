use serde::Serialize;

use crate::i18n::Locale;
use crate::random::{shuffle, RandomSource};

/// Number of fashion items a report recommends.
pub const FASHION_PICKS: usize = 3;

#[derive(Debug, Serialize)]
pub struct PersonalColor {
    pub name: &'static str,
    pub description: &'static str,
}

pub static PERSONAL_COLORS: [PersonalColor; 4] = [
    PersonalColor {
        name: "personalColorSpringName",
        description: "personalColorSpringDesc",
    },
    PersonalColor {
        name: "personalColorSummerName",
        description: "personalColorSummerDesc",
    },
    PersonalColor {
        name: "personalColorAutumnName",
        description: "personalColorAutumnDesc",
    },
    PersonalColor {
        name: "personalColorWinterName",
        description: "personalColorWinterDesc",
    },
];

pub static OVERALL_IMPRESSIONS: [&str; 4] = [
    "overallImpression1",
    "overallImpression2",
    "overallImpression3",
    "overallImpression4",
];

pub static FASHION_ITEMS: [&str; 9] = [
    "fashionItem1",
    "fashionItem2",
    "fashionItem3",
    "fashionItem4",
    "fashionItem5",
    "fashionItem6",
    "fashionItem7",
    "fashionItem8",
    "fashionItem9",
];

pub static STYLING_TIPS: [&str; 5] = [
    "stylingTip1",
    "stylingTip2",
    "stylingTip3",
    "stylingTip4",
    "stylingTip5",
];

pub const SECTION_OVERALL_IMPRESSION: &str = "reportSectionOverallImpression";
pub const SECTION_PERSONAL_COLOR: &str = "reportSectionPersonalColorDiagnosis";
pub const SECTION_FASHION_ITEMS: &str = "reportSectionRecommendedFashionItems";
pub const SECTION_STYLING_TIP: &str = "reportSectionTodaysStylingTip";

/// One set of draws, held as translation keys so it can be rendered in any
/// language without drawing again.
#[derive(Debug, Clone, Serialize)]
pub struct StyleReport {
    pub personal_color: &'static PersonalColor,
    pub impression: &'static str,
    pub fashion_items: [&'static str; FASHION_PICKS],
    pub styling_tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionContent {
    Text { text: String },
    Diagnosis { name: String, description: String },
    Items { items: Vec<String> },
}

impl SectionContent {
    pub fn is_empty(&self) -> bool {
        match self {
            SectionContent::Text { text } => text.is_empty(),
            SectionContent::Diagnosis { name, description } => {
                name.is_empty() || description.is_empty()
            }
            SectionContent::Items { items } => {
                items.is_empty() || items.iter().any(|i| i.is_empty())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub key: &'static str,
    pub label: String,
    pub content: SectionContent,
}

pub fn pick_fashion_items(rng: &mut impl RandomSource) -> [&'static str; FASHION_PICKS] {
    let mut items = FASHION_ITEMS;
    shuffle(&mut items, rng);
    [items[0], items[1], items[2]]
}

pub fn generate_report(rng: &mut impl RandomSource) -> StyleReport {
    let personal_color = &PERSONAL_COLORS[rng.pick_index(PERSONAL_COLORS.len())];
    let impression = OVERALL_IMPRESSIONS[rng.pick_index(OVERALL_IMPRESSIONS.len())];
    let fashion_items = pick_fashion_items(rng);
    let styling_tip = STYLING_TIPS[rng.pick_index(STYLING_TIPS.len())];
    StyleReport {
        personal_color,
        impression,
        fashion_items,
        styling_tip,
    }
}

impl StyleReport {
    /// Localized sections in display order.
    pub fn sections(&self, locale: &Locale) -> Vec<ReportSection> {
        let text = |key: &str| locale.get(key).into_owned();
        vec![
            ReportSection {
                key: SECTION_OVERALL_IMPRESSION,
                label: text(SECTION_OVERALL_IMPRESSION),
                content: SectionContent::Text {
                    text: text(self.impression),
                },
            },
            ReportSection {
                key: SECTION_PERSONAL_COLOR,
                label: text(SECTION_PERSONAL_COLOR),
                content: SectionContent::Diagnosis {
                    name: text(self.personal_color.name),
                    description: text(self.personal_color.description),
                },
            },
            ReportSection {
                key: SECTION_FASHION_ITEMS,
                label: text(SECTION_FASHION_ITEMS),
                content: SectionContent::Items {
                    items: self.fashion_items.iter().map(|&k| text(k)).collect(),
                },
            },
            ReportSection {
                key: SECTION_STYLING_TIP,
                label: text(SECTION_STYLING_TIP),
                content: SectionContent::Text {
                    text: text(self.styling_tip),
                },
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn zero_source_picks_first_entries() {
        let report = generate_report(&mut || 0.0);
        assert_eq!(report.personal_color.name, "personalColorSpringName");
        assert_eq!(report.impression, "overallImpression1");
        assert_eq!(
            report.fashion_items,
            ["fashionItem1", "fashionItem2", "fashionItem3"]
        );
        assert_eq!(report.styling_tip, "stylingTip1");
    }

    #[test]
    fn top_of_range_picks_last_entries() {
        let report = generate_report(&mut || 0.999_999);
        assert_eq!(report.personal_color.name, "personalColorWinterName");
        assert_eq!(report.impression, "overallImpression4");
        assert_eq!(report.styling_tip, "stylingTip5");
    }

    #[test]
    fn fashion_items_are_distinct() {
        let mut rng = RngSource::from_seed(Some(11));
        for _ in 0..500 {
            let items = pick_fashion_items(&mut rng);
            assert!(items.iter().all(|i| FASHION_ITEMS.contains(i)));
            assert_ne!(items[0], items[1]);
            assert_ne!(items[0], items[2]);
            assert_ne!(items[1], items[2]);
        }
    }

    #[test]
    fn every_item_can_be_drawn() {
        let mut rng = RngSource::from_seed(Some(5));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.extend(pick_fashion_items(&mut rng));
        }
        assert_eq!(seen.len(), FASHION_ITEMS.len());
    }

    #[test]
    fn sections_follow_fixed_order() {
        let locale = Locale::bundled("en").unwrap();
        let sections = generate_report(&mut || 0.0).sections(&locale);
        let keys: Vec<_> = sections.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            [
                SECTION_OVERALL_IMPRESSION,
                SECTION_PERSONAL_COLOR,
                SECTION_FASHION_ITEMS,
                SECTION_STYLING_TIP
            ]
        );
        assert_eq!(sections[0].label, "Overall Impression");
        assert_eq!(
            sections[2].content,
            SectionContent::Items {
                items: vec![
                    "A crisp white shirt".into(),
                    "Straight-fit denim jeans".into(),
                    "A camel trench coat".into(),
                ]
            }
        );
    }
}
