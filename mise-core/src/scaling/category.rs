//! Ingredient categorization for smart scaling.
//!
//! Maps ingredient names to a closed set of culinary categories by keyword
//! containment. A short list of overrides runs first so that, for example,
//! "red bell pepper" lands in vegetables rather than spices. The generic
//! keyword table is loaded from `data/category_keywords.json` at compile time
//! and scanned in file order; the first category with a matching keyword wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Culinary category that decides how an ingredient scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Spice,
    Herb,
    Salt,
    Sugar,
    Fat,
    Liquid,
    Flour,
    Leavening,
    Acid,
    Dairy,
    Egg,
    Vegetable,
    Meat,
    Other,
}

impl IngredientCategory {
    pub const ALL: &'static [IngredientCategory] = &[
        IngredientCategory::Spice,
        IngredientCategory::Herb,
        IngredientCategory::Salt,
        IngredientCategory::Sugar,
        IngredientCategory::Fat,
        IngredientCategory::Liquid,
        IngredientCategory::Flour,
        IngredientCategory::Leavening,
        IngredientCategory::Acid,
        IngredientCategory::Dairy,
        IngredientCategory::Egg,
        IngredientCategory::Vegetable,
        IngredientCategory::Meat,
        IngredientCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientCategory::Spice => "spice",
            IngredientCategory::Herb => "herb",
            IngredientCategory::Salt => "salt",
            IngredientCategory::Sugar => "sugar",
            IngredientCategory::Fat => "fat",
            IngredientCategory::Liquid => "liquid",
            IngredientCategory::Flour => "flour",
            IngredientCategory::Leavening => "leavening",
            IngredientCategory::Acid => "acid",
            IngredientCategory::Dairy => "dairy",
            IngredientCategory::Egg => "egg",
            IngredientCategory::Vegetable => "vegetable",
            IngredientCategory::Meat => "meat",
            IngredientCategory::Other => "other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for IngredientCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IngredientCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown ingredient category: {s}"))
    }
}

/// A rule checked before the keyword table.
struct CategoryOverride {
    contains: &'static str,
    unless: Option<&'static str>,
    category: IngredientCategory,
}

/// Peppers that are vegetables, not the spice.
const OVERRIDES: &[CategoryOverride] = &[
    CategoryOverride {
        contains: "bell pepper",
        unless: None,
        category: IngredientCategory::Vegetable,
    },
    CategoryOverride {
        contains: "sweet pepper",
        unless: None,
        category: IngredientCategory::Vegetable,
    },
    CategoryOverride {
        contains: "red pepper",
        unless: Some("pepper flakes"),
        category: IngredientCategory::Vegetable,
    },
    CategoryOverride {
        contains: "green pepper",
        unless: Some("peppercorn"),
        category: IngredientCategory::Vegetable,
    },
];

/// The raw JSON structure for the keyword data file.
#[derive(Deserialize)]
struct KeywordData {
    categories: Vec<CategoryKeywords>,
}

#[derive(Deserialize)]
struct CategoryKeywords {
    category: IngredientCategory,
    keywords: Vec<String>,
}

/// Keyword table in scan order.
static KEYWORDS: LazyLock<Vec<CategoryKeywords>> = LazyLock::new(|| {
    let json = include_str!("../../data/category_keywords.json");
    let data: KeywordData =
        serde_json::from_str(json).expect("Failed to parse category_keywords.json");
    data.categories
});

fn check_overrides(lower: &str) -> Option<IngredientCategory> {
    OVERRIDES
        .iter()
        .find(|rule| {
            lower.contains(rule.contains) && !rule.unless.is_some_and(|u| lower.contains(u))
        })
        .map(|rule| rule.category)
}

fn check_keywords(lower: &str) -> Option<IngredientCategory> {
    KEYWORDS
        .iter()
        .find(|entry| entry.keywords.iter().any(|k| lower.contains(k.as_str())))
        .map(|entry| entry.category)
}

/// Categorize an ingredient by name.
///
/// Matching is case-insensitive substring containment. Never fails; names
/// nothing recognizes are [`IngredientCategory::Other`].
pub fn categorize(name: &str) -> IngredientCategory {
    let lower = name.to_lowercase();
    check_overrides(&lower)
        .or_else(|| check_keywords(&lower))
        .unwrap_or(IngredientCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_ingredients() {
        assert_eq!(categorize("black pepper"), IngredientCategory::Spice);
        assert_eq!(categorize("Fresh Basil"), IngredientCategory::Herb);
        assert_eq!(categorize("kosher salt"), IngredientCategory::Salt);
        assert_eq!(categorize("brown sugar"), IngredientCategory::Sugar);
        assert_eq!(categorize("olive oil"), IngredientCategory::Fat);
        assert_eq!(categorize("chicken stock"), IngredientCategory::Liquid);
        assert_eq!(categorize("all-purpose flour"), IngredientCategory::Flour);
        assert_eq!(categorize("baking powder"), IngredientCategory::Leavening);
        assert_eq!(categorize("red wine vinegar"), IngredientCategory::Liquid);
        assert_eq!(categorize("lemon zest"), IngredientCategory::Acid);
        assert_eq!(categorize("whole milk"), IngredientCategory::Dairy);
        assert_eq!(categorize("Eggs"), IngredientCategory::Egg);
        assert_eq!(categorize("yellow onion"), IngredientCategory::Vegetable);
        assert_eq!(categorize("ground beef"), IngredientCategory::Meat);
    }

    #[test]
    fn test_first_table_entry_wins() {
        // "garlic powder" is a spice keyword, plain "garlic" a vegetable one
        assert_eq!(categorize("garlic powder"), IngredientCategory::Spice);
        assert_eq!(categorize("garlic"), IngredientCategory::Vegetable);
        // leavening is scanned before dairy
        assert_eq!(categorize("cream of tartar"), IngredientCategory::Leavening);
        assert_eq!(categorize("heavy cream"), IngredientCategory::Dairy);
    }

    #[test]
    fn test_pepper_overrides() {
        assert_eq!(categorize("red bell pepper"), IngredientCategory::Vegetable);
        assert_eq!(categorize("Sweet Peppers"), IngredientCategory::Vegetable);
        assert_eq!(categorize("roasted red pepper"), IngredientCategory::Vegetable);
        assert_eq!(categorize("green pepper"), IngredientCategory::Vegetable);
    }

    #[test]
    fn test_pepper_override_exceptions() {
        assert_eq!(categorize("red pepper flakes"), IngredientCategory::Spice);
        assert_eq!(categorize("green peppercorns"), IngredientCategory::Spice);
        assert_eq!(categorize("white pepper"), IngredientCategory::Spice);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(categorize("xyzfoobar123"), IngredientCategory::Other);
        assert_eq!(categorize(""), IngredientCategory::Other);
        assert_eq!(categorize("rolled oats"), IngredientCategory::Other);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in IngredientCategory::ALL {
            assert_eq!(category.as_str().parse::<IngredientCategory>(), Ok(*category));
        }
        assert!("spices".parse::<IngredientCategory>().is_err());
    }

    #[test]
    fn test_keyword_table_covers_every_category_but_other() {
        let listed: Vec<IngredientCategory> = KEYWORDS.iter().map(|e| e.category).collect();
        assert_eq!(listed, IngredientCategory::ALL[..IngredientCategory::ALL.len() - 1]);
    }
}
