//! Heuristic nutrition estimator
//!
//! Resolution of last resort: classifies a normalized name against an
//! ordered list of category keyword groups and applies that category's
//! representative per-100g profile. Total function, never fails.

use serde::{Deserialize, Serialize};

use crate::models::NutrientVector;

/// Broad food category for the fallback profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    OilFat,
    SaucePaste,
    SpiceHerb,
    Vegetable,
    Fruit,
    Meat,
    FishSeafood,
    Generic,
}

/// One predicate/profile pair. The list order is the matching order.
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub category: FoodCategory,
    pub keywords: &'static [&'static str],
    pub per_100g: NutrientVector,
}

/// Category-keyword fallback estimator with an ordered profile list.
#[derive(Debug, Clone)]
pub struct CategoryEstimator {
    profiles: Vec<CategoryProfile>,
    generic: NutrientVector,
}

impl CategoryEstimator {
    pub fn new(profiles: Vec<CategoryProfile>, generic: NutrientVector) -> Self {
        Self { profiles, generic }
    }

    /// The built-in profiles, ordered most-specific-first.
    pub fn embedded() -> Self {
        let profiles = vec![
            CategoryProfile {
                category: FoodCategory::OilFat,
                keywords: &[
                    "oil", "butter", "lard", "ghee", "margarine", "fat", "shortening",
                ],
                per_100g: NutrientVector::new(884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 2.0),
            },
            CategoryProfile {
                category: FoodCategory::SaucePaste,
                keywords: &[
                    "sauce",
                    "paste",
                    "ketchup",
                    "mayonnaise",
                    "mustard",
                    "dressing",
                    "pesto",
                    "salsa",
                ],
                per_100g: NutrientVector::new(120.0, 2.0, 12.0, 7.0, 1.0, 8.0, 800.0),
            },
            CategoryProfile {
                category: FoodCategory::SpiceHerb,
                keywords: &[
                    "spice",
                    "herb",
                    "seasoning",
                    "salt",
                    "cumin",
                    "paprika",
                    "oregano",
                    "basil",
                    "thyme",
                    "rosemary",
                    "cinnamon",
                    "nutmeg",
                    "turmeric",
                    "saffron",
                    "peppercorn",
                ],
                per_100g: NutrientVector::new(300.0, 10.0, 50.0, 10.0, 25.0, 3.0, 50.0),
            },
            CategoryProfile {
                category: FoodCategory::Vegetable,
                keywords: &[
                    "onion",
                    "garlic",
                    "carrot",
                    "broccoli",
                    "cauliflower",
                    "spinach",
                    "lettuce",
                    "kale",
                    "cabbage",
                    "pea",
                    "bean",
                    "lentil",
                    "pepper",
                    "tomato",
                    "potato",
                    "zucchini",
                    "eggplant",
                    "mushroom",
                    "celery",
                    "cucumber",
                    "leek",
                    "vegetable",
                ],
                per_100g: NutrientVector::new(35.0, 1.5, 7.0, 0.3, 2.5, 3.0, 15.0),
            },
            CategoryProfile {
                category: FoodCategory::Fruit,
                keywords: &[
                    "apple",
                    "banana",
                    "orange",
                    "lemon",
                    "lime",
                    "berry",
                    "grape",
                    "mango",
                    "peach",
                    "pear",
                    "plum",
                    "melon",
                    "pineapple",
                    "cherry",
                    "apricot",
                    "fruit",
                ],
                per_100g: NutrientVector::new(55.0, 0.7, 14.0, 0.2, 2.0, 10.0, 2.0),
            },
            CategoryProfile {
                category: FoodCategory::Meat,
                keywords: &[
                    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "ham",
                    "duck", "veal", "steak", "mince", "meat",
                ],
                per_100g: NutrientVector::new(220.0, 22.0, 0.0, 14.0, 0.0, 0.0, 80.0),
            },
            CategoryProfile {
                category: FoodCategory::FishSeafood,
                keywords: &[
                    "fish", "salmon", "tuna", "cod", "shrimp", "crab", "lobster", "anchovy",
                    "sardine", "mackerel", "haddock", "trout", "seafood",
                ],
                per_100g: NutrientVector::new(150.0, 20.0, 0.0, 7.0, 0.0, 0.0, 90.0),
            },
        ];
        let generic = NutrientVector::new(150.0, 5.0, 18.0, 6.0, 1.5, 5.0, 150.0);
        Self::new(profiles, generic)
    }

    /// Classify a normalized name. First matching group wins; anything
    /// unmatched is Generic.
    pub fn classify(&self, name: &str) -> FoodCategory {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        for profile in &self.profiles {
            for keyword in profile.keywords {
                // Suffix matching keeps compounds like "strawberry" or
                // "applesauce" in the right group; short keywords match
                // exactly so "oil" cannot fire inside "foil".
                let suffix_ok = keyword.len() >= 5;
                if tokens
                    .iter()
                    .any(|t| *t == *keyword || (suffix_ok && t.ends_with(*keyword)))
                {
                    return profile.category;
                }
            }
        }
        FoodCategory::Generic
    }

    /// Estimate nutrients for `grams` of the named ingredient. Never
    /// fails; unmatched names get the generic average profile.
    pub fn estimate(&self, name: &str, grams: f64) -> NutrientVector {
        let category = self.classify(name);
        let per_100g = self
            .profiles
            .iter()
            .find(|p| p.category == category)
            .map(|p| &p.per_100g)
            .unwrap_or(&self.generic);
        per_100g.scale(grams / 100.0)
    }
}

impl Default for CategoryEstimator {
    fn default() -> Self {
        Self::embedded()
    }
}
