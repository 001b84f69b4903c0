//! Default vocabulary tables for name normalization
//!
//! Injected into `NameNormalizer` at construction so tests can substitute
//! smaller tables. Synonym keys carry their plural variants explicitly:
//! synonym replacement runs before plural normalization, and every
//! canonical value must be a fixed point of the full pipeline.

use std::collections::HashSet;

/// Regional and alternate spellings mapped to one canonical form.
/// Applied longest-match-first with word-boundary-safe replacement.
const SYNONYMS: &[(&str, &str)] = &[
    ("bicarbonate of soda", "baking soda"),
    ("garbanzo beans", "chickpea"),
    ("garbanzo bean", "chickpea"),
    ("spring onions", "scallion"),
    ("spring onion", "scallion"),
    ("caster sugar", "superfine sugar"),
    ("icing sugar", "powdered sugar"),
    ("minced beef", "beef"),
    ("beef mince", "beef"),
    ("aubergines", "eggplant"),
    ("aubergine", "eggplant"),
    ("courgettes", "zucchini"),
    ("courgette", "zucchini"),
    ("beetroots", "beet"),
    ("beetroot", "beet"),
    ("capsicums", "bell pepper"),
    ("capsicum", "bell pepper"),
    ("coriander", "cilantro"),
    ("cornflour", "cornstarch"),
    ("prawns", "shrimp"),
    ("prawn", "shrimp"),
    ("rocket", "arugula"),
    ("maize", "corn"),
];

/// Modifier adjectives: freshness, dietary claims, size. Stripped from
/// token positions; they describe state, not identity.
const MODIFIERS: &[&str] = &[
    "fresh", "frozen", "chilled", "ripe", "raw", "organic", "unsalted", "salted", "lean",
    "light", "reduced", "skimmed", "wholemeal", "large", "medium", "small", "extra", "jumbo",
    "mini", "baby",
];

/// Preparation verbs. "sliced onion" and "onion" are the same ingredient.
const PREP_WORDS: &[&str] = &[
    "sliced", "diced", "grated", "chopped", "minced", "crushed", "peeled", "shredded",
    "julienned", "quartered", "halved", "cubed", "trimmed", "rinsed", "drained", "melted",
    "softened", "beaten", "whisked", "sifted", "toasted", "roasted", "cooked", "boiled",
    "ground", "packed", "divided", "pitted", "zested", "juiced", "deseeded",
];

/// Form nouns: packaging and portion words that precede or follow the
/// real ingredient ("clove of garlic", "tin of tomatoes"). Stripped
/// unless nothing else remains, in which case the form noun is the
/// identity. Matched singular or plural.
const FORM_NOUNS: &[&str] = &[
    "clove", "slice", "tin", "can", "packet", "jar", "bunch", "sprig", "stalk", "stick",
    "head", "bag", "box", "cube", "knob", "rasher", "fillet", "sheet", "pinch", "dash",
    "handful", "drop", "sachet", "bar", "block", "wedge", "segment", "floret", "pod", "bulb",
    "piece",
];

/// Filler words dropped alongside bare numbers ("tin of tomatoes").
const FILLER: &[&str] = &["of", "a", "an", "the"];

/// The normalizer's injected configuration.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Sorted by descending key length at construction
    pub synonyms: Vec<(String, String)>,
    pub modifiers: HashSet<String>,
    pub prep_words: HashSet<String>,
    pub form_nouns: HashSet<String>,
    pub filler: HashSet<String>,
}

impl Vocabulary {
    pub fn new(
        synonyms: Vec<(String, String)>,
        modifiers: HashSet<String>,
        prep_words: HashSet<String>,
        form_nouns: HashSet<String>,
        filler: HashSet<String>,
    ) -> Self {
        let mut synonyms = synonyms;
        // Longest key first so "spring onion" wins before any shorter key
        // could touch the same text. Explicit sort, never map order.
        synonyms.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self {
            synonyms,
            modifiers,
            prep_words,
            form_nouns,
            filler,
        }
    }

    /// The built-in tables.
    pub fn embedded() -> Self {
        Self::new(
            SYNONYMS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            MODIFIERS.iter().map(|s| s.to_string()).collect(),
            PREP_WORDS.iter().map(|s| s.to_string()).collect(),
            FORM_NOUNS.iter().map(|s| s.to_string()).collect(),
            FILLER.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_sorted_longest_first() {
        let vocab = Vocabulary::embedded();
        for pair in vocab.synonyms.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
    }

    #[test]
    fn test_plural_synonym_keys_present() {
        let vocab = Vocabulary::embedded();
        let keys: Vec<&str> = vocab.synonyms.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"aubergine"));
        assert!(keys.contains(&"aubergines"));
        assert!(keys.contains(&"spring onion"));
        assert!(keys.contains(&"spring onions"));
    }
}
