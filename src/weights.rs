//! Item weight estimation
//!
//! Maps a normalized ingredient name to an expected gram weight for
//! generic count units ("2 whole onions", "3 eggs"). Lookup never
//! fails; `None` means the caller applies the default item mass.

/// Curated per-item weights in grams, keyed by normalized name.
/// Specific entries ("cherry tomato") must win over generic ones
/// ("tomato"), which the longest-key-first substring pass guarantees.
const ITEM_WEIGHTS: &[(&str, f64)] = &[
    ("egg", 50.0),
    ("egg yolk", 18.0),
    ("egg white", 33.0),
    ("cherry tomato", 15.0),
    ("plum tomato", 60.0),
    ("tomato", 125.0),
    ("garlic", 5.0),
    ("onion", 150.0),
    ("red onion", 140.0),
    ("shallot", 40.0),
    ("scallion", 15.0),
    ("leek", 90.0),
    ("potato", 170.0),
    ("sweet potato", 200.0),
    ("carrot", 60.0),
    ("celery", 40.0),
    ("bell pepper", 120.0),
    ("jalapeno", 14.0),
    ("chili", 15.0),
    ("mushroom", 20.0),
    ("portobello mushroom", 85.0),
    ("zucchini", 200.0),
    ("eggplant", 450.0),
    ("cucumber", 300.0),
    ("avocado", 200.0),
    ("apple", 180.0),
    ("banana", 120.0),
    ("orange", 130.0),
    ("lemon", 100.0),
    ("lime", 70.0),
    ("pear", 180.0),
    ("peach", 150.0),
    ("chicken breast", 175.0),
    ("chicken thigh", 120.0),
    ("bacon", 28.0),
    ("tortilla", 45.0),
];

/// Descriptive words stripped from the ends of a name before retrying
/// the lookup ("boneless skinless chicken breast").
const DESCRIPTORS: &[&str] = &[
    "fresh", "frozen", "organic", "boneless", "skinless", "raw", "cooked",
];

/// Reverse containment is only tried for inputs of at least this many
/// characters; shorter inputs match too loosely. Inherited threshold —
/// keep it.
const MIN_REVERSE_LEN: usize = 3;

/// Estimates per-item gram weights for count-unit ingredient lines.
#[derive(Debug, Clone)]
pub struct WeightEstimator {
    /// Sorted by descending key length at construction; never rely on
    /// map iteration order.
    entries: Vec<(String, f64)>,
}

impl WeightEstimator {
    pub fn new(mut entries: Vec<(String, f64)>) -> Self {
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// The built-in curated table.
    pub fn embedded() -> Self {
        Self::new(
            ITEM_WEIGHTS
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        )
    }

    /// Expected grams for one item of the named ingredient.
    ///
    /// Tries, in order: exact match, exact match after descriptor
    /// stripping, substring over the table longest-key-first, and
    /// reverse containment (a key containing the input) as a last
    /// resort. Returns None when nothing matches.
    pub fn estimate_grams(&self, name: &str) -> Option<f64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Some(grams) = self.exact(name) {
            return Some(grams);
        }

        let stripped = strip_descriptors(name);
        if stripped != name {
            if let Some(grams) = self.exact(&stripped) {
                return Some(grams);
            }
        }

        // Longest key first: "cherry tomato" beats "tomato".
        for (key, grams) in &self.entries {
            if name.contains(key.as_str()) {
                return Some(*grams);
            }
        }

        if name.len() >= MIN_REVERSE_LEN {
            // Shortest key first here: the most generic entry containing
            // the input is the safest guess.
            for (key, grams) in self.entries.iter().rev() {
                if key.contains(name) {
                    return Some(*grams);
                }
            }
        }

        None
    }

    fn exact(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, grams)| *grams)
    }
}

impl Default for WeightEstimator {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Strip descriptor words from the front and back of a name.
fn strip_descriptors(name: &str) -> String {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    while let Some(first) = tokens.first() {
        if DESCRIPTORS.contains(first) {
            tokens.remove(0);
        } else {
            break;
        }
    }
    while let Some(last) = tokens.last() {
        if DESCRIPTORS.contains(last) {
            tokens.pop();
        } else {
            break;
        }
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let w = WeightEstimator::embedded();
        assert_eq!(w.estimate_grams("egg"), Some(50.0));
        assert_eq!(w.estimate_grams("lemon"), Some(100.0));
    }

    #[test]
    fn test_specific_beats_generic_via_longest_key() {
        let w = WeightEstimator::embedded();
        assert_eq!(w.estimate_grams("cherry tomato"), Some(15.0));
        assert_eq!(w.estimate_grams("tomato"), Some(125.0));
        // Substring pass: longest key containing match wins.
        assert_eq!(w.estimate_grams("ripe cherry tomato halves"), Some(15.0));
    }

    #[test]
    fn test_descriptor_stripping() {
        let w = WeightEstimator::embedded();
        assert_eq!(w.estimate_grams("boneless skinless chicken breast"), Some(175.0));
        assert_eq!(w.estimate_grams("frozen banana"), Some(120.0));
    }

    #[test]
    fn test_reverse_containment_for_short_names() {
        let w = WeightEstimator::new(vec![("egg white".to_string(), 33.0)]);
        // "egg" is not a key but "egg white" contains it.
        assert_eq!(w.estimate_grams("egg"), Some(33.0));
        // Below the length gate nothing matches.
        assert_eq!(w.estimate_grams("eg"), None);
    }

    #[test]
    fn test_plural_inputs_resolve_through_normalizer() {
        let n = crate::naming::NameNormalizer::default();
        let w = WeightEstimator::embedded();
        assert_eq!(w.estimate_grams(&n.normalize("cherry tomatoes")), Some(15.0));
        assert_eq!(w.estimate_grams(&n.normalize("eggs")), Some(50.0));
    }

    #[test]
    fn test_no_match_returns_none() {
        let w = WeightEstimator::embedded();
        assert_eq!(w.estimate_grams("saffron threads"), None);
        assert_eq!(w.estimate_grams(""), None);
    }

    #[test]
    fn test_sort_is_stable_and_longest_first() {
        let w = WeightEstimator::embedded();
        for pair in w.entries.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
    }
}
