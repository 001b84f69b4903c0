//! Name similarity scoring
//!
//! Fuzzy grouping score over normalized names, used by duplicate
//! flagging workflows outside this engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::normalizer::NameNormalizer;

/// Confidence band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

impl MatchConfidence {
    /// High at 0.9, medium at 0.6.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            MatchConfidence::High
        } else if score >= 0.6 {
            MatchConfidence::Medium
        } else {
            MatchConfidence::Low
        }
    }
}

impl NameNormalizer {
    /// Score two raw names in [0, 1]: 1.0 for identical normalized
    /// forms, a length ratio when one contains the other, otherwise
    /// Jaccard similarity over the normalized token sets.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let na = self.normalize(a);
        let nb = self.normalize(b);

        if na == nb {
            return 1.0;
        }
        if na.is_empty() || nb.is_empty() {
            return 0.0;
        }

        if na.contains(&nb) || nb.contains(&na) {
            let (shorter, longer) = if na.len() <= nb.len() {
                (na.len(), nb.len())
            } else {
                (nb.len(), na.len())
            };
            return shorter as f64 / longer as f64;
        }

        let ta: HashSet<&str> = na.split_whitespace().collect();
        let tb: HashSet<&str> = nb.split_whitespace().collect();
        let intersection = ta.intersection(&tb).count();
        let union = ta.union(&tb).count();
        if union == 0 {
            return 0.0;
        }
        intersection as f64 / union as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> NameNormalizer {
        NameNormalizer::default()
    }

    #[test]
    fn test_exact_after_normalization() {
        let n = normalizer();
        assert_eq!(n.similarity("Garlic Cloves", "2 cloves garlic, crushed"), 1.0);
        assert_eq!(
            MatchConfidence::from_score(n.similarity("fresh basil", "basil")),
            MatchConfidence::High
        );
    }

    #[test]
    fn test_containment_uses_length_ratio() {
        let n = normalizer();
        // "tomato" (6) inside "cherry tomato" (13)
        let score = n.similarity("tomato", "cherry tomatoes");
        assert!((score - 6.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_for_disjoint_and_partial_overlap() {
        let n = normalizer();
        assert_eq!(n.similarity("flour", "butter"), 0.0);

        // "red bell pepper" vs "green bell pepper": overlap 2 of 4 tokens.
        let score = n.similarity("red bell pepper", "green bell pepper");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_bands() {
        assert_eq!(MatchConfidence::from_score(0.95), MatchConfidence::High);
        assert_eq!(MatchConfidence::from_score(0.9), MatchConfidence::High);
        assert_eq!(MatchConfidence::from_score(0.75), MatchConfidence::Medium);
        assert_eq!(MatchConfidence::from_score(0.6), MatchConfidence::Medium);
        assert_eq!(MatchConfidence::from_score(0.3), MatchConfidence::Low);
    }

    #[test]
    fn test_symmetry() {
        let n = normalizer();
        let ab = n.similarity("smoked paprika", "sweet paprika");
        let ba = n.similarity("sweet paprika", "smoked paprika");
        assert_eq!(ab, ba);
    }
}
