//! Ingredient name normalization
//!
//! Canonicalizes free-text ingredient names into deterministic matching
//! keys. The pipeline runs in a fixed order and is idempotent: feeding a
//! canonical key back in returns it unchanged.

use super::vocab::Vocabulary;

/// Normalizes raw ingredient names into stable cache/grouping keys.
#[derive(Debug, Clone, Default)]
pub struct NameNormalizer {
    vocab: Vocabulary,
}

impl NameNormalizer {
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// Canonicalize a raw name. Pure and deterministic; applying it to
    /// its own output is a no-op.
    ///
    /// Pipeline: lowercase/trim, drop parentheticals and post-comma
    /// text, collapse hyphens and whitespace, drop bare numbers and
    /// filler words, synonym replacement, strip modifiers, strip prep
    /// verbs, strip form nouns (kept when they are all that remains),
    /// normalize plural endings.
    pub fn normalize(&self, raw: &str) -> String {
        let mut s = raw.trim().to_lowercase();

        s = strip_parentheticals(&s);
        if let Some(idx) = s.find(',') {
            s.truncate(idx);
        }
        s = s.replace('-', " ");

        // Drop bare quantities ("2", "1/2", "2.5") and filler words
        // before synonym matching so multi-word keys line up.
        let s = s
            .split_whitespace()
            .filter(|t| !is_numeric_token(t))
            .filter(|t| !self.vocab.filler.contains(*t))
            .collect::<Vec<_>>()
            .join(" ");

        let s = self.apply_synonyms(&s);

        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        tokens.retain(|t| !self.vocab.modifiers.contains(*t));
        tokens.retain(|t| !self.vocab.prep_words.contains(*t));

        let without_forms: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|t| !self.is_form_noun(t))
            .collect();
        // A form noun alone still names something ("slice", "clove");
        // keep it rather than return an empty key.
        if !without_forms.is_empty() {
            tokens = without_forms;
        }

        tokens
            .iter()
            .map(|t| depluralize(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_form_noun(&self, token: &str) -> bool {
        self.vocab.form_nouns.contains(token) || self.vocab.form_nouns.contains(&depluralize(token))
    }

    fn apply_synonyms(&self, s: &str) -> String {
        let mut result = s.to_string();
        for (key, value) in &self.vocab.synonyms {
            if result.contains(key.as_str()) {
                result = replace_word_boundary(&result, key, value);
            }
        }
        result
    }
}

/// Remove matched parenthetical spans, then any stray parens.
fn strip_parentheticals(s: &str) -> String {
    let mut out = s.to_string();
    while let (Some(start), Some(_)) = (out.find('('), out.find(')')) {
        match out[start..].find(')') {
            Some(rel_end) => {
                let end = start + rel_end;
                out.replace_range(start..=end, " ");
            }
            None => break,
        }
    }
    out.chars().filter(|c| *c != '(' && *c != ')').collect()
}

/// True for tokens that are pure quantities: digits, fractions, decimals.
fn is_numeric_token(token: &str) -> bool {
    !token.is_empty()
        && token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '/' || c == '.')
}

/// Replace every word-boundary-safe occurrence of `needle`.
fn replace_word_boundary(haystack: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut i = 0;
    while let Some(pos) = haystack[i..].find(needle) {
        let start = i + pos;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        out.push_str(&haystack[i..start]);
        if before_ok && after_ok {
            out.push_str(replacement);
        } else {
            out.push_str(&haystack[start..end]);
        }
        i = end;
    }
    out.push_str(&haystack[i..]);
    out
}

/// Normalize one token's plural ending: -ies to -y, -oes to -o,
/// sibilant -es to the stem, then a trailing -s.
pub(crate) fn depluralize(token: &str) -> String {
    let len = token.len();
    if len >= 5 && token.ends_with("ies") {
        return format!("{}y", &token[..len - 3]);
    }
    if len >= 5 && token.ends_with("oes") {
        return token[..len - 2].to_string();
    }
    if len >= 4
        && ["ses", "xes", "zes", "ches", "shes"]
            .iter()
            .any(|suf| token.ends_with(suf))
    {
        return token[..len - 2].to_string();
    }
    if len > 3 && token.ends_with('s') && !token.ends_with("ss") {
        return token[..len - 1].to_string();
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> NameNormalizer {
        NameNormalizer::default()
    }

    #[test]
    fn test_garlic_cloves_collapse_to_garlic() {
        let n = normalizer();
        assert_eq!(n.normalize("2 cloves garlic, crushed"), "garlic");
        assert_eq!(n.normalize("Garlic Cloves"), "garlic");
        assert_eq!(n.normalize("garlic"), "garlic");
    }

    #[test]
    fn test_parentheticals_and_commas_dropped() {
        let n = normalizer();
        assert_eq!(n.normalize("butter (at room temperature), softened"), "butter");
        assert_eq!(n.normalize("chicken breast, skin removed"), "chicken breast");
    }

    #[test]
    fn test_synonyms_are_word_boundary_safe() {
        let n = normalizer();
        assert_eq!(n.normalize("aubergine"), "eggplant");
        assert_eq!(n.normalize("2 aubergines"), "eggplant");
        assert_eq!(n.normalize("spring onions"), "scallion");
        // "maize" must not fire inside another word.
        assert_eq!(n.normalize("maizena"), "maizena");
    }

    #[test]
    fn test_modifiers_and_prep_words_stripped() {
        let n = normalizer();
        assert_eq!(n.normalize("fresh chopped cilantro"), "cilantro");
        assert_eq!(n.normalize("large free eggs"), "free egg");
        assert_eq!(n.normalize("finely-grated parmesan"), "finely parmesan");
    }

    #[test]
    fn test_form_noun_kept_as_identity_when_alone() {
        let n = normalizer();
        assert_eq!(n.normalize("2 tins"), "tin");
        assert_eq!(n.normalize("tin of tomatoes"), "tomato");
        assert_eq!(n.normalize("bacon rashers"), "bacon");
    }

    #[test]
    fn test_plural_rules() {
        assert_eq!(depluralize("tomatoes"), "tomato");
        assert_eq!(depluralize("berries"), "berry");
        assert_eq!(depluralize("radishes"), "radish");
        assert_eq!(depluralize("boxes"), "box");
        assert_eq!(depluralize("eggs"), "egg");
        assert_eq!(depluralize("peas"), "pea");
        // Short words and -ss endings are left alone.
        assert_eq!(depluralize("gas"), "gas");
        assert_eq!(depluralize("swiss"), "swiss");
    }

    #[test]
    fn test_idempotence_over_corpus() {
        let n = normalizer();
        let corpus = [
            "2 cloves garlic, crushed",
            "Fresh Basil Leaves (torn)",
            "1/2 cup extra-virgin olive oil",
            "spring onions",
            "3 large eggs, lightly beaten",
            "tin of chopped tomatoes",
            "minced beef",
            "asparagus",
            "caster sugar",
            "2 tins",
            "",
            "  ",
        ];
        for raw in corpus {
            let once = n.normalize(raw);
            let twice = n.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let n = normalizer();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   "), "");
    }
}
