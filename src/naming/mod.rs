//! Ingredient name normalization module
//!
//! Deterministic canonical keys plus a similarity score for fuzzy
//! grouping.

pub mod normalizer;
pub mod similarity;
pub mod vocab;

pub use normalizer::NameNormalizer;
pub use similarity::MatchConfidence;
pub use vocab::Vocabulary;
