// TF-IDF text transform for concern matching
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::vector::SparseVector;

/// A fitted TF-IDF transform: term vocabulary plus per-column smoothed
/// inverse document frequencies. Fitting happens offline when the catalog
/// snapshot is built; at query time the transform only encodes text into
/// the same feature space as the precomputed rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TfidfVectorizer {
    // term -> column index
    vocabulary: HashMap<String, u32, RandomState>,
    // column index -> idf weight
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Tokenize text for indexing and query encoding.
    /// Uses lowercase normalization and removes punctuation.
    #[inline]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|s| s.len() > 1)
            .collect()
    }

    /// Fit the vocabulary and idf weights over a document collection.
    ///
    /// Columns are assigned in lexicographic term order so that fitting the
    /// same collection always yields the same feature space. Idf uses the
    /// smoothed form `ln((1 + n) / (1 + df)) + 1`.
    #[must_use]
    pub fn fit(docs: &[&str]) -> Self {
        let mut dfs: HashMap<String, u32, RandomState> = HashMap::default();

        for doc in docs {
            let mut tokens = Self::tokenize(doc);
            tokens.sort();
            tokens.dedup();
            for token in tokens {
                *dfs.entry(token).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = dfs.keys().cloned().collect();
        terms.sort();

        let n_docs = docs.len() as f32;
        let mut vocabulary =
            HashMap::with_capacity_and_hasher(terms.len(), RandomState::new());
        let mut idf = Vec::with_capacity(terms.len());

        for (col, term) in terms.into_iter().enumerate() {
            let df = dfs[&term] as f32;
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, col as u32);
        }

        Self { vocabulary, idf }
    }

    /// Encode text into the fitted feature space.
    ///
    /// Out-of-vocabulary terms are ignored; rows are L2-normalized. Text
    /// with no known terms encodes to the zero vector, never an error.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut term_freqs: HashMap<u32, f32, RandomState> = HashMap::default();
        for token in Self::tokenize(text) {
            if let Some(&col) = self.vocabulary.get(&token) {
                *term_freqs.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let entries: Vec<(u32, f32)> = term_freqs
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col as usize]))
            .collect();

        let mut vector = SparseVector::from_entries(entries);
        vector.normalize();
        vector
    }

    /// Fit over a collection and encode every document in one pass.
    #[must_use]
    pub fn fit_transform(docs: &[&str]) -> (Self, Vec<SparseVector>) {
        let vectorizer = Self::fit(docs);
        let vectors = docs.iter().map(|doc| vectorizer.transform(doc)).collect();
        (vectorizer, vectors)
    }

    /// Number of terms in the fitted vocabulary.
    #[inline]
    #[must_use]
    pub fn vocab_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips() {
        let tokens = TfidfVectorizer::tokenize("Hydration, ACNE & dark-spots!");
        assert_eq!(tokens, vec!["hydration", "acne", "dark", "spots"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = TfidfVectorizer::tokenize("a B cc");
        assert_eq!(tokens, vec!["cc"]);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = vec!["hydration and brightening", "acne and oil control"];
        let v1 = TfidfVectorizer::fit(&docs);
        let v2 = TfidfVectorizer::fit(&docs);
        assert_eq!(v1, v2);
        assert_eq!(v1.vocab_len(), 6);
    }

    #[test]
    fn test_transform_matches_own_document_best() {
        let docs = vec![
            "deep hydration for dry skin",
            "acne and blemish control",
            "sun protection and brightening",
        ];
        let (vectorizer, rows) = TfidfVectorizer::fit_transform(&docs);

        let query = vectorizer.transform("hydration");
        let sims: Vec<f32> = rows.iter().map(|r| query.cosine_similarity(r)).collect();

        assert!(sims[0] > sims[1]);
        assert!(sims[0] > sims[2]);
        assert_eq!(sims[1], 0.0);
    }

    #[test]
    fn test_out_of_vocabulary_is_zero_vector() {
        let vectorizer = TfidfVectorizer::fit(&["hydration", "acne"]);
        let query = vectorizer.transform("completely unrelated words");
        assert!(query.is_zero());
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let (_, rows) = TfidfVectorizer::fit_transform(&["hydration brightening", "acne"]);
        for row in rows {
            assert!((row.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        // "glow" appears in one document, "skin" in all three
        let docs = vec!["glow skin", "matte skin", "clear skin"];
        let vectorizer = TfidfVectorizer::fit(&docs);

        let row = vectorizer.transform("glow skin");
        let weights: Vec<(u32, f32)> = row.iter().collect();
        let glow_col = weights.iter().map(|(_, w)| *w).fold(f32::MIN, f32::max);
        let skin_col = weights.iter().map(|(_, w)| *w).fold(f32::MAX, f32::min);
        assert!(glow_col > skin_col);
    }
}
