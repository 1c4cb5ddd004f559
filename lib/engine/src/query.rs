//! Query types and tuning parameters for the recommendation scorer.

use glowrec_core::{ProductCategory, SkinType};
use serde::{Deserialize, Serialize};

/// Absolute price window applied by the categorical filter, in price
/// units. Part of the filter contract, not a tuning parameter.
pub const BUDGET_WINDOW: f32 = 150.0;

/// A single recommendation query as supplied by the caller. Labels are
/// free text and matched case-insensitively against the fixed
/// vocabularies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    pub skin_type: String,
    pub category: String,
    pub budget: f32,
    pub concern: String,
}

impl Request {
    #[must_use]
    pub fn new(
        skin_type: impl Into<String>,
        category: impl Into<String>,
        budget: f32,
        concern: impl Into<String>,
    ) -> Self {
        Self {
            skin_type: skin_type.into(),
            category: category.into(),
            budget,
            concern: concern.into(),
        }
    }
}

/// Relative weights of the three score components. Used exactly as
/// given: weights are not required to sum to 1 and are never
/// renormalized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    pub similarity: f32,
    pub rating: f32,
    pub price: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: 0.5,
            rating: 0.3,
            price: 0.2,
        }
    }
}

/// Caller-tunable scoring parameters with documented defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringParams {
    /// Maximum number of rows returned.
    pub top_n: usize,
    pub weights: ScoreWeights,
    /// Sharpness of the Gaussian price-proximity falloff.
    pub price_sigma: f32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            top_n: 5,
            weights: ScoreWeights::default(),
            price_sigma: 100.0,
        }
    }
}

/// A query after vocabulary encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedQuery {
    pub skin_type: SkinType,
    pub category: ProductCategory,
    /// Budget normalized against the catalog price range. Carried through
    /// encoding for parity with the stored feature columns; the scoring
    /// formula reads the raw budget instead.
    pub budget_norm: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = ScoringParams::default();
        assert_eq!(params.top_n, 5);
        assert_eq!(params.price_sigma, 100.0);
        assert_eq!(params.weights.similarity, 0.5);
        assert_eq!(params.weights.rating, 0.3);
        assert_eq!(params.weights.price, 0.2);
    }

    #[test]
    fn test_request_serde_roundtrip() {
        let request = Request::new("oily", "serum", 500.0, "acne");
        let json = serde_json::to_string(&request).unwrap();
        let parsed: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }
}
