//! Scoring functions for the recommendation blend.
//!
//! All component scores land in [0, 1] for well-formed inputs; the
//! composite is their weighted sum and inherits whatever range the
//! caller's weights produce.

use crate::query::ScoreWeights;

/// Gaussian closeness of a product price to the requested budget:
/// `exp(-(price - budget)^2 / (2 * sigma^2))`.
///
/// Equals 1.0 at an exact match and is symmetric around the budget;
/// `sigma` controls how quickly the score decays with distance.
#[inline]
#[must_use]
pub fn price_proximity(price: f32, budget: f32, sigma: f32) -> f32 {
    let diff = price - budget;
    (-(diff * diff) / (2.0 * sigma * sigma)).exp()
}

/// Weighted blend of concern similarity, rating, and price proximity.
#[inline]
#[must_use]
pub fn composite_score(similarity: f32, rating: f32, price_score: f32, weights: &ScoreWeights) -> f32 {
    similarity * weights.similarity + rating * weights.rating + price_score * weights.price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_proximity_exact_match_is_one() {
        assert_eq!(price_proximity(500.0, 500.0, 100.0), 1.0);
    }

    #[test]
    fn test_price_proximity_symmetric() {
        let above = price_proximity(560.0, 500.0, 100.0);
        let below = price_proximity(440.0, 500.0, 100.0);
        assert!((above - below).abs() < 1e-6);
        assert!(above < 1.0);
    }

    #[test]
    fn test_price_proximity_decays_with_distance() {
        let near = price_proximity(520.0, 500.0, 100.0);
        let far = price_proximity(650.0, 500.0, 100.0);
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn test_smaller_sigma_is_sharper() {
        let wide = price_proximity(550.0, 500.0, 100.0);
        let narrow = price_proximity(550.0, 500.0, 25.0);
        assert!(narrow < wide);
    }

    #[test]
    fn test_composite_matches_formula() {
        let weights = ScoreWeights::default();
        let score = composite_score(0.8, 4.5, 0.9, &weights);
        assert!((score - (0.8 * 0.5 + 4.5 * 0.3 + 0.9 * 0.2)).abs() < 1e-6);
    }

    #[test]
    fn test_composite_monotone_in_each_component() {
        let weights = ScoreWeights::default();
        let base = composite_score(0.5, 3.0, 0.5, &weights);

        assert!(composite_score(0.6, 3.0, 0.5, &weights) > base);
        assert!(composite_score(0.5, 3.5, 0.5, &weights) > base);
        assert!(composite_score(0.5, 3.0, 0.6, &weights) > base);
    }

    #[test]
    fn test_weights_used_as_given() {
        // weights need not sum to 1 and are not renormalized
        let weights = ScoreWeights {
            similarity: 2.0,
            rating: 0.0,
            price: 0.0,
        };
        assert_eq!(composite_score(0.5, 5.0, 1.0, &weights), 1.0);
    }
}
