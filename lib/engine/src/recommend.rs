//! The recommendation scorer.
//!
//! A pure, stateless pipeline over the immutable catalog:
//! encode the query against the fixed vocabularies, filter rows by
//! categorical match and budget window, score survivors with the
//! similarity / rating / price-proximity blend, rank, and project.

use glowrec_catalog::CatalogStore;
use glowrec_core::{Error, QueryFilter, Result};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::sync::Arc;

use crate::outcome::{Diagnostic, RankedProduct, Recommendation, ScoreBreakdown};
use crate::query::{EncodedQuery, Request, ScoringParams, BUDGET_WINDOW};
use crate::score::{composite_score, price_proximity};

/// Scores queries against a catalog handle injected at construction.
/// Holds no mutable state; one instance can serve any number of calls.
#[derive(Debug, Clone)]
pub struct Recommender {
    store: Arc<CatalogStore>,
}

impl Recommender {
    #[must_use]
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Rank catalog rows for one query.
    ///
    /// Always returns a value: a ranked list, or a diagnostic for
    /// unknown labels, an empty filter result, or any unexpected
    /// failure caught at this boundary.
    pub fn recommend(&self, request: &Request, params: &ScoringParams) -> Recommendation {
        match self.rank(request, params) {
            Ok(outcome) => outcome,
            Err(e) => Recommendation::Diagnostic(Diagnostic::Internal(e.to_string())),
        }
    }

    /// Encode the raw labels against the fixed vocabularies. No partial
    /// or fuzzy matching: any unknown label rejects the query before the
    /// catalog is touched.
    fn encode(&self, request: &Request) -> Option<EncodedQuery> {
        let skin_type = request.skin_type.parse().ok()?;
        let category = request.category.parse().ok()?;
        let budget_norm = self.store.price_range().normalize(request.budget);

        Some(EncodedQuery {
            skin_type,
            category,
            budget_norm,
        })
    }

    fn rank(&self, request: &Request, params: &ScoringParams) -> Result<Recommendation> {
        let Some(encoded) = self.encode(request) else {
            return Ok(Recommendation::Diagnostic(Diagnostic::InvalidInput));
        };

        let filter = QueryFilter::new(
            encoded.skin_type,
            encoded.category,
            request.budget,
            BUDGET_WINDOW,
        );
        let rows = self.store.filter_rows(&filter);
        if rows.is_empty() {
            return Ok(Recommendation::Diagnostic(Diagnostic::NoMatches));
        }

        // Encode the concern through the catalog's fitted transform so the
        // query lands in the same feature space as the stored rows.
        let query_vector = self.store.vectorizer().transform(request.concern.trim());

        let mut scored = Vec::with_capacity(rows.len());
        for row in rows {
            let product = self
                .store
                .product(row)
                .ok_or(Error::FeatureRowOutOfRange(row))?;
            let concern_vector = self
                .store
                .concern_vector(row)
                .ok_or(Error::FeatureRowOutOfRange(row))?;

            let similarity = query_vector.cosine_similarity(concern_vector);
            let price_score = price_proximity(product.price, request.budget, params.price_sigma);
            let score = composite_score(similarity, product.rating, price_score, &params.weights);

            scored.push((
                row,
                score,
                ScoreBreakdown {
                    similarity,
                    rating: product.rating,
                    price_proximity: price_score,
                },
            ));
        }

        // Stable sort by descending score: ties keep catalog order.
        scored.sort_by_key(|(_, score, _)| Reverse(OrderedFloat(*score)));
        scored.truncate(params.top_n);

        let ranked = scored
            .into_iter()
            .map(|(row, score, breakdown)| {
                let product = &self.store.products()[row];
                RankedProduct {
                    brand: product.brand.clone(),
                    name: product.name.clone(),
                    price: product.price,
                    rating: product.rating,
                    score,
                    breakdown,
                }
            })
            .collect();

        Ok(Recommendation::Ranked(ranked))
    }
}
