//! # glowrec Engine
//!
//! The recommendation scorer for glowrec.
//!
//! ## Overview
//!
//! Scoring is a pure function over an immutable catalog and one query:
//!
//! 1. Encode the skin-type and category labels against the fixed
//!    vocabularies (case-insensitive, no fuzzy matching)
//! 2. Filter rows by categorical match and the budget window
//! 3. Encode the free-text concern through the catalog's fitted TF-IDF
//!    transform and take cosine similarity per surviving row
//! 4. Blend similarity, rating, and Gaussian price proximity with
//!    caller-tunable weights
//! 5. Rank stably by descending composite score and truncate to `top_n`
//!
//! Every call resolves to a [`Recommendation`]: ranked rows or a typed
//! [`Diagnostic`] (`invalid_input`, `no_matches`,
//! `internal_error:<detail>`).
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glowrec_catalog::{CatalogSnapshot, CatalogStore, ProductRow};
//! use glowrec_engine::{Recommender, Request, ScoringParams};
//!
//! let snapshot = CatalogSnapshot::build(vec![ProductRow {
//!     brand: "Dewlab".to_string(),
//!     name: "Aqua Boost".to_string(),
//!     skin_type: "dry".to_string(),
//!     category: "moisturizer".to_string(),
//!     price: 450.0,
//!     rating: 4.4,
//!     concerns: "deep hydration".to_string(),
//! }]);
//! let store = Arc::new(CatalogStore::from_snapshot(snapshot).unwrap());
//!
//! let recommender = Recommender::new(store);
//! let request = Request::new("dry", "moisturizer", 500.0, "hydration");
//! let outcome = recommender.recommend(&request, &ScoringParams::default());
//! assert!(outcome.is_ranked());
//! ```

pub mod outcome;
pub mod query;
pub mod recommend;
pub mod score;

pub use outcome::{Diagnostic, RankedProduct, Recommendation, ScoreBreakdown};
pub use query::{EncodedQuery, Request, ScoreWeights, ScoringParams, BUDGET_WINDOW};
pub use recommend::Recommender;
pub use score::{composite_score, price_proximity};
