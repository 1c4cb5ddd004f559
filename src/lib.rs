//! # glowrec
//!
//! A skincare product recommendation engine.
//!
//! glowrec ranks an immutable product catalog for a user's skin type,
//! product category, budget, and free-text concern, blending TF-IDF
//! concern similarity with rating and price proximity.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! glowrec build --products products.json --out catalog.snapshot
//! glowrec recommend --snapshot catalog.snapshot \
//!     --skin-type oily --category serum --budget 500 --concern "acne"
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glowrec::prelude::*;
//!
//! // Load the offline-prepared snapshot once at startup
//! let store = Arc::new(CatalogStore::open("catalog.snapshot").unwrap());
//! let recommender = Recommender::new(store);
//!
//! // Every query is a pure read
//! let request = Request::new("oily", "serum", 500.0, "acne");
//! match recommender.recommend(&request, &ScoringParams::default()) {
//!     Recommendation::Ranked(rows) => {
//!         for row in rows {
//!             println!("{} {} ({:.3})", row.brand, row.name, row.score);
//!         }
//!     }
//!     Recommendation::Diagnostic(d) => println!("{}", d),
//! }
//! ```
//!
//! ## Crate Structure
//!
//! glowrec is composed of several crates:
//!
//! - [`glowrec-core`](https://docs.rs/glowrec-core) - Sparse vectors, TF-IDF transform, catalog types
//! - [`glowrec-catalog`](https://docs.rs/glowrec-catalog) - Snapshot format and the load-once store
//! - [`glowrec-engine`](https://docs.rs/glowrec-engine) - Query encoding, filtering, scoring, ranking

// Re-export core types
pub use glowrec_core::{
    Error, Filter, Product, ProductCategory, QueryFilter, Result, SkinType, SparseVector,
    TfidfVectorizer,
};

// Re-export catalog
pub use glowrec_catalog::{CatalogSnapshot, CatalogStore, PriceRange, ProductRow};

// Re-export engine
pub use glowrec_engine::{
    Diagnostic, RankedProduct, Recommendation, Recommender, Request, ScoreBreakdown, ScoreWeights,
    ScoringParams, BUDGET_WINDOW,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogSnapshot, CatalogStore, Diagnostic, Error, Product, ProductCategory, ProductRow,
        RankedProduct, Recommendation, Recommender, Request, Result, ScoreWeights, ScoringParams,
        SkinType, SparseVector, TfidfVectorizer,
    };
}
