//! # glowrec Core
//!
//! Core library for the glowrec recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`SparseVector`] - Sparse feature vectors with cosine similarity
//! - [`Product`] - A catalog row with encoded categorical attributes
//! - [`SkinType`] / [`ProductCategory`] - Fixed label vocabularies
//! - [`TfidfVectorizer`] - The fitted text transform for concern matching
//! - [`QueryFilter`] - Categorical + budget-window row filtering
//!
//! ## Example
//!
//! ```rust
//! use glowrec_core::{Product, ProductCategory, SkinType, TfidfVectorizer};
//!
//! let products = vec![
//!     Product::new("Dewlab", "Aqua Boost", SkinType::Dry, ProductCategory::Moisturizer, 450.0, 4.4)
//!         .with_concerns("deep hydration for dry skin"),
//!     Product::new("Clearly", "Spot Rescue", SkinType::Oily, ProductCategory::Serum, 520.0, 4.1)
//!         .with_concerns("acne and blemish control"),
//! ];
//!
//! // Fit the transform offline, encode a query into the same space
//! let texts: Vec<&str> = products.iter().map(|p| p.concerns.as_str()).collect();
//! let (vectorizer, rows) = TfidfVectorizer::fit_transform(&texts);
//!
//! let query = vectorizer.transform("hydration");
//! assert!(query.cosine_similarity(&rows[0]) > query.cosine_similarity(&rows[1]));
//! ```

pub mod error;
pub mod filter;
pub mod product;
pub mod tfidf;
pub mod vector;

pub use error::{Error, Result};
pub use filter::{Filter, QueryFilter};
pub use product::{Product, ProductCategory, SkinType};
pub use tfidf::TfidfVectorizer;
pub use vector::SparseVector;
