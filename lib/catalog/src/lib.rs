//! # glowrec Catalog
//!
//! Persistence layer for the glowrec recommendation engine.
//!
//! Two offline-prepared artifacts back every query: the product table and
//! the precomputed concern feature index (plus the fitted text transform
//! used to encode future queries into the same space). This crate owns
//! their on-disk format and the immutable in-memory handle:
//!
//! - [`CatalogSnapshot`] - gzip JSON snapshot: products, fitted
//!   [`TfidfVectorizer`](glowrec_core::TfidfVectorizer), aligned feature rows
//! - [`CatalogStore`] - load-once, read-only store with the catalog-wide
//!   [`PriceRange`]
//!
//! Loading validates the snapshot (label vocabulary, row/feature
//! alignment, non-empty table); a malformed snapshot is a startup-fatal
//! error, never a per-query one.

pub mod snapshot;
pub mod store;

pub use snapshot::{CatalogSnapshot, ProductRow};
pub use store::{CatalogStore, PriceRange};
