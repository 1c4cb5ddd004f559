use glowrec_core::{Error, Filter, Product, Result, SparseVector, TfidfVectorizer};
use std::path::Path;

use crate::snapshot::CatalogSnapshot;

/// Catalog-wide price bounds, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f32,
    pub max: f32,
}

impl PriceRange {
    /// Normalize a price against the catalog bounds into [0, 1] for
    /// in-range values. A degenerate range (all prices equal) maps to 0.
    #[inline]
    #[must_use]
    pub fn normalize(&self, price: f32) -> f32 {
        let span = self.max - self.min;
        if span <= f32::EPSILON {
            0.0
        } else {
            (price - self.min) / span
        }
    }
}

/// The immutable in-memory catalog: products with encoded categorical
/// attributes, the aligned concern feature rows, and the fitted text
/// transform. Constructed once at startup; every query is a pure read,
/// so shared references need no locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    concern_vectors: Vec<SparseVector>,
    vectorizer: TfidfVectorizer,
    price_range: PriceRange,
}

impl CatalogStore {
    /// Load a snapshot file and construct the store.
    /// Any malformation is fatal here, never a per-query error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let snapshot =
            CatalogSnapshot::load(path).map_err(|e| match e.downcast::<serde_json::Error>() {
                Ok(json_err) => Error::Serialization(json_err.to_string()),
                Err(other) => Error::Snapshot(other.to_string()),
            })?;
        Self::from_snapshot(snapshot)
    }

    /// Construct the store from an in-memory snapshot, validating the
    /// row/feature alignment and encoding the raw labels.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self> {
        if snapshot.products.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if snapshot.products.len() != snapshot.concern_vectors.len() {
            return Err(Error::MisalignedIndex {
                products: snapshot.products.len(),
                vectors: snapshot.concern_vectors.len(),
            });
        }

        let mut products = Vec::with_capacity(snapshot.products.len());
        for row in snapshot.products {
            products.push(Product {
                brand: row.brand,
                name: row.name,
                skin_type: row.skin_type.parse()?,
                category: row.category.parse()?,
                price: row.price,
                rating: row.rating,
                concerns: row.concerns,
            });
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for product in &products {
            min = min.min(product.price);
            max = max.max(product.price);
        }

        Ok(Self {
            products,
            concern_vectors: snapshot.concern_vectors,
            vectorizer: snapshot.vectorizer,
            price_range: PriceRange { min, max },
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    #[must_use]
    pub fn product(&self, row: usize) -> Option<&Product> {
        self.products.get(row)
    }

    /// The precomputed concern feature row for a catalog row.
    #[inline]
    #[must_use]
    pub fn concern_vector(&self, row: usize) -> Option<&SparseVector> {
        self.concern_vectors.get(row)
    }

    /// The fitted transform used to encode query text into the same
    /// feature space as the stored rows.
    #[inline]
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    #[inline]
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Row indices of products matching a filter, in catalog order.
    #[must_use]
    pub fn filter_rows(&self, filter: &dyn Filter) -> Vec<usize> {
        self.products
            .iter()
            .enumerate()
            .filter(|(_, product)| filter.matches(product))
            .map(|(row, _)| row)
            .collect()
    }
}
