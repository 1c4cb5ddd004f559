// Snapshot format for the offline-prepared catalog artifacts
use anyhow::{anyhow, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use glowrec_core::{SparseVector, TfidfVectorizer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// One product row as stored in the snapshot. Labels are kept raw here;
/// they are encoded into vocabulary codes when the store loads the
/// snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub brand: String,
    pub name: String,
    pub skin_type: String,
    pub category: String,
    pub price: f32,
    pub rating: f32,
    #[serde(default)]
    pub concerns: String,
}

/// Offline-prepared catalog snapshot: the product table, the fitted text
/// transform, and one precomputed concern feature row per product.
///
/// The feature row at index `i` always belongs to the product at index
/// `i`; the store refuses to load a snapshot where the counts differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<ProductRow>,
    pub vectorizer: TfidfVectorizer,
    pub concern_vectors: Vec<SparseVector>,
}

impl CatalogSnapshot {
    /// Build a snapshot from raw product rows: fits the text transform
    /// over the concern texts and precomputes every feature row. This is
    /// the offline preparation step; queries never refit.
    #[must_use]
    pub fn build(products: Vec<ProductRow>) -> Self {
        let texts: Vec<&str> = products.iter().map(|p| p.concerns.as_str()).collect();
        let (vectorizer, concern_vectors) = TfidfVectorizer::fit_transform(&texts);
        Self {
            products,
            vectorizer,
            concern_vectors,
        }
    }

    /// Write the snapshot as gzip-compressed JSON, atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_data = serde_json::to_vec(self)?;

        let file = AtomicFile::new(path.as_ref(), OverwriteBehavior::AllowOverwrite);
        file.write(|f| {
            let mut encoder = GzEncoder::new(f, Compression::default());
            encoder.write_all(&json_data)?;
            encoder.finish()?;
            Ok::<(), std::io::Error>(())
        })?;

        Ok(())
    }

    /// Read a snapshot written by [`CatalogSnapshot::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(anyhow!("snapshot not found: {}", path.display()));
        }

        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut json_data = Vec::new();
        decoder.read_to_end(&mut json_data)?;

        Ok(serde_json::from_slice(&json_data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ProductRow> {
        vec![
            ProductRow {
                brand: "Dewlab".to_string(),
                name: "Aqua Boost".to_string(),
                skin_type: "dry".to_string(),
                category: "moisturizer".to_string(),
                price: 450.0,
                rating: 4.4,
                concerns: "deep hydration for dry skin".to_string(),
            },
            ProductRow {
                brand: "Clearly".to_string(),
                name: "Spot Rescue".to_string(),
                skin_type: "oily".to_string(),
                category: "serum".to_string(),
                price: 520.0,
                rating: 4.1,
                concerns: "acne and blemish control".to_string(),
            },
        ]
    }

    #[test]
    fn test_build_aligns_rows_and_vectors() {
        let snapshot = CatalogSnapshot::build(sample_rows());
        assert_eq!(snapshot.products.len(), snapshot.concern_vectors.len());
        assert!(!snapshot.vectorizer.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.snapshot");

        let snapshot = CatalogSnapshot::build(sample_rows());
        snapshot.save(&path).unwrap();

        let restored = CatalogSnapshot::load(&path).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogSnapshot::load(dir.path().join("nope.snapshot")).unwrap_err();
        assert!(err.to_string().contains("snapshot not found"));
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.snapshot");
        std::fs::write(&path, b"not a gzip stream").unwrap();

        assert!(CatalogSnapshot::load(&path).is_err());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.snapshot");

        let snapshot = CatalogSnapshot::build(sample_rows());
        snapshot.save(&path).unwrap();

        let mut rows = sample_rows();
        rows.pop();
        let smaller = CatalogSnapshot::build(rows);
        smaller.save(&path).unwrap();

        let restored = CatalogSnapshot::load(&path).unwrap();
        assert_eq!(restored.products.len(), 1);
    }
}
