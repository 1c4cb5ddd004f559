use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    #[error("Feature index misaligned: {products} products, {vectors} feature rows")]
    MisalignedIndex { products: usize, vectors: usize },

    #[error("Feature row out of range: {0}")]
    FeatureRowOutOfRange(usize),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
