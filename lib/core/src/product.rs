use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Skin type vocabulary. The discriminant order is the encoding contract
/// with precomputed catalog codes and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Combination,
    Dry,
    Normal,
    Oily,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Combination,
        SkinType::Dry,
        SkinType::Normal,
        SkinType::Oily,
        SkinType::Sensitive,
    ];

    /// Stable numeric code for this label.
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SkinType::Combination => "combination",
            SkinType::Dry => "dry",
            SkinType::Normal => "normal",
            SkinType::Oily => "oily",
            SkinType::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "combination" => Ok(SkinType::Combination),
            "dry" => Ok(SkinType::Dry),
            "normal" => Ok(SkinType::Normal),
            "oily" => Ok(SkinType::Oily),
            "sensitive" => Ok(SkinType::Sensitive),
            _ => Err(Error::UnknownLabel(s.to_string())),
        }
    }
}

/// Product category vocabulary. Same encoding contract as [`SkinType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Cleanser,
    Moisturizer,
    Serum,
    Sunscreen,
    Toner,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Cleanser,
        ProductCategory::Moisturizer,
        ProductCategory::Serum,
        ProductCategory::Sunscreen,
        ProductCategory::Toner,
    ];

    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Cleanser => "cleanser",
            ProductCategory::Moisturizer => "moisturizer",
            ProductCategory::Serum => "serum",
            ProductCategory::Sunscreen => "sunscreen",
            ProductCategory::Toner => "toner",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cleanser" => Ok(ProductCategory::Cleanser),
            "moisturizer" => Ok(ProductCategory::Moisturizer),
            "serum" => Ok(ProductCategory::Serum),
            "sunscreen" => Ok(ProductCategory::Sunscreen),
            "toner" => Ok(ProductCategory::Toner),
            _ => Err(Error::UnknownLabel(s.to_string())),
        }
    }
}

/// One catalog row. Brand and name are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub brand: String,
    pub name: String,
    pub skin_type: SkinType,
    pub category: ProductCategory,
    /// Non-negative, currency-agnostic price units.
    pub price: f32,
    /// Normalized rating, comparable across products.
    pub rating: f32,
    /// Raw concerns/benefits text this product was indexed under.
    #[serde(default)]
    pub concerns: String,
}

impl Product {
    #[inline]
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        name: impl Into<String>,
        skin_type: SkinType,
        category: ProductCategory,
        price: f32,
        rating: f32,
    ) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            skin_type,
            category,
            price,
            rating,
            concerns: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_concerns(mut self, concerns: impl Into<String>) -> Self {
        self.concerns = concerns.into();
        self
    }
}
