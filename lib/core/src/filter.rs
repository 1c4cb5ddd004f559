// Categorical + budget-window filtering over catalog rows
use crate::product::{Product, ProductCategory, SkinType};

pub trait Filter {
    fn matches(&self, product: &Product) -> bool;
}

/// The filter applied before any scoring: skin-type and category codes
/// must match exactly, and the price must fall inside an inclusive
/// absolute window around the requested budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryFilter {
    pub skin_type: SkinType,
    pub category: ProductCategory,
    pub price_min: f32,
    pub price_max: f32,
}

impl QueryFilter {
    #[inline]
    #[must_use]
    pub fn new(skin_type: SkinType, category: ProductCategory, budget: f32, window: f32) -> Self {
        Self {
            skin_type,
            category,
            price_min: budget - window,
            price_max: budget + window,
        }
    }
}

impl Filter for QueryFilter {
    fn matches(&self, product: &Product) -> bool {
        product.skin_type == self.skin_type
            && product.category == self.category
            && product.price >= self.price_min
            && product.price <= self.price_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serum(price: f32) -> Product {
        Product::new("Brand", "Serum", SkinType::Oily, ProductCategory::Serum, price, 4.0)
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let filter = QueryFilter::new(SkinType::Oily, ProductCategory::Serum, 500.0, 150.0);

        assert!(filter.matches(&serum(350.0)));
        assert!(filter.matches(&serum(650.0)));
        assert!(filter.matches(&serum(500.0)));
        assert!(!filter.matches(&serum(349.9)));
        assert!(!filter.matches(&serum(650.1)));
    }

    #[test]
    fn test_categorical_mismatch_rejected() {
        let filter = QueryFilter::new(SkinType::Dry, ProductCategory::Serum, 500.0, 150.0);
        assert!(!filter.matches(&serum(500.0)));

        let filter = QueryFilter::new(SkinType::Oily, ProductCategory::Toner, 500.0, 150.0);
        assert!(!filter.matches(&serum(500.0)));
    }

    #[test]
    fn test_low_budget_window_clamps_naturally() {
        // window may extend below zero; non-negative prices still match
        let filter = QueryFilter::new(SkinType::Oily, ProductCategory::Serum, 100.0, 150.0);
        assert!(filter.matches(&serum(0.0)));
        assert!(filter.matches(&serum(250.0)));
        assert!(!filter.matches(&serum(250.1)));
    }
}
