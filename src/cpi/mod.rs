//! Personal CPI weighted-average calculator
//!
//! The user picks weights for spending categories; the personal index is the
//! weighted average of the category CPIs: `CPI = Σ(cpi_i × w_i) / Σ(w_i)`.
//! Category values are indexed to a 2020 base of 100.

pub mod loader;

use log::debug;
use serde::{Deserialize, Serialize};

/// CPI base year value (2020 = 100)
pub const BASE_INDEX: f64 = 100.0;

/// One spending category with its current index value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpiCategory {
    pub id: String,
    pub name: String,
    pub cpi: f64,
    pub description: String,
}

impl CpiCategory {
    fn new(id: &str, name: &str, cpi: f64, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cpi,
            description: description.to_string(),
        }
    }
}

/// Built-in 2024 category table (base year 2020 = 100)
pub fn default_2024_categories() -> Vec<CpiCategory> {
    vec![
        CpiCategory::new("animal", "Animal Products", 118.5, "Meat, dairy, eggs"),
        CpiCategory::new("seeds", "Seed Products", 125.2, "Beans, rice, wheat, grains"),
        CpiCategory::new("clothing", "Clothing", 103.8, "Apparel and footwear"),
        CpiCategory::new("education", "Education", 134.7, "School and university costs"),
        CpiCategory::new("gas", "Gasoline", 142.3, "Motor fuel"),
        CpiCategory::new("heating", "Heating", 128.9, "Home heating fuel"),
        CpiCategory::new("electricity", "Electricity", 115.6, "Electric utilities"),
        CpiCategory::new("dining", "Eating Out", 127.4, "Restaurants and takeout"),
        CpiCategory::new("travel", "Travel", 119.8, "Transportation and lodging"),
        CpiCategory::new("vehicles", "Vehicles", 108.2, "Cars and maintenance"),
        CpiCategory::new("housing", "Housing", 131.5, "Rent and home ownership"),
        CpiCategory::new("leisure", "Leisure Activities", 112.3, "Entertainment and recreation"),
        CpiCategory::new("tech-gadgets", "Tech Gadgets", 95.8, "Smartphones, laptops, electronics"),
    ]
}

/// A weighted basket of category ids
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpiBasket {
    /// (category id, weight) pairs; insertion order is preserved for display
    weights: Vec<(String, f64)>,
}

/// One category's contribution to the weighted average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItem {
    pub name: String,
    pub cpi: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl CpiBasket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight for a category, replacing any prior weight
    pub fn set_weight(&mut self, category_id: impl Into<String>, weight: f64) {
        let id = category_id.into();
        if let Some(entry) = self.weights.iter_mut().find(|(cid, _)| *cid == id) {
            entry.1 = weight;
        } else {
            self.weights.push((id, weight));
        }
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weighted-average personal CPI over the given category table
    ///
    /// Returns `None` when the basket carries no weight (the dashboard showed
    /// a meaningless 0 in that case). Ids with no matching category are
    /// skipped.
    pub fn personal_cpi(&self, categories: &[CpiCategory]) -> Option<f64> {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for (id, weight) in &self.weights {
            if let Some(category) = categories.iter().find(|c| &c.id == id) {
                weighted_sum += category.cpi * weight;
                total_weight += weight;
            } else {
                debug!("basket references unknown CPI category '{id}'");
            }
        }

        if total_weight > 0.0 {
            Some(weighted_sum / total_weight)
        } else {
            None
        }
    }

    /// Per-category breakdown rows for the basket display
    pub fn contributions(&self, categories: &[CpiCategory]) -> Vec<BasketItem> {
        self.weights
            .iter()
            .filter_map(|(id, weight)| {
                categories.iter().find(|c| &c.id == id).map(|category| BasketItem {
                    name: category.name.clone(),
                    cpi: category.cpi,
                    weight: *weight,
                    contribution: category.cpi * weight,
                })
            })
            .collect()
    }
}

/// Cumulative inflation versus the 2020 base year, in percent
pub fn inflation_vs_base(personal_cpi: f64) -> f64 {
    personal_cpi - BASE_INDEX
}

/// Historical trend for the chart: 2020-2023 national averages, then the
/// user's personal 2024 value
pub fn historical_trend(personal_cpi: f64) -> Vec<(i32, f64)> {
    vec![
        (2020, BASE_INDEX),
        (2021, BASE_INDEX * 1.05),
        (2022, BASE_INDEX * 1.18),
        (2023, BASE_INDEX * 1.22),
        (2024, personal_cpi),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_table() {
        let categories = default_2024_categories();
        assert_eq!(categories.len(), 13);
        // Only tech gadgets deflated against the base year
        let deflated: Vec<_> = categories.iter().filter(|c| c.cpi < BASE_INDEX).collect();
        assert_eq!(deflated.len(), 1);
        assert_eq!(deflated[0].id, "tech-gadgets");
    }

    #[test]
    fn test_weighted_average() {
        let categories = default_2024_categories();
        let mut basket = CpiBasket::new();
        basket.set_weight("gas", 2.0); // 142.3
        basket.set_weight("clothing", 1.0); // 103.8

        let cpi = basket.personal_cpi(&categories).unwrap();
        assert_relative_eq!(cpi, (142.3 * 2.0 + 103.8) / 3.0, max_relative = 1e-12);
        assert_relative_eq!(inflation_vs_base(cpi), cpi - 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_single_category_equals_its_cpi() {
        let categories = default_2024_categories();
        let mut basket = CpiBasket::new();
        basket.set_weight("housing", 5.0);
        assert_relative_eq!(basket.personal_cpi(&categories).unwrap(), 131.5);
    }

    #[test]
    fn test_empty_basket_is_none() {
        let categories = default_2024_categories();
        assert!(CpiBasket::new().personal_cpi(&categories).is_none());

        // Unknown ids contribute nothing
        let mut basket = CpiBasket::new();
        basket.set_weight("no-such-category", 3.0);
        assert!(basket.personal_cpi(&categories).is_none());
    }

    #[test]
    fn test_set_weight_replaces() {
        let categories = default_2024_categories();
        let mut basket = CpiBasket::new();
        basket.set_weight("gas", 1.0);
        basket.set_weight("gas", 3.0);

        assert_relative_eq!(basket.total_weight(), 3.0);
        assert_relative_eq!(basket.personal_cpi(&categories).unwrap(), 142.3);
    }

    #[test]
    fn test_contributions_breakdown() {
        let categories = default_2024_categories();
        let mut basket = CpiBasket::new();
        basket.set_weight("dining", 2.0);
        basket.set_weight("travel", 1.0);

        let items = basket.contributions(&categories);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Eating Out");
        assert_relative_eq!(items[0].contribution, 127.4 * 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_historical_trend_shape() {
        let trend = historical_trend(125.0);
        assert_eq!(trend.len(), 5);
        assert_eq!(trend[0], (2020, 100.0));
        assert_eq!(trend[4], (2024, 125.0));
    }
}
