//! CSV-based CPI table loader
//!
//! Loads category tables and baskets from CSV so the built-in 2024 values can
//! be swapped without recompiling.

use std::fs::File;
use std::path::Path;

use crate::error::ModelError;
use super::{CpiBasket, CpiCategory};

/// Default path to the shipped category table
pub const DEFAULT_CATEGORIES_PATH: &str = "data/cpi_categories.csv";

/// Load a category table from CSV
///
/// Expected columns: `id,name,cpi,description` (with header row).
pub fn load_categories(path: &Path) -> Result<Vec<CpiCategory>, ModelError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut categories = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cpi: f64 = record[2]
            .parse()
            .map_err(|_| ModelError::invalid(format!("bad cpi value '{}'", &record[2])))?;

        categories.push(CpiCategory {
            id: record[0].to_string(),
            name: record[1].to_string(),
            cpi,
            description: record.get(3).unwrap_or("").to_string(),
        });
    }

    Ok(categories)
}

/// Load the category table from the default location
pub fn load_default_categories() -> Result<Vec<CpiCategory>, ModelError> {
    load_categories(Path::new(DEFAULT_CATEGORIES_PATH))
}

/// Load a basket from CSV
///
/// Expected columns: `category_id,weight` (with header row). Repeated ids
/// keep the last weight.
pub fn load_basket(path: &Path) -> Result<CpiBasket, ModelError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut basket = CpiBasket::new();
    for result in reader.records() {
        let record = result?;
        let weight: f64 = record[1]
            .parse()
            .map_err(|_| ModelError::invalid(format!("bad weight '{}'", &record[1])))?;
        basket.set_weight(record[0].to_string(), weight);
    }

    Ok(basket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_default_categories() {
        let result = load_default_categories();
        assert!(result.is_ok(), "failed to load categories: {:?}", result.err());

        let categories = result.unwrap();
        assert_eq!(categories.len(), 13);
        assert!(categories.iter().any(|c| c.id == "housing" && c.cpi == 131.5));
    }

    #[test]
    fn test_load_basket_csv() {
        let path = write_temp(
            "btc_models_basket_test.csv",
            "category_id,weight\ngas,2\nhousing,3.5\n",
        );

        let basket = load_basket(&path).unwrap();
        assert_eq!(basket.total_weight(), 5.5);
    }

    #[test]
    fn test_bad_weight_rejected() {
        let path = write_temp(
            "btc_models_basket_bad.csv",
            "category_id,weight\ngas,not-a-number\n",
        );

        assert!(matches!(load_basket(&path), Err(ModelError::InvalidArgument(_))));
    }
}
