//! Input validation with detailed error and warning reporting.
//!
//! This module checks the raw dataset for the columns the pipeline depends on
//! and collects the missing-value profile of the input. A missing required
//! column is an error and aborts the run; everything else observed (absent
//! purchase-date column, negative amounts) is reported as a warning.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parsing::csv_parser::RAW_AMOUNT;

/// Columns that must be present in the raw input.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Customer ID",
    "Age",
    "Gender",
    "Item Purchased",
    "Category",
    RAW_AMOUNT,
    "Review Rating",
];

/// Validation outcome with categorized issues and dataset statistics.
///
/// Errors make `is_valid` false, while warnings are informational and never
/// fail validation.
///
/// # Examples
///
/// ```
/// use csb_rust::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Missing required column: Category".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
///
/// `missing_values` maps each input column to its count of absent cells,
/// recording the missing-value profile of the dataset before imputation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_rows: usize,
    pub missing_values: BTreeMap<String, usize>,
    pub negative_amounts: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the raw transactions dataset.
pub struct DatasetValidator;

impl DatasetValidator {
    /// Validates a raw DataFrame before any cleaning stage runs.
    ///
    /// Checks that every required column exists, warns when the optional
    /// purchase-date column is absent (the enricher will synthesize dates),
    /// and profiles missing values and negative amounts.
    pub fn validate_dataframe(df: &DataFrame) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_rows = df.height();

        let column_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for required in REQUIRED_COLUMNS {
            if !column_names.contains(&required.to_string()) {
                result.add_error(format!("Missing required column: {}", required));
            }
        }

        if !column_names.contains(&"Purchase Date".to_string()) {
            result.add_warning(
                "No 'Purchase Date' column; purchase dates will be synthesized".to_string(),
            );
        }

        for name in &column_names {
            if let Ok(column) = df.column(name) {
                result
                    .stats
                    .missing_values
                    .insert(name.clone(), column.null_count());
            }
        }

        if let Ok(amounts) = df.column(RAW_AMOUNT) {
            if let Ok(values) = amounts.f64() {
                let negative = values
                    .into_iter()
                    .filter(|v| v.map(|a| a < 0.0).unwrap_or(false))
                    .count();
                if negative > 0 {
                    result.stats.negative_amounts = negative;
                    result.add_warning(format!("{} rows have a negative purchase amount", negative));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_dataset() {
        let df = df!(
            "Customer ID" => vec!["C1"],
            "Age" => vec![30i64],
            "Gender" => vec!["F"],
            "Item Purchased" => vec!["Shoes"],
            "Category" => vec!["Footwear"],
            RAW_AMOUNT => vec![42.0],
            "Review Rating" => vec![Some(4.0)],
            "Purchase Date" => vec!["2023-06-05"],
        )
        .unwrap();

        let result = DatasetValidator::validate_dataframe(&df);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.stats.total_rows, 1);
        assert_eq!(result.stats.missing_values.get("Review Rating"), Some(&0));
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let df = df!(
            "Customer ID" => vec!["C1"],
            RAW_AMOUNT => vec![42.0],
        )
        .unwrap();

        let result = DatasetValidator::validate_dataframe(&df);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("Missing required column: Category")));
    }

    #[test]
    fn missing_date_column_is_only_a_warning() {
        let df = df!(
            "Customer ID" => vec!["C1"],
            "Age" => vec![30i64],
            "Gender" => vec!["F"],
            "Item Purchased" => vec!["Shoes"],
            "Category" => vec!["Footwear"],
            RAW_AMOUNT => vec![-42.0],
            "Review Rating" => vec![Some(4.0)],
        )
        .unwrap();

        let result = DatasetValidator::validate_dataframe(&df);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.stats.negative_amounts, 1);
    }
}
