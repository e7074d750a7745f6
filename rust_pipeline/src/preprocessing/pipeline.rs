use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::Transaction;
use crate::parsing::csv_parser;
use crate::preprocessing::enricher::TransactionEnricher;
use crate::preprocessing::validator::{DatasetValidator, ValidationResult};
use crate::services::summaries::{self, CategorySummary, CustomerSummary};
use crate::transformations::{cleaning, filtering};

/// Quantile cutoff for the high-amount outlier view.
pub const OUTLIER_PERCENTILE: f64 = 0.99;
/// Amount floor for the low-rating-high-spend view (strictly greater).
pub const HIGH_SPEND_MIN: f64 = 150.0;
/// Rating ceiling for the low-rating-high-spend view (inclusive).
pub const LOW_RATING_MAX: f64 = 2.0;

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    /// Enriched record set as a DataFrame, ready for export.
    pub dataframe: DataFrame,
    /// Enriched record set as typed records.
    pub records: Vec<Transaction>,
    /// Per-customer aggregate, one row per distinct identifier.
    pub customer_summary: Vec<CustomerSummary>,
    /// Per-category aggregate over the purchase amount.
    pub category_summary: Vec<CategorySummary>,
    /// Records with an amount above the 99th percentile.
    pub outliers: Vec<Transaction>,
    /// Records combining high spend with a low rating.
    pub low_rating_high_spend: Vec<Transaction>,
    /// Validation report of the raw input.
    pub validation: ValidationResult,
    /// Number of review ratings filled by imputation.
    pub imputed_ratings: usize,
    /// Number of purchase dates synthesized by the enricher.
    pub synthesized_dates: usize,
}

/// Configuration for the preprocessing pipeline.
pub struct PreprocessConfig {
    pub validate: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// The cleaning and enrichment pipeline.
///
/// Stages run in a fixed order, each consuming the previous stage's output:
/// rating imputation, column normalization, typed conversion, feature
/// derivation and date materialization, summaries, outlier selection. The
/// pipeline performs no I/O; loading and writing files is the caller's job.
pub struct PreprocessPipeline {
    config: PreprocessConfig,
}

impl PreprocessPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self {
            config: PreprocessConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Load a transactions CSV file and run the full pipeline on it.
    pub fn process_csv(&self, csv_path: &Path) -> Result<PipelineResult> {
        let df = csv_parser::parse_transactions_csv(csv_path)
            .with_context(|| format!("Failed to load {}", csv_path.display()))?;
        self.process(df)
    }

    /// Run the full pipeline on an already loaded raw DataFrame.
    pub fn process(&self, df: DataFrame) -> Result<PipelineResult> {
        // Step 1: Validate the raw input
        let validation = if self.config.validate {
            DatasetValidator::validate_dataframe(&df)
        } else {
            ValidationResult::new()
        };
        for warning in &validation.warnings {
            log::warn!("{}", warning);
        }
        if !validation.is_valid {
            bail!("Input validation failed: {}", validation.errors.join("; "));
        }

        // Step 2: Impute missing ratings with the per-category median
        let (df, imputed_ratings) = cleaning::impute_ratings_by_category(df)
            .context("Failed to impute review ratings")?;

        // Step 3: Normalize column names
        let df = cleaning::normalize_column_names(df)
            .context("Failed to normalize column names")?;

        // Step 4: Convert to typed records
        let had_dates = df
            .get_column_names()
            .iter()
            .any(|name| name.as_str() == "purchase_date");
        let records = csv_parser::dataframe_to_transactions(&df)?;

        // Step 5: Derive features and materialize purchase dates
        let enricher = TransactionEnricher::new(!had_dates);
        let records = enricher.enrich(records)?;
        let synthesized_dates = if had_dates { 0 } else { records.len() };

        // Step 6: Summaries
        let customer_summary = summaries::customer_summary(&records);
        let category_summary = summaries::category_summary(&records);

        // Step 7: Outlier views
        let outliers = filtering::amount_above_percentile(&records, OUTLIER_PERCENTILE);
        let low_rating_high_spend =
            filtering::low_rating_high_spend(&records, HIGH_SPEND_MIN, LOW_RATING_MAX);

        // Step 8: Enriched DataFrame for export
        let dataframe = csv_parser::transactions_to_dataframe(&records)?;

        log::info!(
            "Processed {} records ({} customers, {} categories)",
            records.len(),
            customer_summary.len(),
            category_summary.len()
        );

        Ok(PipelineResult {
            dataframe,
            records,
            customer_summary,
            category_summary,
            outliers,
            low_rating_high_spend,
            validation,
            imputed_ratings,
            synthesized_dates,
        })
    }
}

impl Default for PreprocessPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to run the pipeline on a CSV file.
pub fn preprocess_transactions(csv_path: &Path) -> Result<PipelineResult> {
    PreprocessPipeline::new().process_csv(csv_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{RatingCategory, SpendingSegment};
    use chrono::Datelike;

    fn raw_df() -> DataFrame {
        df!(
            "Customer ID" => vec!["C1", "C2", "C3"],
            "Age" => vec![25i64, 31, 47],
            "Gender" => vec!["F", "M", "F"],
            "Item Purchased" => vec!["Shoes", "Hat", "Watch"],
            "Category" => vec!["A", "A", "A"],
            "Purchase Amount (USD)" => vec![10.0, 200.0, 2000.0],
            "Review Rating" => vec![Some(1.0), Some(3.0), None],
        )
        .unwrap()
    }

    #[test]
    fn end_to_end_run_matches_expected_outputs() {
        let result = PreprocessPipeline::new().process(raw_df()).unwrap();

        assert_eq!(result.records.len(), 3);
        assert_eq!(result.imputed_ratings, 1);
        assert_eq!(result.synthesized_dates, 3);

        // median(1, 3) = 2 imputed for the third record
        assert_eq!(result.records[2].review_rating, Some(2.0));

        let categories: Vec<_> = result
            .records
            .iter()
            .map(|tx| tx.rating_category.unwrap())
            .collect();
        assert_eq!(
            categories,
            vec![RatingCategory::Low, RatingCategory::Medium, RatingCategory::Low]
        );

        let segments: Vec<_> = result
            .records
            .iter()
            .map(|tx| tx.spending_segment)
            .collect();
        assert_eq!(
            segments,
            vec![
                Some(SpendingSegment::Low),
                Some(SpendingSegment::High),
                None,
            ]
        );

        // dates were synthesized inside 2023 and the parts derived
        for tx in &result.records {
            let date = tx.purchase_date.expect("synthesized");
            assert_eq!(date.year(), 2023);
            assert_eq!(tx.month, Some(date.month()));
            assert!(tx.weekday.is_some());
        }

        // one summary row per distinct customer
        assert_eq!(result.customer_summary.len(), 3);
        assert!(result
            .customer_summary
            .iter()
            .all(|row| row.purchase_count == 1));

        assert_eq!(result.category_summary.len(), 1);
        assert_eq!(result.category_summary[0].total_amount, 2210.0);

        // q99 of [10, 200, 2000] is 1964
        assert_eq!(result.outliers.len(), 1);
        assert_eq!(result.outliers[0].purchase_amount, 2000.0);

        // the 2000 row has imputed rating 2.0, which qualifies
        assert_eq!(result.low_rating_high_spend.len(), 1);
        assert_eq!(result.low_rating_high_spend[0].purchase_amount, 2000.0);

        // enriched frame carries the derived columns
        let names: Vec<String> = result
            .dataframe
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        for expected in [
            "customer_id",
            "purchase_amount",
            "review_rating",
            "rating_category",
            "spending_segment",
            "purchase_date",
            "month",
            "weekday",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
        assert_eq!(result.dataframe.height(), 3);
    }

    #[test]
    fn existing_dates_are_parsed_not_synthesized() {
        let df = df!(
            "Customer ID" => vec!["C1", "C2"],
            "Age" => vec![25i64, 31],
            "Gender" => vec!["F", "M"],
            "Item Purchased" => vec!["Shoes", "Hat"],
            "Category" => vec!["A", "A"],
            "Purchase Amount (USD)" => vec![10.0, 20.0],
            "Review Rating" => vec![Some(1.0), Some(3.0)],
            "Purchase Date" => vec![Some("2023-06-05"), None],
        )
        .unwrap();

        let result = PreprocessPipeline::new().process(df).unwrap();
        assert_eq!(result.synthesized_dates, 0);

        assert_eq!(result.records[0].month, Some(6));
        assert_eq!(result.records[0].weekday.as_deref(), Some("Monday"));

        // a null cell in an existing date column stays absent
        assert_eq!(result.records[1].purchase_date, None);
        assert_eq!(result.records[1].month, None);
    }

    #[test]
    fn unparseable_date_aborts_the_run() {
        let df = df!(
            "Customer ID" => vec!["C1"],
            "Age" => vec![25i64],
            "Gender" => vec!["F"],
            "Item Purchased" => vec!["Shoes"],
            "Category" => vec!["A"],
            "Purchase Amount (USD)" => vec![10.0],
            "Review Rating" => vec![Some(1.0)],
            "Purchase Date" => vec!["not-a-date"],
        )
        .unwrap();

        let err = PreprocessPipeline::new().process(df).unwrap_err();
        assert!(err.to_string().contains("Unparseable purchase_date"));
    }

    #[test]
    fn missing_required_column_aborts_the_run() {
        let df = df!(
            "Customer ID" => vec!["C1"],
            "Purchase Amount (USD)" => vec![10.0],
        )
        .unwrap();

        let err = PreprocessPipeline::new().process(df).unwrap_err();
        assert!(err.to_string().contains("Input validation failed"));
    }
}
