use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::Transaction;
use crate::parsing::csv_parser;

/// Result of loading transaction data.
#[derive(Debug)]
pub struct TransactionLoadResult {
    pub dataframe: DataFrame,
    pub num_rows: usize,
}

impl TransactionLoadResult {
    pub fn new(dataframe: DataFrame) -> Self {
        let num_rows = dataframe.height();
        Self { dataframe, num_rows }
    }
}

/// Loader for transaction CSV files.
pub struct TransactionLoader;

impl TransactionLoader {
    /// Load raw transaction data from a CSV file.
    pub fn load_from_csv(csv_path: &Path) -> Result<TransactionLoadResult> {
        let df = csv_parser::parse_transactions_csv(csv_path)
            .context("Failed to parse CSV file")?;

        Ok(TransactionLoadResult::new(df))
    }

    /// Load an enriched CSV (normalized headers) as typed records.
    ///
    /// Used by the warehouse loader to read back the output of a pipeline run.
    pub fn load_records_from_csv(csv_path: &Path) -> Result<Vec<Transaction>> {
        let result = Self::load_from_csv(csv_path)?;
        csv_parser::dataframe_to_transactions(&result.dataframe)
            .context("Failed to convert CSV rows to transactions")
    }
}
