use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::{RatingCategory, SpendingSegment, Transaction};

/// Raw header of the currency column before normalization.
pub const RAW_AMOUNT: &str = "Purchase Amount (USD)";
/// Raw header of the review rating column before normalization.
pub const RAW_RATING: &str = "Review Rating";
/// Raw header of the category column before normalization.
pub const RAW_CATEGORY: &str = "Category";

/// Date format used for purchase dates in both input and output files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a transactions CSV file into a Polars DataFrame.
///
/// Accepts both the raw export headers (`Customer ID`, ...) and the
/// normalized ones (`customer_id`, ...), so the enriched output of a previous
/// run can be read back, e.g. by the warehouse loader.
pub fn parse_transactions_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Cast columns to expected types if they were inferred incorrectly
    let mut lazy_df = df.lazy();

    // The customer identifier should be String (may be inferred as i64)
    for col_name in ["Customer ID", "customer_id"] {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::String));
        }
    }

    // Age should be Int64 (may be inferred as f64 in some exports)
    for col_name in ["Age", "age"] {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::Int64));
        }
    }

    // Numeric columns that should be Float64 (may be inferred as i64 if no decimal point)
    let float_columns = [RAW_AMOUNT, "purchase_amount", RAW_RATING, "review_rating"];

    for col_name in float_columns {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(
                when(col(col_name).is_not_null())
                    .then(col(col_name).cast(DataType::Float64))
                    .otherwise(lit(NULL).cast(DataType::Float64))
                    .alias(col_name),
            );
        }
    }

    // Purchase dates stay strings until the enrichment stage materializes them
    for col_name in ["Purchase Date", "purchase_date"] {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::String));
        }
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast columns to expected types")?;

    Ok(df)
}

/// Convert a normalized DataFrame to [`Transaction`] records.
///
/// Expects normalized column names. The purchase amount is required on every
/// row; an absent value aborts the conversion. Date strings must match
/// [`DATE_FORMAT`]; an unparseable value is fatal for the whole run, there is
/// no row-skipping. Derived columns are read when present so an enriched file
/// can round-trip.
pub fn dataframe_to_transactions(df: &DataFrame) -> Result<Vec<Transaction>> {
    let height = df.height();

    // Extract columns
    let amounts = df.column("purchase_amount")?.f64()?;

    let customer_ids = df.column("customer_id").ok().and_then(|c| c.str().ok());
    let ages = df.column("age").ok().and_then(|c| c.i64().ok());
    let genders = df.column("gender").ok().and_then(|c| c.str().ok());
    let items = df.column("item_purchased").ok().and_then(|c| c.str().ok());
    let categories = df.column("category").ok().and_then(|c| c.str().ok());
    let ratings = df.column("review_rating").ok().and_then(|c| c.f64().ok());
    let dates = df.column("purchase_date").ok().and_then(|c| c.str().ok());

    let rating_categories = df.column("rating_category").ok().and_then(|c| c.str().ok());
    let segments = df.column("spending_segment").ok().and_then(|c| c.str().ok());

    let mut records = Vec::with_capacity(height);

    for i in 0..height {
        let purchase_amount = amounts
            .get(i)
            .with_context(|| format!("Missing purchase_amount at row {}", i))?;

        let purchase_date = match dates.and_then(|col| col.get(i)) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .with_context(|| format!("Unparseable purchase_date '{}' at row {}", raw, i))?,
            ),
            None => None,
        };

        let mut tx = Transaction {
            customer_id: customer_ids.and_then(|col| col.get(i)).map(|s| s.to_string()),
            age: ages.and_then(|col| col.get(i)),
            gender: genders.and_then(|col| col.get(i)).map(|s| s.to_string()),
            item_purchased: items.and_then(|col| col.get(i)).map(|s| s.to_string()),
            category: categories.and_then(|col| col.get(i)).map(|s| s.to_string()),
            purchase_amount,
            review_rating: ratings.and_then(|col| col.get(i)),
            purchase_date,
            rating_category: rating_categories
                .and_then(|col| col.get(i))
                .and_then(RatingCategory::from_label),
            spending_segment: segments
                .and_then(|col| col.get(i))
                .and_then(SpendingSegment::from_label),
            month: None,
            weekday: None,
        };
        tx.derive_date_parts();

        records.push(tx);
    }

    Ok(records)
}

/// Convert [`Transaction`] records to a Polars DataFrame.
///
/// Produces the enriched column layout: the original fields followed by the
/// derived ones, ready for CSV export or the warehouse load.
pub fn transactions_to_dataframe(records: &[Transaction]) -> Result<DataFrame> {
    let n = records.len();

    // Prepare column vectors
    let mut customer_ids = Vec::with_capacity(n);
    let mut ages = Vec::with_capacity(n);
    let mut genders = Vec::with_capacity(n);
    let mut items = Vec::with_capacity(n);
    let mut categories = Vec::with_capacity(n);
    let mut amounts = Vec::with_capacity(n);
    let mut ratings = Vec::with_capacity(n);
    let mut rating_categories = Vec::with_capacity(n);
    let mut segments = Vec::with_capacity(n);
    let mut dates = Vec::with_capacity(n);
    let mut months = Vec::with_capacity(n);
    let mut weekdays = Vec::with_capacity(n);

    for tx in records {
        customer_ids.push(tx.customer_id.clone());
        ages.push(tx.age);
        genders.push(tx.gender.clone());
        items.push(tx.item_purchased.clone());
        categories.push(tx.category.clone());
        amounts.push(tx.purchase_amount);
        ratings.push(tx.review_rating);
        rating_categories.push(tx.rating_category.map(|c| c.as_str().to_string()));
        segments.push(tx.spending_segment.map(|s| s.as_str().to_string()));
        dates.push(tx.purchase_date.map(|d| d.format(DATE_FORMAT).to_string()));
        months.push(tx.month);
        weekdays.push(tx.weekday.clone());
    }

    let df = df!(
        "customer_id" => customer_ids,
        "age" => ages,
        "gender" => genders,
        "item_purchased" => items,
        "category" => categories,
        "purchase_amount" => amounts,
        "review_rating" => ratings,
        "rating_category" => rating_categories,
        "spending_segment" => segments,
        "purchase_date" => dates,
        "month" => months,
        "weekday" => weekdays,
    )?;

    Ok(df)
}
