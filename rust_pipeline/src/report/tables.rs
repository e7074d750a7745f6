use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::core::domain::Transaction;
use crate::preprocessing::validator::ValidationStats;
use crate::services::summaries::{CategorySummary, CustomerSummary};

/// How many rows the console previews show.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    /// Rows shown for the cleaned-data preview.
    pub preview_rows: usize,
    /// Rows shown for the customer summary preview.
    pub summary_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_rows: 10,
            summary_rows: 5,
        }
    }
}

fn fmt_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.to_vec());
    table
}

fn transaction_row(tx: &Transaction) -> Vec<String> {
    vec![
        fmt_opt(&tx.customer_id),
        fmt_opt(&tx.age),
        fmt_opt(&tx.gender),
        fmt_opt(&tx.item_purchased),
        fmt_opt(&tx.category),
        format!("{:.2}", tx.purchase_amount),
        fmt_opt(&tx.review_rating),
        fmt_opt(&tx.rating_category.map(|c| c.as_str())),
        fmt_opt(&tx.spending_segment.map(|s| s.as_str())),
    ]
}

/// Preview of the cleaned and enriched records, at most `limit` rows.
pub fn transactions_table(records: &[Transaction], limit: Option<usize>) -> Table {
    let mut table = new_table(&[
        "customer_id",
        "age",
        "gender",
        "item_purchased",
        "category",
        "purchase_amount",
        "review_rating",
        "rating_category",
        "spending_segment",
    ]);

    let limit = limit.unwrap_or(records.len());
    for tx in records.iter().take(limit) {
        table.add_row(transaction_row(tx));
    }
    table
}

/// Per-customer summary preview, at most `limit` rows.
pub fn customer_summary_table(rows: &[CustomerSummary], limit: Option<usize>) -> Table {
    let mut table = new_table(&["customer_id", "total_spent", "avg_rating", "purchase_count"]);

    let limit = limit.unwrap_or(rows.len());
    for row in rows.iter().take(limit) {
        table.add_row(vec![
            row.customer_id.clone(),
            format!("{:.2}", row.total_spent),
            row.avg_rating
                .map(|r| format!("{:.2}", r))
                .unwrap_or_default(),
            row.purchase_count.to_string(),
        ]);
    }
    table
}

/// Per-category summary, transposed: one column per category, one row per
/// metric.
pub fn category_summary_table(rows: &[CategorySummary]) -> Table {
    let mut header = vec!["metric".to_string()];
    header.extend(rows.iter().map(|row| row.category.clone()));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);

    let mut sum_row = vec!["total_amount".to_string()];
    sum_row.extend(rows.iter().map(|row| format!("{:.2}", row.total_amount)));
    table.add_row(sum_row);

    let mut mean_row = vec!["mean_amount".to_string()];
    mean_row.extend(rows.iter().map(|row| format!("{:.2}", row.mean_amount)));
    table.add_row(mean_row);

    let mut count_row = vec!["purchase_count".to_string()];
    count_row.extend(rows.iter().map(|row| row.purchase_count.to_string()));
    table.add_row(count_row);

    table
}

/// Outlier view with the identifying columns only. Shows every row.
pub fn outlier_table(records: &[Transaction]) -> Table {
    let mut table = new_table(&[
        "customer_id",
        "category",
        "purchase_amount",
        "review_rating",
        "rating_category",
        "spending_segment",
    ]);

    for tx in records {
        table.add_row(vec![
            fmt_opt(&tx.customer_id),
            fmt_opt(&tx.category),
            format!("{:.2}", tx.purchase_amount),
            fmt_opt(&tx.review_rating),
            fmt_opt(&tx.rating_category.map(|c| c.as_str())),
            fmt_opt(&tx.spending_segment.map(|s| s.as_str())),
        ]);
    }
    table
}

/// Missing-value profile of the raw input, one row per column.
pub fn missing_values_table(stats: &ValidationStats) -> Table {
    let mut table = new_table(&["column", "missing_values"]);
    for (column, missing) in &stats.missing_values {
        table.add_row(vec![column.clone(), missing.to_string()]);
    }
    table
}
