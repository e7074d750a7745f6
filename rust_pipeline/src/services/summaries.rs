use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::domain::Transaction;

/// Per-customer aggregate: total spend, mean rating and purchase count.
///
/// One row per distinct customer identifier, sorted by identifier. Records
/// without an identifier are excluded from this aggregation only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spent: f64,
    pub avg_rating: Option<f64>,
    pub purchase_count: usize,
}

/// Per-category aggregate over the purchase amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_amount: f64,
    pub mean_amount: f64,
    pub purchase_count: usize,
}

#[derive(Default)]
struct Accumulator {
    amount_sum: f64,
    rating_sum: f64,
    rating_count: usize,
    purchases: usize,
}

/// Group the records by customer identifier and aggregate spend and rating.
///
/// The mean rating ignores records whose rating is still absent after
/// imputation; a customer with no rated purchases has no average.
pub fn customer_summary(records: &[Transaction]) -> Vec<CustomerSummary> {
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();

    for tx in records {
        if let Some(id) = &tx.customer_id {
            let acc = groups.entry(id.clone()).or_default();
            acc.amount_sum += tx.purchase_amount;
            acc.purchases += 1;
            if let Some(rating) = tx.review_rating {
                acc.rating_sum += rating;
                acc.rating_count += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|(customer_id, acc)| CustomerSummary {
            customer_id,
            total_spent: acc.amount_sum,
            avg_rating: if acc.rating_count > 0 {
                Some(acc.rating_sum / acc.rating_count as f64)
            } else {
                None
            },
            purchase_count: acc.purchases,
        })
        .collect()
}

/// Group the records by category and aggregate the purchase amount.
pub fn category_summary(records: &[Transaction]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();

    for tx in records {
        if let Some(category) = &tx.category {
            let acc = groups.entry(category.clone()).or_default();
            acc.amount_sum += tx.purchase_amount;
            acc.purchases += 1;
        }
    }

    groups
        .into_iter()
        .map(|(category, acc)| CategorySummary {
            category,
            total_amount: acc.amount_sum,
            mean_amount: acc.amount_sum / acc.purchases as f64,
            purchase_count: acc.purchases,
        })
        .collect()
}
