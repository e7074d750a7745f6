use crate::algorithms::stats::percentile;
use crate::core::domain::Transaction;

/// Select the records whose purchase amount lies strictly above the given
/// quantile of all purchase amounts.
///
/// The result is an independent view; the input records are not modified.
/// Raising the quantile never adds rows to the selection.
pub fn amount_above_percentile(records: &[Transaction], p: f64) -> Vec<Transaction> {
    let amounts: Vec<f64> = records.iter().map(|tx| tx.purchase_amount).collect();

    match percentile(&amounts, p) {
        Some(cutoff) => records
            .iter()
            .filter(|tx| tx.purchase_amount > cutoff)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Select the records that combine a high purchase amount with a low review
/// rating: amount strictly above `min_amount` and rating at most `max_rating`.
///
/// Records without a rating never qualify.
pub fn low_rating_high_spend(
    records: &[Transaction],
    min_amount: f64,
    max_rating: f64,
) -> Vec<Transaction> {
    records
        .iter()
        .filter(|tx| {
            tx.purchase_amount > min_amount
                && tx
                    .review_rating
                    .map(|rating| rating <= max_rating)
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}
