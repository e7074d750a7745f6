use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;

use crate::core::domain::{RatingCategory, SpendingSegment, Transaction};

/// Year used for synthesized purchase dates.
const SYNTHETIC_YEAR: i32 = 2023;

/// Enricher that derives the categorical features and materializes dates.
///
/// Produces a new record set; derivation of the rating category and spending
/// segment is deterministic, date synthesis draws a uniform month and day per
/// record. Day values stay within 1..=28 so every synthesized date is a valid
/// calendar date in any month.
pub struct TransactionEnricher {
    synthesize_dates: bool,
}

impl TransactionEnricher {
    /// Create an enricher; `synthesize_dates` should be set when the input
    /// had no purchase-date column at all.
    pub fn new(synthesize_dates: bool) -> Self {
        Self { synthesize_dates }
    }

    /// Derive rating category, spending segment, purchase date, month and
    /// weekday for every record.
    pub fn enrich(&self, records: Vec<Transaction>) -> Result<Vec<Transaction>> {
        let mut rng = rand::thread_rng();
        let mut enriched = Vec::with_capacity(records.len());
        let mut synthesized = 0usize;

        for mut tx in records {
            tx.rating_category = tx.review_rating.map(RatingCategory::from_rating);
            tx.spending_segment = SpendingSegment::from_amount(tx.purchase_amount);

            if self.synthesize_dates {
                tx.purchase_date = Some(Self::random_date(&mut rng)?);
                synthesized += 1;
            }
            tx.derive_date_parts();

            enriched.push(tx);
        }

        if synthesized > 0 {
            log::info!("Synthesized {} purchase dates", synthesized);
        }

        Ok(enriched)
    }

    fn random_date(rng: &mut impl Rng) -> Result<NaiveDate> {
        let month = rng.gen_range(1..=12u32);
        let day = rng.gen_range(1..=28u32);
        NaiveDate::from_ymd_opt(SYNTHETIC_YEAR, month, day)
            .with_context(|| format!("Invalid synthesized date {}-{}-{}", SYNTHETIC_YEAR, month, day))
    }
}
