//! Domain models for retail customer transactions.
//!
//! This module provides the core data structures that represent a customer
//! purchase record, including the raw fields loaded from the source dataset
//! and the categorical features derived during enrichment.

use chrono::{Datelike, NaiveDate};

/// Three-way rating classification derived from the review rating.
///
/// The thresholds partition the rating scale without overlap:
/// ratings up to 2 are `Low`, up to 4 are `Medium`, everything above is
/// `High`. An absent rating has no category; callers keep the `Option`.
///
/// # Examples
///
/// ```
/// use csb_rust::core::domain::RatingCategory;
///
/// assert_eq!(RatingCategory::from_rating(2.0), RatingCategory::Low);
/// assert_eq!(RatingCategory::from_rating(2.1), RatingCategory::Medium);
/// assert_eq!(RatingCategory::from_rating(4.0), RatingCategory::Medium);
/// assert_eq!(RatingCategory::from_rating(4.1), RatingCategory::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingCategory {
    Low,
    Medium,
    High,
}

impl RatingCategory {
    /// Classifies a present review rating.
    pub fn from_rating(rating: f64) -> Self {
        if rating <= 2.0 {
            RatingCategory::Low
        } else if rating <= 4.0 {
            RatingCategory::Medium
        } else {
            RatingCategory::High
        }
    }

    /// Parses the label produced by [`RatingCategory::as_str`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(RatingCategory::Low),
            "Medium" => Some(RatingCategory::Medium),
            "High" => Some(RatingCategory::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingCategory::Low => "Low",
            RatingCategory::Medium => "Medium",
            RatingCategory::High => "High",
        }
    }
}

/// Spending classification derived from the purchase amount.
///
/// Amounts are bucketed into four right-closed bins:
/// (0, 50] is `Low`, (50, 150] is `Medium`, (150, 300] is `High` and
/// (300, 1000] is `VeryHigh`. Amounts outside (0, 1000] have no segment,
/// which is an undefined value rather than an error.
///
/// # Examples
///
/// ```
/// use csb_rust::core::domain::SpendingSegment;
///
/// assert_eq!(SpendingSegment::from_amount(50.0), Some(SpendingSegment::Low));
/// assert_eq!(SpendingSegment::from_amount(151.0), Some(SpendingSegment::High));
/// assert_eq!(SpendingSegment::from_amount(2000.0), None);
/// assert_eq!(SpendingSegment::from_amount(0.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingSegment {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SpendingSegment {
    /// Buckets a purchase amount, returning `None` for amounts outside the bins.
    pub fn from_amount(amount: f64) -> Option<Self> {
        if amount > 0.0 && amount <= 50.0 {
            Some(SpendingSegment::Low)
        } else if amount > 50.0 && amount <= 150.0 {
            Some(SpendingSegment::Medium)
        } else if amount > 150.0 && amount <= 300.0 {
            Some(SpendingSegment::High)
        } else if amount > 300.0 && amount <= 1000.0 {
            Some(SpendingSegment::VeryHigh)
        } else {
            None
        }
    }

    /// Parses the label produced by [`SpendingSegment::as_str`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(SpendingSegment::Low),
            "Medium" => Some(SpendingSegment::Medium),
            "High" => Some(SpendingSegment::High),
            "Very High" => Some(SpendingSegment::VeryHigh),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpendingSegment::Low => "Low",
            SpendingSegment::Medium => "Medium",
            SpendingSegment::High => "High",
            SpendingSegment::VeryHigh => "Very High",
        }
    }
}

/// A single retail transaction with its derived features.
///
/// Raw fields mirror the source dataset; the derived fields start out as
/// `None` and are populated by the enrichment stage. Optional raw fields stay
/// `None` when the source cell is empty. The purchase amount is the one field
/// required to be present on every row.
///
/// # Fields
///
/// * `customer_id` - Customer identifier; rows without one are excluded from
///   the per-customer summary only
/// * `age` - Customer age
/// * `gender` - Customer gender
/// * `item_purchased` - Purchased item name
/// * `category` - Product category, the grouping key for rating imputation
/// * `purchase_amount` - Purchase amount in USD, always present
/// * `review_rating` - Review rating, possibly absent until imputation
/// * `purchase_date` - Purchase date, synthesized when the source has none
/// * `rating_category` - Derived three-way rating classification
/// * `spending_segment` - Derived amount bucket
/// * `month` - Calendar month of the purchase date
/// * `weekday` - English day name of the purchase date
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub customer_id: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub item_purchased: Option<String>,
    pub category: Option<String>,
    pub purchase_amount: f64,
    pub review_rating: Option<f64>,
    pub purchase_date: Option<NaiveDate>,

    pub rating_category: Option<RatingCategory>,
    pub spending_segment: Option<SpendingSegment>,
    pub month: Option<u32>,
    pub weekday: Option<String>,
}

impl Transaction {
    /// Recomputes the month and weekday name from the purchase date.
    ///
    /// Both are pure functions of the date; a record without a materialized
    /// date keeps them absent.
    pub fn derive_date_parts(&mut self) {
        match self.purchase_date {
            Some(date) => {
                self.month = Some(date.month());
                self.weekday = Some(date.format("%A").to_string());
            }
            None => {
                self.month = None;
                self.weekday = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_category_covers_boundaries() {
        let thresholds = vec![
            (0.5, RatingCategory::Low),
            (2.0, RatingCategory::Low),
            (2.1, RatingCategory::Medium),
            (4.0, RatingCategory::Medium),
            (4.1, RatingCategory::High),
            (5.0, RatingCategory::High),
        ];

        for (rating, expected) in thresholds {
            assert_eq!(RatingCategory::from_rating(rating), expected);
        }
    }

    #[test]
    fn spending_segment_covers_boundaries() {
        let thresholds = vec![
            (0.0, None),
            (0.01, Some(SpendingSegment::Low)),
            (50.0, Some(SpendingSegment::Low)),
            (50.01, Some(SpendingSegment::Medium)),
            (150.0, Some(SpendingSegment::Medium)),
            (151.0, Some(SpendingSegment::High)),
            (300.0, Some(SpendingSegment::High)),
            (1000.0, Some(SpendingSegment::VeryHigh)),
            (1000.01, None),
            (-10.0, None),
        ];

        for (amount, expected) in thresholds {
            assert_eq!(SpendingSegment::from_amount(amount), expected, "amount {amount}");
        }
    }

    #[test]
    fn labels_round_trip() {
        for category in [RatingCategory::Low, RatingCategory::Medium, RatingCategory::High] {
            assert_eq!(RatingCategory::from_label(category.as_str()), Some(category));
        }
        for segment in [
            SpendingSegment::Low,
            SpendingSegment::Medium,
            SpendingSegment::High,
            SpendingSegment::VeryHigh,
        ] {
            assert_eq!(SpendingSegment::from_label(segment.as_str()), Some(segment));
        }
    }

    #[test]
    fn date_parts_follow_the_date() {
        let mut tx = Transaction {
            customer_id: Some("C1".to_string()),
            age: Some(30),
            gender: Some("F".to_string()),
            item_purchased: Some("Shoes".to_string()),
            category: Some("Footwear".to_string()),
            purchase_amount: 42.0,
            review_rating: Some(4.0),
            purchase_date: Some(NaiveDate::from_ymd_opt(2023, 6, 5).unwrap()),
            rating_category: None,
            spending_segment: None,
            month: None,
            weekday: None,
        };

        tx.derive_date_parts();
        assert_eq!(tx.month, Some(6));
        assert_eq!(tx.weekday.as_deref(), Some("Monday"));

        tx.purchase_date = None;
        tx.derive_date_parts();
        assert_eq!(tx.month, None);
        assert_eq!(tx.weekday, None);
    }
}
