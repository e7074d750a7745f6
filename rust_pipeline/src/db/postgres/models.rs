use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::customer;
use crate::core::domain::Transaction;

/// Insertable row for the `customer` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = customer)]
pub struct NewCustomerRow {
    pub customer_id: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub item_purchased: Option<String>,
    pub category: Option<String>,
    pub purchase_amount: f64,
    pub review_rating: Option<f64>,
    pub rating_category: Option<String>,
    pub spending_segment: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub month: Option<i32>,
    pub weekday: Option<String>,
}

impl From<&Transaction> for NewCustomerRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            customer_id: tx.customer_id.clone(),
            age: tx.age,
            gender: tx.gender.clone(),
            item_purchased: tx.item_purchased.clone(),
            category: tx.category.clone(),
            purchase_amount: tx.purchase_amount,
            review_rating: tx.review_rating,
            rating_category: tx.rating_category.map(|c| c.as_str().to_string()),
            spending_segment: tx.spending_segment.map(|s| s.as_str().to_string()),
            purchase_date: tx.purchase_date,
            month: tx.month.map(|m| m as i32),
            weekday: tx.weekday.clone(),
        }
    }
}
