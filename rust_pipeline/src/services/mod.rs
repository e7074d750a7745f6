//! Service layer computing the derived summary record sets.
//!
//! Summaries are read-only views recomputed in full on every run; they never
//! modify the enriched record set they are derived from.

pub mod summaries;

pub use summaries::{category_summary, customer_summary, CategorySummary, CustomerSummary};
