//! Data transformation and cleaning utilities.
//!
//! This module provides the DataFrame-level cleaning operations of the
//! pipeline (group-median rating imputation, column-name normalization) and
//! the record-level filters that extract outlier views.

pub mod cleaning;
pub mod filtering;

pub use cleaning::{impute_ratings_by_category, normalize_column_names};
pub use filtering::{amount_above_percentile, low_rating_high_spend};
