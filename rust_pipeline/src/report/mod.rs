//! Console table previews of the pipeline outputs.
//!
//! Rendering is driven by an explicit [`DisplayConfig`] passed in by the
//! caller; there is no global display state.
//!
//! [`DisplayConfig`]: tables::DisplayConfig

pub mod tables;

pub use tables::{
    category_summary_table, customer_summary_table, missing_values_table, outlier_table,
    transactions_table, DisplayConfig,
};
