//! Customer shopping behavior cleaning and enrichment pipeline.
//!
//! Loads a transactions CSV, imputes missing review ratings per category,
//! normalizes column names, derives categorical features and purchase dates,
//! computes customer and category summaries, extracts outlier views, and
//! writes the enriched record set to a CSV file and, optionally, into a
//! Postgres warehouse table.

pub mod algorithms;
pub mod core;
pub mod db;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod report;
pub mod services;
pub mod transformations;
