//! Parsers for the customer shopping behavior dataset.
//!
//! This module reads the delimited source file into a typed representation
//! and converts between Polars DataFrames and [`Transaction`] records.
//!
//! [`Transaction`]: crate::core::domain::Transaction

pub mod csv_parser;
