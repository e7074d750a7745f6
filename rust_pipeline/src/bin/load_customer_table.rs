use anyhow::{Context, Result};
use std::path::Path;

use csb_rust::db::postgres::{PostgresConfig, PostgresWarehouse};
use csb_rust::db::repository::CustomerWarehouse;
use csb_rust::io::loaders::TransactionLoader;

fn main() -> Result<()> {
    env_logger::init();

    // File path - read from args or use the pipeline's default output name
    let args: Vec<String> = std::env::args().collect();
    let input_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("customer_shopping_behavior_cleaned.csv");

    println!("=== Customer Table Loader ===");
    println!("Input file: {}", input_path);
    println!();

    let records = TransactionLoader::load_records_from_csv(Path::new(input_path))
        .with_context(|| format!("Failed to read {}", input_path))?;
    println!("Read {} rows", records.len());

    let config = PostgresConfig::from_env().context("Missing database configuration")?;

    match PostgresWarehouse::new(config).and_then(|mut warehouse| warehouse.replace_all(&records)) {
        Ok(loaded) => {
            println!();
            println!("✓ Loaded {} rows into the 'customer' table", loaded);
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Load failed: {}", e);
            Err(e.into())
        }
    }
}
