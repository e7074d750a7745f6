use anyhow::Result;
use std::path::Path;

use csb_rust::io::export;
use csb_rust::preprocessing::pipeline::PreprocessPipeline;
use csb_rust::report::tables;
use csb_rust::report::tables::DisplayConfig;

fn main() -> Result<()> {
    env_logger::init();

    // File paths - read from args or use defaults
    let args: Vec<String> = std::env::args().collect();
    let input_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("customer_shopping_behavior.csv");
    let output_path = args
        .get(2)
        .map(|s| s.as_str())
        .unwrap_or("customer_shopping_behavior_cleaned.csv");

    println!("=== Customer Shopping Behavior Pipeline ===");
    println!("Input file: {}", input_path);
    println!("Output file: {}", output_path);
    println!();

    let pipeline = PreprocessPipeline::new();
    let mut result = match pipeline.process_csv(Path::new(input_path)) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("✗ Pipeline failed: {:#}", e);
            return Err(e);
        }
    };

    let display = DisplayConfig::default();

    println!("--- Missing Values ---");
    println!("{}", tables::missing_values_table(&result.validation.stats));
    println!(
        "Imputed {} review ratings, synthesized {} purchase dates",
        result.imputed_ratings, result.synthesized_dates
    );

    println!();
    println!("--- Cleaned Data (first {} rows) ---", display.preview_rows);
    println!(
        "{}",
        tables::transactions_table(&result.records, Some(display.preview_rows))
    );

    println!();
    println!("--- Customer Summary (first {} rows) ---", display.summary_rows);
    println!(
        "{}",
        tables::customer_summary_table(&result.customer_summary, Some(display.summary_rows))
    );

    println!();
    println!("--- Category Summary ---");
    println!("{}", tables::category_summary_table(&result.category_summary));

    println!();
    println!("--- Outlier Transactions (High Purchase Amount) ---");
    println!("{}", tables::outlier_table(&result.outliers));

    println!();
    println!("--- Low Rating, High Spend ---");
    println!("{}", tables::outlier_table(&result.low_rating_high_spend));

    export::write_enriched_csv(&mut result.dataframe, Path::new(output_path))?;

    println!();
    println!(
        "✓ Cleaned and enriched dataset saved as '{}'",
        output_path
    );

    Ok(())
}
