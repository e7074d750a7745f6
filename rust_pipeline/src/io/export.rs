use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Write the enriched record set to a CSV file, replacing any existing file.
pub fn write_enriched_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;

    log::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
