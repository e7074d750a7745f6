use polars::prelude::*;

use crate::parsing::csv_parser::{RAW_AMOUNT, RAW_CATEGORY, RAW_RATING};

/// Fill absent review ratings with the median rating of the same category.
///
/// The median is computed from the present values of each category group, so
/// a group whose ratings are all absent is left untouched. Rows without a
/// category are never imputed. Present values are never modified and the row
/// count is unchanged.
///
/// Returns the imputed DataFrame together with the number of filled values.
pub fn impute_ratings_by_category(df: DataFrame) -> PolarsResult<(DataFrame, usize)> {
    let missing_before = df.column(RAW_RATING)?.null_count();

    let df = df
        .lazy()
        .with_column(
            when(col(RAW_CATEGORY).is_not_null())
                .then(
                    col(RAW_RATING)
                        .fill_null(col(RAW_RATING).median().over([col(RAW_CATEGORY)])),
                )
                .otherwise(col(RAW_RATING))
                .alias(RAW_RATING),
        )
        .collect()?;

    let missing_after = df.column(RAW_RATING)?.null_count();
    let imputed = missing_before.saturating_sub(missing_after);
    if imputed > 0 {
        log::info!("Imputed {} missing review ratings", imputed);
    }

    Ok((df, imputed))
}

/// Normalize column names: lower-case, spaces replaced with underscores, and
/// the currency column renamed to `purchase_amount`.
///
/// Renaming is a no-op when the currency column is not present, e.g. when the
/// input already carries normalized headers.
pub fn normalize_column_names(mut df: DataFrame) -> PolarsResult<DataFrame> {
    let new_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_lowercase().replace(' ', "_"))
        .collect();
    df.set_column_names(new_names)?;

    let lowered_amount = RAW_AMOUNT.to_lowercase().replace(' ', "_");
    let has_amount = df
        .get_column_names()
        .iter()
        .any(|name| name.as_str() == lowered_amount);
    if has_amount {
        df.rename(&lowered_amount, "purchase_amount".into())?;
    }

    Ok(df)
}
