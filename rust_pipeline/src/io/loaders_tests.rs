#[cfg(test)]
mod tests {
    use crate::io::export::write_enriched_csv;
    use crate::io::loaders::TransactionLoader;
    use crate::preprocessing::pipeline::PreprocessPipeline;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_load_from_csv_basic() {
        let csv_content = "\
Customer ID,Age,Gender,Item Purchased,Category,Purchase Amount (USD),Review Rating
1,25,Female,Blouse,Clothing,53,3.1
2,31,Male,Sneakers,Footwear,84,
";

        let temp_file = create_temp_csv(csv_content);
        let result = TransactionLoader::load_from_csv(temp_file.path()).unwrap();

        assert_eq!(result.num_rows, 2);

        // numeric identifiers are read back as strings
        let ids = result.dataframe.column("Customer ID").unwrap().str().unwrap();
        assert_eq!(ids.get(0), Some("1"));

        // whole-number amounts are read back as floats
        let amounts = result
            .dataframe
            .column("Purchase Amount (USD)")
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(amounts.get(0), Some(53.0));

        let ratings = result.dataframe.column("Review Rating").unwrap().f64().unwrap();
        assert_eq!(ratings.get(1), None);
    }

    #[test]
    fn test_enriched_csv_round_trip() {
        let csv_content = "\
Customer ID,Age,Gender,Item Purchased,Category,Purchase Amount (USD),Review Rating
1,25,Female,Blouse,Clothing,53,3.1
2,31,Male,Sneakers,Footwear,84,1.5
";

        let temp_file = create_temp_csv(csv_content);
        let loaded = TransactionLoader::load_from_csv(temp_file.path()).unwrap();

        let mut result = PreprocessPipeline::new().process(loaded.dataframe).unwrap();

        let out_file = NamedTempFile::new().unwrap();
        write_enriched_csv(&mut result.dataframe, out_file.path()).unwrap();

        let records = TransactionLoader::load_records_from_csv(out_file.path()).unwrap();
        assert_eq!(records.len(), 2);

        for (written, read) in result.records.iter().zip(&records) {
            assert_eq!(written.customer_id, read.customer_id);
            assert_eq!(written.purchase_amount, read.purchase_amount);
            assert_eq!(written.rating_category, read.rating_category);
            assert_eq!(written.spending_segment, read.spending_segment);
            assert_eq!(written.purchase_date, read.purchase_date);
            assert_eq!(written.month, read.month);
            assert_eq!(written.weekday, read.weekday);
        }
    }
}
