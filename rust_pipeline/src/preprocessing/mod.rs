pub mod enricher;
pub mod pipeline;
pub mod validator;

pub use enricher::TransactionEnricher;
pub use pipeline::{PreprocessConfig, PreprocessPipeline, PipelineResult, preprocess_transactions};
pub use validator::{DatasetValidator, ValidationResult, ValidationStats};
