#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Frequency Rank on row {row} is not an integer: {value:?}")]
    FrequencyNotInteger { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
