pub mod error;
pub mod loader;
pub mod mapper;
pub mod writer;

use std::path::PathBuf;

use topik_config::Config;

pub use error::ConvertError;
pub use loader::{load_rows, read_rows};
pub use mapper::{ColumnKind, map_row, map_rows, parse_frequency};
pub use writer::{to_json, write_records};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub records: usize,
    pub output_path: PathBuf,
}

/// Read the table, map every row, then write the JSON array in one go
pub fn convert(config: &Config) -> Result<ConvertSummary, ConvertError> {
    let rows = load_rows(&config.input_path)?;
    let records = map_rows(rows)?;
    write_records(&config.output_path, &records, config.indent_width)?;

    Ok(ConvertSummary {
        records: records.len(),
        output_path: config.output_path.clone(),
    })
}
