use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use topik_types::VocabRecord;

use crate::error::ConvertError;

/// Pretty JSON array with `indent_width` spaces; non-ASCII stays literal
pub fn to_json(records: &[VocabRecord], indent_width: usize) -> Result<Vec<u8>, ConvertError> {
    let indent = " ".repeat(indent_width);
    let mut buf = Vec::new();
    {
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
    }
    Ok(buf)
}

/// Create or overwrite `path`, only after serialization succeeds
pub fn write_records(
    path: &Path,
    records: &[VocabRecord],
    indent_width: usize,
) -> Result<(), ConvertError> {
    let json = to_json(records, indent_width)?;
    fs::write(path, &json)?;
    tracing::info!(
        "Wrote {} records ({} bytes) to {}",
        records.len(),
        json.len(),
        path.display()
    );
    Ok(())
}
