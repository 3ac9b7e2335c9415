use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use topik_types::VocabRow;

use crate::error::ConvertError;

/// Load every row of the vocabulary table at `path`, in table order
pub fn load_rows(path: &Path) -> Result<Vec<VocabRow>, ConvertError> {
    tracing::info!("Loading vocabulary table: {}", path.display());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConvertError::InputNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let rows = read_rows(BufReader::new(file))?;
    tracing::info!("Loaded {} rows", rows.len());
    Ok(rows)
}

/// Parse CSV text with a header row into vocabulary rows
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<VocabRow>, ConvertError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_columns(&headers)?;

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: VocabRow = result.map_err(|e| short_row(e, &headers))?;
        rows.push(row);
    }

    Ok(rows)
}

/// A row cut short names the first header it has no cell for
fn short_row(err: csv::Error, headers: &StringRecord) -> ConvertError {
    if let csv::ErrorKind::UnequalLengths { expected_len, len, .. } = err.kind() {
        if len < expected_len {
            if let Some(column) = headers.get(*len as usize) {
                return ConvertError::MissingColumn(column.to_string());
            }
        }
    }
    err.into()
}

/// Fail on the first expected column the header does not name
fn check_columns(headers: &StringRecord) -> Result<(), ConvertError> {
    for column in VocabRow::COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ConvertError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Word,English,Hanja/Ref.,Classification,Frequency Rank,Complexity,Wordreference Link,Wiktionary Link\n";

    #[test]
    fn test_read_rows_in_order() {
        let csv = format!(
            "{HEADER}안녕,hello,,greeting,1,A1,http://x,http://y\n학교,school,學校,noun,2,A,http://a,http://b\n"
        );
        let rows = read_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word, "안녕");
        assert_eq!(rows[0].hanja, "");
        assert_eq!(rows[1].word, "학교");
        assert_eq!(rows[1].hanja, "學校");
        assert_eq!(rows[1].frequency_rank, "2");
    }

    #[test]
    fn test_header_only() {
        let rows = read_rows(HEADER.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "Notes,Word,English,Hanja/Ref.,Classification,Frequency Rank,Complexity,Wordreference Link,Wiktionary Link\n\
                   skip,물,water,,noun,7,A,l1,l2\n";
        let rows = read_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].word, "물");
        assert_eq!(rows[0].wiktionary_link, "l2");
    }

    #[test]
    fn test_renamed_column() {
        let csv = "Word,English,Hanja,Classification,Frequency Rank,Complexity,Wordreference Link,Wiktionary Link\n";
        match read_rows(csv.as_bytes()) {
            Err(ConvertError::MissingColumn(column)) => assert_eq!(column, "Hanja/Ref."),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_names_missing_column() {
        let csv = format!("{HEADER}가다,to go,,verb,3,A,l1\n");
        match read_rows(csv.as_bytes()) {
            Err(ConvertError::MissingColumn(column)) => assert_eq!(column, "Wiktionary Link"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_long_row_is_csv_error() {
        let csv = format!("{HEADER}가다,to go,,verb,3,A,l1,l2,extra\n");
        assert!(matches!(read_rows(csv.as_bytes()), Err(ConvertError::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_rows(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(ConvertError::InputNotFound(_))));
    }
}
