use topik_types::{CellValue, VocabRecord, VocabRow, is_missing};

use crate::error::ConvertError;

/// How a passthrough column's cells are typed in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Text unless every non-missing cell is numeric; fractions or gaps make it float
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = ColumnKind::Integer;

        for cell in cells {
            if is_missing(cell) {
                kind = ColumnKind::Float;
                continue;
            }
            match CellValue::numeric(cell) {
                Some(CellValue::Integer(_)) => {}
                Some(_) => kind = ColumnKind::Float,
                None => return ColumnKind::Text,
            }
        }

        kind
    }

    pub fn cell(self, raw: &str) -> CellValue {
        if is_missing(raw) {
            return CellValue::Missing;
        }
        match (self, CellValue::numeric(raw)) {
            (ColumnKind::Integer, Some(value)) => value,
            (ColumnKind::Float, Some(CellValue::Integer(value))) => CellValue::Float(value as f64),
            (ColumnKind::Float, Some(value)) => value,
            _ => CellValue::text(raw),
        }
    }
}

/// Map every row in order; the first failing row aborts the batch
pub fn map_rows(rows: Vec<VocabRow>) -> Result<Vec<VocabRecord>, ConvertError> {
    let complexity = ColumnKind::infer(rows.iter().map(|row| row.complexity.as_str()));
    tracing::debug!("Complexity column typed as {:?}", complexity);

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| map_row(idx + 1, row, complexity))
        .collect()
}

/// Map one table row; `row_number` is 1-based and only used in errors
pub fn map_row(
    row_number: usize,
    row: VocabRow,
    complexity: ColumnKind,
) -> Result<VocabRecord, ConvertError> {
    let frequency = parse_frequency(row_number, &row.frequency_rank)?;
    let hanja = if is_missing(&row.hanja) {
        None
    } else {
        Some(row.hanja)
    };

    Ok(VocabRecord {
        korean: row.word,
        en: row.english,
        zh: None,
        hanja,
        classification: row.classification,
        frequency,
        complexity: complexity.cell(&row.complexity),
        wordreferencelink: row.wordreference_link,
        wiktionarylink: row.wiktionary_link,
    })
}

/// Integer rank; integral decimals such as `12.0` are accepted
pub fn parse_frequency(row_number: usize, raw: &str) -> Result<i64, ConvertError> {
    let trimmed = raw.trim();
    if let Ok(rank) = trimmed.parse::<i64>() {
        return Ok(rank);
    }

    match trimmed.parse::<f64>() {
        Ok(rank)
            if rank.is_finite()
                && rank.fract() == 0.0
                && rank >= i64::MIN as f64
                && rank < i64::MAX as f64 =>
        {
            Ok(rank as i64)
        }
        _ => Err(ConvertError::FrequencyNotInteger {
            row: row_number,
            value: raw.to_string(),
        }),
    }
}
