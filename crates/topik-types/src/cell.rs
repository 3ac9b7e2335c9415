use serde::{Deserialize, Serialize};

/// Markers that tabular exports use for an empty cell
const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a raw cell is empty or exactly an NA marker; whitespace is data
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty() || MISSING_MARKERS.contains(&raw)
}

/// A passthrough cell whose JSON type follows the column's contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Parse a cell as a number, `None` if it is not one
    pub fn numeric(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Some(CellValue::Integer(value));
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(CellValue::Float(value)),
            _ => None,
        }
    }

    /// Keep the cell as text, or `Missing` when it is empty
    pub fn text(raw: &str) -> Self {
        if is_missing(raw) {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }
}
