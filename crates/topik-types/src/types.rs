use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// One line of the source vocabulary table
#[derive(Debug, Clone, Deserialize)]
pub struct VocabRow {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "English")]
    pub english: String,
    #[serde(rename = "Hanja/Ref.")]
    pub hanja: String,
    #[serde(rename = "Classification")]
    pub classification: String,
    #[serde(rename = "Frequency Rank")]
    pub frequency_rank: String,
    #[serde(rename = "Complexity")]
    pub complexity: String,
    #[serde(rename = "Wordreference Link")]
    pub wordreference_link: String,
    #[serde(rename = "Wiktionary Link")]
    pub wiktionary_link: String,
}

impl VocabRow {
    /// Header names every source table must carry
    pub const COLUMNS: [&'static str; 8] = [
        "Word",
        "English",
        "Hanja/Ref.",
        "Classification",
        "Frequency Rank",
        "Complexity",
        "Wordreference Link",
        "Wiktionary Link",
    ];
}

/// One entry of the output JSON array; field order is the key order on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabRecord {
    pub korean: String,
    pub en: String,
    /// Chinese gloss, not sourced yet
    pub zh: Option<String>,
    pub hanja: Option<String>,
    pub classification: String,
    pub frequency: i64,
    pub complexity: CellValue,
    pub wordreferencelink: String,
    pub wiktionarylink: String,
}
