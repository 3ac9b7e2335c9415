use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Source table shipped with the TOPIK word list release
pub const INPUT_PATH: &str = "Korean vocabulary list 6000 TOPIK final release v1.csv";
pub const OUTPUT_PATH: &str = "topik_vocab.json";
pub const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CSV table to read, relative to the working directory
    pub input_path: PathBuf,
    /// JSON file to create or overwrite
    pub output_path: PathBuf,
    /// Spaces per nesting level in the written JSON
    pub indent_width: usize,
}

impl Config {
    pub fn new() -> Self {
        Config {
            input_path: PathBuf::from(INPUT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            indent_width: INDENT_WIDTH,
        }
    }

    /// Same settings with both files moved under `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Config {
            input_path: dir.join(INPUT_PATH),
            output_path: dir.join(OUTPUT_PATH),
            indent_width: INDENT_WIDTH,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
