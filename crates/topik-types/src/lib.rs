pub mod cell;
pub mod types;

pub use cell::{CellValue, is_missing};
pub use types::{VocabRecord, VocabRow};
