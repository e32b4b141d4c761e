//! Draft table generation.
//!
//! - `Tokenizer` - Extracts alphabetic words from a document
//! - `DraftTable` - The Markdown task table and its rows
//! - `DraftGenerator` - Reads a document and writes its draft table

mod generator;
mod table;
mod tokenizer;

pub use generator::{DraftGenerator, DraftSummary};
pub use table::{DraftRow, DraftTable, TableStyle, TABLE_HEADER, TABLE_SEPARATOR};
pub use tokenizer::{extract_tokens, unique_tokens, Tokenizer, DEFAULT_MIN_TOKEN_LEN};
