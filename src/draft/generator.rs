//! Draft table generation.
//!
//! Reads a text document, picks its first distinct words and writes them out
//! as a Markdown task table.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::table::{DraftTable, TableStyle};
use super::tokenizer::Tokenizer;
use crate::core::{DraftConfig, DraftError, DraftResult};

/// Generator that turns a document into a draft table.
#[derive(Debug, Clone)]
pub struct DraftGenerator {
    tokenizer: Tokenizer,
    style: TableStyle,
    max_rows: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSummary {
    /// Document that was read
    pub input: PathBuf,

    /// File that was written
    pub output: PathBuf,

    /// Rows written
    pub rows: usize,

    /// Distinct tokens found in the document
    pub unique_tokens: usize,
}

impl DraftGenerator {
    /// Create a generator with the default settings.
    pub fn new() -> Self {
        let config = DraftConfig::default();
        Self {
            tokenizer: Tokenizer::default(),
            style: TableStyle::from(&config),
            max_rows: config.max_rows,
        }
    }

    /// Create a generator from configuration.
    pub fn from_config(config: &DraftConfig) -> DraftResult<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.min_token_len)?,
            style: TableStyle::from(config),
            max_rows: config.max_rows,
        })
    }

    /// Set the maximum number of rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the fixed column values.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Maximum number of rows.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Build the table for a document's text.
    pub fn generate(&self, text: &str) -> DraftTable {
        self.build(text).0
    }

    /// Build the table and report how many distinct tokens the text had.
    fn build(&self, text: &str) -> (DraftTable, usize) {
        let tokens = self.tokenizer.unique(text);
        tracing::debug!(unique = tokens.len(), max_rows = self.max_rows, "Extracted tokens");
        (DraftTable::from_tokens(tokens.as_slice(), &self.style, self.max_rows), tokens.len())
    }

    /// Read a document and build its table.
    pub fn generate_from_file(&self, input: &Path) -> DraftResult<DraftTable> {
        let text = read_input(input)?;
        Ok(self.generate(&text))
    }

    /// Write a table to `output`, replacing any existing file.
    pub fn save(&self, table: &DraftTable, output: &Path) -> DraftResult<()> {
        std::fs::write(output, table.to_markdown())
            .map_err(|source| DraftError::OutputAccess { path: output.to_path_buf(), source })?;

        tracing::info!(path = %output.display(), rows = table.len(), "Wrote draft table");
        Ok(())
    }

    /// Read `input`, generate the table and write it to `output`.
    pub fn run(&self, input: &Path, output: &Path) -> DraftResult<DraftSummary> {
        let text = read_input(input)?;
        let (table, unique_tokens) = self.build(&text);
        self.save(&table, output)?;

        Ok(DraftSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            rows: table.len(),
            unique_tokens,
        })
    }
}

impl Default for DraftGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn read_input(input: &Path) -> DraftResult<String> {
    let text = std::fs::read_to_string(input)
        .map_err(|source| DraftError::InputAccess { path: input.to_path_buf(), source })?;
    tracing::debug!(path = %input.display(), bytes = text.len(), "Read input");
    Ok(text)
}
