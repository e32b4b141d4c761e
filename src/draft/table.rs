//! Draft table structures and rendering.

use serde::{Deserialize, Serialize};

use crate::core::{DraftConfig, DraftResult};

/// Header line of the rendered table.
pub const TABLE_HEADER: &str = "| Phase | Step | Task | Guard |";

/// Separator line under the header.
pub const TABLE_SEPARATOR: &str = "|------|------|------|------|";

/// Fixed column values applied to every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    /// Phase column value
    pub phase: String,

    /// Step identifier prefix
    pub step_prefix: String,

    /// Appended to each token in the Task column
    pub task_suffix: String,

    /// Guard column placeholder
    pub guard: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::from(&DraftConfig::default())
    }
}

impl From<&DraftConfig> for TableStyle {
    fn from(config: &DraftConfig) -> Self {
        Self {
            phase: config.phase.clone(),
            step_prefix: config.step_prefix.clone(),
            task_suffix: config.task_suffix.clone(),
            guard: config.guard.clone(),
        }
    }
}

/// A single row of the draft table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRow {
    pub phase: String,
    pub step: String,
    pub task: String,
    pub guard: String,
}

impl DraftRow {
    /// Build the row for `token` at 1-based position `index`.
    pub fn new(token: &str, index: usize, style: &TableStyle) -> Self {
        Self {
            phase: style.phase.clone(),
            step: format!("{}-{}", style.step_prefix, index),
            task: format!("{} {}", token, style.task_suffix),
            guard: style.guard.clone(),
        }
    }

    /// Render as a pipe-table line (without trailing newline).
    pub fn to_markdown(&self) -> String {
        format!("| {} | {} | {} | {} |", self.phase, self.step, self.task, self.guard)
    }
}

/// The draft table: header plus up to `max_rows` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTable {
    pub rows: Vec<DraftRow>,
}

impl DraftTable {
    /// Build a table from tokens, keeping at most `max_rows` of them.
    ///
    /// Rows are numbered from 1 in token order. Short inputs are not padded.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], style: &TableStyle, max_rows: usize) -> Self {
        let rows = tokens
            .iter()
            .take(max_rows)
            .enumerate()
            .map(|(i, token)| DraftRow::new(token.as_ref(), i + 1, style))
            .collect();

        Self { rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Convert to markdown format.
    pub fn to_markdown(&self) -> String {
        let mut md = String::with_capacity(64 * (self.rows.len() + 2));
        md.push_str(TABLE_HEADER);
        md.push('\n');
        md.push_str(TABLE_SEPARATOR);
        md.push('\n');

        for row in &self.rows {
            md.push_str(&row.to_markdown());
            md.push('\n');
        }

        md
    }

    /// Convert to a pretty JSON array of rows.
    pub fn to_json(&self) -> DraftResult<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}
