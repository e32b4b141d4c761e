//! # Drafttable
//!
//! Turn a text document into a draft Markdown task table.
//!
//! Drafttable pulls the first distinct words out of a document and lists each
//! one as an analysis task in a four-column pipe table, ready to be edited into
//! a real plan.
//!
//! ## Quick Start
//!
//! ```bash
//! # Writes draft_wbs.md in the current directory
//! drafttable notes.txt
//!
//! # Pick the output file and preview first
//! drafttable notes.txt --dry-run
//! drafttable notes.txt -o plan.md
//! ```
//!
//! ## Library
//!
//! ```
//! use drafttable::DraftGenerator;
//!
//! let table = DraftGenerator::new().generate("Review design, build plan");
//! assert_eq!(table.len(), 4);
//! assert!(table.to_markdown().contains("| ANA | A-3 | build analysis | – |"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub mod core;
pub mod draft;

// Re-export commonly used types
pub use self::core::{Config, DraftConfig, DraftError, DraftResult, DEFAULT_OUTPUT};
pub use draft::{DraftGenerator, DraftRow, DraftSummary, DraftTable, TableStyle, Tokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "drafttable";
