//! Core functionality shared by the generator and the CLI.

mod config;
mod error;

pub use config::{check_min_token_len, Config, DraftConfig, DEFAULT_OUTPUT, LOCAL_CONFIG};
pub use error::{DraftError, DraftResult};
