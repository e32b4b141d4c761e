//! Configuration management for Drafttable.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{DraftError, DraftResult};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "draft_wbs.md";

/// Local configuration file name.
pub const LOCAL_CONFIG: &str = ".drafttable.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Draft table settings
    pub draft: DraftConfig,
}

/// Settings for the draft table generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Output path (defaults to `draft_wbs.md` in the working directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Maximum number of rows to emit
    pub max_rows: usize,

    /// Minimum length of an alphabetic run to count as a token
    pub min_token_len: usize,

    /// Value of the Phase column
    pub phase: String,

    /// Prefix of the Step column (`<prefix>-<index>`)
    pub step_prefix: String,

    /// Word appended to each token in the Task column
    pub task_suffix: String,

    /// Value of the Guard column
    pub guard: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            output: None,
            max_rows: 5,
            min_token_len: 3,
            phase: "ANA".to_string(),
            step_prefix: "A".to_string(),
            task_suffix: "analysis".to_string(),
            guard: "\u{2013}".to_string(),
        }
    }
}

impl DraftConfig {
    /// Resolve the output path, preferring an explicit override.
    pub fn output_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Check values that would make generation meaningless.
    pub fn validate(&self) -> DraftResult<()> {
        check_min_token_len(self.min_token_len)
    }
}

/// Reject a minimum token length that would match empty runs.
pub fn check_min_token_len(min_len: usize) -> DraftResult<()> {
    if min_len == 0 {
        return Err(DraftError::Config("min_token_len must be at least 1".to_string()));
    }
    Ok(())
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Looks for config in:
    /// 1. `.drafttable.toml` in current directory
    /// 2. `~/.config/drafttable/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> DraftResult<Self> {
        let local_config = PathBuf::from(LOCAL_CONFIG);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = Self::config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> DraftResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DraftError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| DraftError::Config(format!("invalid {}: {e}", path.display())))?;
        config.draft.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> DraftResult<String> {
        toml::to_string_pretty(self).map_err(|e| DraftError::Config(e.to_string()))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("drafttable"))
    }
}
