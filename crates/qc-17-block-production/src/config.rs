//! Configuration types for block production

use crate::domain::SelectionMode;
use crate::error::{BlockProductionError, Result};
use qc_06_mempool::{RecordFormat, SnapshotReader};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`BlockProductionConfig::max_block_weight`]
pub const ENV_MAX_BLOCK_WEIGHT: &str = "QC_MAX_BLOCK_WEIGHT";

/// Environment variable overriding [`BlockProductionConfig::selection_mode`]
pub const ENV_SELECTION_MODE: &str = "QC_SELECTION_MODE";

/// Runtime configuration for block production
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BlockProductionConfig {
    /// Block weight limit
    pub max_block_weight: u64,

    /// Handling of transactions with parents outside the block
    pub selection_mode: SelectionMode,

    /// Mempool snapshot input
    pub mempool: MempoolConfig,

    /// Block and result output
    pub output: OutputConfig,
}

impl Default for BlockProductionConfig {
    fn default() -> Self {
        Self {
            max_block_weight: crate::DEFAULT_MAX_BLOCK_WEIGHT,
            selection_mode: SelectionMode::default(),
            mempool: MempoolConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Mempool snapshot settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MempoolConfig {
    /// Snapshot path (default: mempool.csv)
    pub path: PathBuf,

    /// Skip the first line (default: true)
    pub has_header: bool,

    /// Record field delimiter (default: ',')
    pub field_delimiter: char,

    /// Parent id delimiter (default: ';')
    pub parent_delimiter: char,
}

impl Default for MempoolConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("mempool.csv"),
            has_header: true,
            field_delimiter: ',',
            parent_delimiter: ';',
        }
    }
}

/// Output settings
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// One transaction id per line (default: block.txt)
    pub block_path: PathBuf,

    /// Totals message (default: result.txt)
    pub result_path: PathBuf,

    /// Optional JSON summary of the template
    pub summary_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            block_path: PathBuf::from("block.txt"),
            result_path: PathBuf::from("result.txt"),
            summary_json: None,
        }
    }
}

impl BlockProductionConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| BlockProductionError::InvalidConfig(e.to_string()))
    }

    /// Load a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BlockProductionError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Apply `QC_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(ENV_MAX_BLOCK_WEIGHT) {
            self.max_block_weight = raw.trim().parse().map_err(|_| {
                BlockProductionError::InvalidConfig(format!(
                    "{ENV_MAX_BLOCK_WEIGHT} must be a positive integer, got {raw:?}"
                ))
            })?;
        }
        if let Some(raw) = lookup(ENV_SELECTION_MODE) {
            self.selection_mode = raw.parse()?;
        }
        Ok(())
    }

    /// Reject configurations that cannot produce a meaningful block.
    pub fn validate(&self) -> Result<()> {
        if self.max_block_weight == 0 {
            return Err(BlockProductionError::InvalidConfig(
                "max_block_weight must be positive".to_string(),
            ));
        }
        self.record_format()?;
        Ok(())
    }

    /// Snapshot record format
    pub fn record_format(&self) -> Result<RecordFormat> {
        RecordFormat::new(self.mempool.field_delimiter, self.mempool.parent_delimiter)
            .map_err(|e| BlockProductionError::InvalidConfig(e.to_string()))
    }

    /// Snapshot reader for this configuration
    pub fn snapshot_reader(&self) -> Result<SnapshotReader> {
        Ok(SnapshotReader::new(self.record_format()?, self.mempool.has_header))
    }
}
