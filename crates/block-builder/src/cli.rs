//! Command-line interface and configuration loading.
//!
//! Precedence, lowest first: built-in defaults, `--config` TOML file,
//! `QC_*` environment variables, command-line flags.

use anyhow::{Context, Result};
use clap::Parser;
use qc_17_block_production::{BlockProductionConfig, SelectionMode};
use std::path::PathBuf;
use tracing::info;

/// Block Builder: assemble one block from a mempool snapshot
#[derive(Parser, Debug, Default)]
#[command(name = "block-builder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "QC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mempool snapshot (txid,fee,weight,parents)
    #[arg(short, long, env = "QC_MEMPOOL_PATH")]
    pub mempool: Option<PathBuf>,

    /// Block weight limit
    #[arg(long)]
    pub max_weight: Option<u64>,

    /// Selection mode: cascading or strict
    #[arg(long)]
    pub mode: Option<SelectionMode>,

    /// Output file for included transaction ids
    #[arg(long)]
    pub block_out: Option<PathBuf>,

    /// Output file for the totals message
    #[arg(long)]
    pub result_out: Option<PathBuf>,

    /// Also write a JSON summary here
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// The snapshot has no header line
    #[arg(long)]
    pub no_header: bool,
}

impl Cli {
    /// Resolve the effective configuration using the process environment.
    pub fn load_config(&self) -> Result<BlockProductionConfig> {
        self.load_config_with(|key| std::env::var(key).ok())
    }

    /// Resolve the effective configuration with an arbitrary environment lookup.
    pub fn load_config_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<BlockProductionConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                BlockProductionConfig::from_file(path)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => BlockProductionConfig::default(),
        };

        config
            .apply_overrides(lookup)
            .context("applying environment overrides")?;

        self.apply_flags(&mut config);
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn apply_flags(&self, config: &mut BlockProductionConfig) {
        if let Some(path) = &self.mempool {
            config.mempool.path = path.clone();
        }
        if let Some(max_weight) = self.max_weight {
            config.max_block_weight = max_weight;
        }
        if let Some(mode) = self.mode {
            config.selection_mode = mode;
        }
        if let Some(path) = &self.block_out {
            config.output.block_path = path.clone();
        }
        if let Some(path) = &self.result_out {
            config.output.result_path = path.clone();
        }
        if self.summary_json.is_some() {
            config.output.summary_json = self.summary_json.clone();
        }
        if self.no_header {
            config.mempool.has_header = false;
        }
    }
}
