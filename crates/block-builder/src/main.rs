//! Block Builder entry point.

use anyhow::Result;
use block_builder::{run, Cli, SUBSYSTEM};
use clap::Parser;
use quantum_telemetry::{init_telemetry, log_event, TelemetryConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_telemetry(&TelemetryConfig::for_subsystem("17", SUBSYSTEM))?;

    let config = cli.load_config()?;
    log_event!(
        info,
        SUBSYSTEM,
        "Configuration loaded",
        max_block_weight = config.max_block_weight,
        mode = %config.selection_mode,
        mempool = %config.mempool.path.display()
    );

    let template = run(&config)?;
    println!("{}", template.result_message());
    Ok(())
}
