//! # Quantum Telemetry
//!
//! Logging and tracing setup shared by Quantum-Chain binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quantum_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::for_subsystem("17", "block-production"))?;
//!     // Events now go to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `quantum-chain` | Service name |
//! | `QC_LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | | Overrides `QC_LOG_LEVEL` when it parses |
//! | `QC_JSON_LOGS` | `false` | JSON output |
//! | `QC_SUBSYSTEM_ID` | `00` | Subsystem identifier |

#![warn(missing_docs)]

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber could not be installed
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    /// The log filter did not parse
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and tracing.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(config)
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// use quantum_telemetry::subsystem_span;
///
/// let _span = subsystem_span!("build_block", subsystem = "block-production").entered();
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
