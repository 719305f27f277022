//! errtrail - error propagation through a handler -> service -> query chain.
//!
//! `query` creates one of three failure shapes, `service` passes it through,
//! wraps it, or replaces it, and `handler` logs it as JSON and checks whether
//! the original identity survived.

pub mod config;
pub mod error;
pub mod handler;
pub mod query;
pub mod service;
pub mod telemetry;
pub mod variant;

pub use config::{Config, ConfigError, LogConfig};
pub use error::{QueryError, SENTINEL, SentinelError, WrapSite};
pub use handler::{Outcome, handle};
pub use query::{Param, query};
pub use service::{Propagation, service};
pub use telemetry::TelemetryError;
pub use variant::Variant;

/// Install the logger and run `variant` with diagnostics on stdout.
///
/// Every binary is this one call.
pub fn run(variant: Variant) -> anyhow::Result<()> {
    let config = Config::default();
    telemetry::init(&config.log)?;

    let stdout = std::io::stdout();
    handle(variant, &mut stdout.lock())?;
    Ok(())
}
