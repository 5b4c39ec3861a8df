//! Slot machine client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (reel state machine) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! SLOT_STOP_STAGGER_MS=300 RUST_LOG=debug cargo run -p slot-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{RuntimeBuilder, RuntimeConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use slot_client::Client;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on exit
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting slot client");
    tracing::info!(
        spin_interval_ms = runtime_config.machine.spin_interval_ms,
        stop_stagger_ms = runtime_config.machine.stop_stagger_ms,
        highlight_ms = runtime_config.machine.highlight_ms,
        seed = ?runtime_config.seed,
        "machine configuration"
    );

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new().config(runtime_config).build().await?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build Client (composition layer) and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
