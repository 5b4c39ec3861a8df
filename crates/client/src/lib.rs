//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (reel state machine and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a `RuntimeHandle`; the client keeps the
//! `Runtime` itself so it can shut the worker down once the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::{Context, Result};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives the independently built layers
/// 2. Client::run() transfers control to the frontend
/// 3. When the frontend returns, the runtime worker is shut down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until it exits, then stop the runtime.
    ///
    /// A frontend error takes precedence over a shutdown error.
    pub async fn run(self) -> Result<()> {
        let Client {
            runtime,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(runtime.handle()).await;
        // The frontend may still hold handle clones; drop it first.
        drop(frontend);

        let shutdown_result = runtime
            .shutdown()
            .await
            .context("runtime did not shut down cleanly");

        frontend_result?;
        shutdown_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use runtime::{RuntimeHandle, Topic};
    use slot_core::{MachineEvent, MachineState, SpinOutcome};
    use tokio::time::{Duration, sleep};

    /// Presses the controls on a fixed schedule, like a scripted player.
    struct ScriptedFrontend {
        settled: Option<SpinOutcome>,
        report: tokio::sync::mpsc::UnboundedSender<Option<SpinOutcome>>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
            let mut machine_rx = handle.subscribe(Topic::Machine);

            handle.spin_or_stop().await?;
            sleep(Duration::from_millis(300)).await;
            handle.cheat().await?;

            while let Ok(event) = machine_rx.recv().await {
                if let runtime::Event::Machine(MachineEvent::Settled { outcome }) = event {
                    self.settled = Some(outcome);
                    break;
                }
            }

            assert_eq!(handle.snapshot().await?.state, MachineState::Idle);
            let _ = self.report.send(self.settled);
            Ok(())
        }
    }

    struct FailingFrontend;

    #[async_trait]
    impl Frontend for FailingFrontend {
        async fn run(&mut self, _handle: RuntimeHandle) -> Result<()> {
            anyhow::bail!("terminal unavailable")
        }
    }

    async fn runtime() -> runtime::Runtime {
        runtime::Runtime::builder().seed(3).build().await.unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn runs_frontend_then_shuts_down_runtime() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let client = Client::builder()
            .runtime(runtime().await)
            .frontend(ScriptedFrontend {
                settled: None,
                report: tx,
            })
            .build()
            .unwrap();

        client.run().await.unwrap();

        assert_eq!(rx.recv().await, Some(Some(SpinOutcome::ForcedJackpot)));
    }

    #[tokio::test]
    async fn frontend_error_is_returned_after_shutdown() {
        let client = Client::builder()
            .runtime(runtime().await)
            .frontend(FailingFrontend)
            .build()
            .unwrap();

        let err = client.run().await.unwrap_err();
        assert!(err.to_string().contains("terminal unavailable"));
    }

    #[test]
    fn build_requires_both_layers() {
        let err = Client::builder().build().err().unwrap();
        assert!(err.to_string().contains("Runtime is required"));
    }
}
