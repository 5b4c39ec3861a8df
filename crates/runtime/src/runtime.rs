//! High-level runtime orchestrator.
//!
//! The runtime owns the machine worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the reels.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use slot_core::{MachineConfig, ReelSetController, SymbolRng};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::rng::StdSymbolRng;
use crate::workers::{Command, MachineWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub machine: MachineConfig,
    /// Fixed seed for reproducible reels; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            machine: MachineConfig::default(),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that hosts the slot machine.
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade for
/// clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Build a runtime from configuration alone and return its handle.
    ///
    /// The worker keeps running until every clone of the handle is dropped.
    pub async fn start(config: RuntimeConfig) -> Result<RuntimeHandle> {
        let runtime = Self::builder().config(config).build().await?;
        Ok(runtime.handle)
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events of one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Resolves once every outstanding handle clone has been dropped and the
    /// worker has drained its command queue.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        info!("runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    rng: Option<Box<dyn SymbolRng + Send>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the machine timings
    pub fn machine(mut self, machine: MachineConfig) -> Self {
        self.config.machine = machine;
        self
    }

    /// Seed the default `rand` generator for reproducible reels
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Provide a custom symbol source (takes precedence over the seed)
    pub fn rng(mut self, rng: impl SymbolRng + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let rng: Box<dyn SymbolRng + Send> = match (self.rng, self.config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(StdSymbolRng::seeded(seed)),
            (None, None) => Box::new(StdSymbolRng::from_entropy()),
        };

        let controller = ReelSetController::new(self.config.machine.clone(), rng)
            .map_err(RuntimeError::InvalidConfig)?;

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = MachineWorker::new(controller, command_rx, event_bus);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        info!(
            spin_interval_ms = self.config.machine.spin_interval_ms,
            stop_stagger_ms = self.config.machine.stop_stagger_ms,
            seeded = self.config.seed.is_some(),
            "runtime started"
        );

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
