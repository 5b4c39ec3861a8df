//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use runtime::Runtime;

use crate::config::RuntimeConfig;

/// Builder that assembles the machine runtime and configuration for clients.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let runtime = Runtime::builder()
            .config(self.config.runtime_config())
            .build()
            .await
            .context("failed to start the machine runtime")?;

        tracing::debug!(seed = ?self.config.seed, "runtime assembled");

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: RuntimeConfig,
    pub runtime: Runtime,
}
