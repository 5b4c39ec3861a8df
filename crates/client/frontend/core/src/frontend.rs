//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the machine via RuntimeHandle:
/// - Subscribe to events (Machine, Display)
/// - Press the spin/stop control or trigger the cheat
/// - Query the current snapshot
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::{Event, RuntimeHandle, Topic};
/// use anyhow::Result;
///
/// struct PrintFrontend;
///
/// #[async_trait]
/// impl Frontend for PrintFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         let mut events = handle.subscribe(Topic::Machine);
///         handle.spin_or_stop().await?;
///         handle.spin_or_stop().await?;
///
///         while let Ok(event) = events.recv().await {
///             if let Event::Machine(runtime_event) = event {
///                 println!("{runtime_event:?}");
///             }
///         }
///
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application. The handle is
    /// dropped on return, which lets the runtime shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
