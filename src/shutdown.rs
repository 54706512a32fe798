//! Ctrl+C handling.
//!
//! The handler notifies the watch loop through a channel, so the loop can
//! return between passes instead of being killed mid-write.

use std::sync::OnceLock;

use crossbeam::channel::{self, Receiver, Sender};

/// Shutdown signal sender for the watch loop
static SHUTDOWN_TX: OnceLock<Sender<()>> = OnceLock::new();

/// Setup the global Ctrl+C handler. Call once, before watching starts.
///
/// Returns the receiving end that fires once Ctrl+C is pressed.
pub fn setup_shutdown_handler() -> anyhow::Result<Receiver<()>> {
    let (tx, rx) = channel::bounded(1);
    let _ = SHUTDOWN_TX.set(tx);

    ctrlc::set_handler(|| {
        if let Some(tx) = SHUTDOWN_TX.get() {
            let _ = tx.try_send(());
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))?;

    Ok(rx)
}
