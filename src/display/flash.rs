// ============================================================================
// Flash Revert Timer
// Ends the "result unchanged" style after a fixed delay
// ============================================================================

use super::buffer::DisplayBuffer;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Display buffer shared between the UI thread and the revert timer
pub type SharedBuffer = Arc<Mutex<DisplayBuffer>>;

/// Spawn a fire-and-forget task that reverts the flash for `generation`.
///
/// The task resolves to true if it reverted the style; a newer write to the
/// buffer in the meantime makes it a no-op.
pub fn schedule_revert(buffer: SharedBuffer, generation: u64, delay: Duration) -> JoinHandle<bool> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let reverted = buffer.lock().revert_flash(generation);
        tracing::trace!(generation, reverted, "flash revert timer fired");
        reverted
    })
}
