//! The one-shot completion timer.
//!
//! Armed when the journey reaches its target; reports the epoch it was armed
//! for once the delay elapses. Arming again or cancelling aborts whatever was
//! pending, so at most one expiry is ever in flight.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug)]
struct PendingTimer {
    epoch: u64,
    join_handle: JoinHandle<()>,
    abort_handle: AbortHandle,
}

#[derive(Debug)]
pub(crate) struct CompletionTimer {
    tx: mpsc::UnboundedSender<u64>,
    rx: mpsc::UnboundedReceiver<u64>,
    pending: Option<PendingTimer>,
}

impl CompletionTimer {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub(crate) fn arm(&mut self, epoch: u64, delay: Duration) {
        self.cancel();

        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        let tx = self.tx.clone();
        let wait = Abortable::new(
            async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(epoch);
            },
            abort_registration,
        );
        let join_handle = tokio::spawn(async move {
            if wait.await.is_err() {
                debug!(epoch, "Completion timer aborted");
            }
        });

        debug!(epoch, delay_ms = delay.as_millis() as u64, "Completion timer armed");
        self.pending = Some(PendingTimer {
            epoch,
            join_handle,
            abort_handle,
        });
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort_handle.abort();
            debug!(epoch = pending.epoch, "Completion timer cancelled");
        }
        // An expiry may have been sent before the abort landed.
        while self.rx.try_recv().is_ok() {}
    }

    /// Epoch of an expiry that arrived since the last poll, if any.
    pub(crate) fn try_fired(&mut self) -> Option<u64> {
        let epoch = self.rx.try_recv().ok()?;
        if self.pending.as_ref().is_some_and(|p| p.epoch == epoch) {
            self.pending = None;
        }
        Some(epoch)
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| !p.join_handle.is_finished())
    }

    pub(crate) fn pending_epoch(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.epoch)
    }
}

impl Drop for CompletionTimer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort_handle.abort();
        }
    }
}
