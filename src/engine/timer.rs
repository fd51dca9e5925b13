use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Repeating background tick. Dropping (or cancelling) the ticker stops the
/// thread before the next interval elapses.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// `on_tick` returns `false` to stop ticking on its own.
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if !on_tick() {
                        debug!("ticker receiver gone, stopping");
                        break;
                    }
                }
                // Explicit stop or the owning Ticker was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn ticks_until_cancelled() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);

        let ticker = Ticker::spawn(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            true
        });

        std::thread::sleep(Duration::from_millis(60));
        ticker.cancel();
        let after_cancel = count.load(Ordering::SeqCst);
        assert!(after_cancel > 0);

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn callback_can_stop_the_ticker() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);

        let _ticker = Ticker::spawn(Duration::from_millis(2), move || {
            seen.fetch_add(1, Ordering::SeqCst) < 2
        });

        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
