// SPDX-License-Identifier: GPL-3.0-only

//! Cancellable countdown ticker
//!
//! Wraps a repeating timer in an explicitly cancellable handle. Leaving
//! the camera view or resetting the session must stop pending ticks so
//! a stale tick can never fire a capture; the session additionally
//! ignores ticks received outside the countdown state.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// A repeating tick source that stops when cancelled or dropped
pub struct CountdownTicker {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<()>,
}

impl CountdownTicker {
    /// Start ticking at the given period. The first tick arrives one
    /// full period after the call.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick completes immediately; skip it
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle, rx }
    }

    /// Start with the standard one-second countdown spacing
    pub fn per_second() -> Self {
        Self::start(crate::constants::timing::COUNTDOWN_TICK)
    }

    /// Wait for the next tick. Returns `None` after cancellation.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Stop the ticker; no further ticks will be delivered
    pub fn cancel(&mut self) {
        debug!("Countdown ticker cancelled");
        self.handle.abort();
        self.rx.close();
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_at_period() {
        let mut ticker = CountdownTicker::start(Duration::from_secs(1));
        let start = tokio::time::Instant::now();
        for _ in 0..3 {
            assert_eq!(ticker.tick().await, Some(()));
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let mut ticker = CountdownTicker::start(Duration::from_secs(1));
        assert_eq!(ticker.tick().await, Some(()));
        ticker.cancel();
        assert_eq!(ticker.tick().await, None);
    }
}
