//! Sliding-window request rate limiting.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

/// Admits at most `quota` requests within any trailing `window` interval.
///
/// The window belongs to exactly one client instance; every call path of
/// that client (async and blocking alike) draws admissions from the same
/// state. An admission timestamp is recorded only at the moment
/// [`acquire`](SlidingWindow::acquire) returns, so a caller that abandons
/// a pending acquire never consumes a slot.
pub(crate) struct SlidingWindow {
    quota: usize,
    window: Duration,
    admissions: Mutex<VecDeque<Instant>>,
}

impl SlidingWindow {
    /// `quota` is validated non-zero by `ClientConfig::validate`.
    pub(crate) fn new(quota: u32, window: Duration) -> Self {
        Self {
            quota: quota.max(1) as usize,
            window,
            admissions: Mutex::new(VecDeque::new()),
        }
    }

    /// Suspend until one more request fits in the window, then record the
    /// admission. Never fails; over-quota callers are delayed, not
    /// rejected.
    pub(crate) async fn acquire(&self) {
        loop {
            let wait = {
                let mut admissions = self.admissions.lock().expect("rate window lock poisoned");
                let now = Instant::now();
                while admissions
                    .front()
                    .is_some_and(|t| now.duration_since(*t) >= self.window)
                {
                    admissions.pop_front();
                }

                if admissions.len() < self.quota {
                    admissions.push_back(now);
                    return;
                }

                // The oldest admission leaves the window after exactly
                // this long; re-check then.
                self.window.saturating_sub(now.duration_since(admissions[0]))
            };
            tokio::time::sleep(wait).await;
        }
    }
}
