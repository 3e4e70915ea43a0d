//! Sliding-window limiter for outbound upstream calls.
//!
//! The PUBG developer key allows a fixed number of requests per minute.
//! Every call the client makes goes through [`RateLimiter::acquire`], which
//! parks the caller until the call fits in the trailing window.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::{sleep_until, Instant};
use tracing::debug;

#[cfg(test)]
mod tests;

pub const DEFAULT_MAX_CALLS_PER_MINUTE: usize = 10;

pub const RATE_WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct RateLimiter {
    max_calls: usize,
    window: Duration,
    /// Admission instants, oldest first. Entries may lie in the future for
    /// callers that are still waiting for their slot. Never locked across an
    /// await.
    calls: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// `max_calls` per 60 seconds. Zero is treated as one.
    pub fn new(max_calls: usize) -> Self {
        Self::with_window(max_calls, RATE_WINDOW)
    }

    pub fn with_window(max_calls: usize, window: Duration) -> Self {
        let max_calls = max_calls.max(1);
        Self {
            max_calls,
            window,
            calls: Mutex::new(VecDeque::with_capacity(max_calls + 1)),
        }
    }

    pub fn max_calls(&self) -> usize {
        self.max_calls
    }

    /// Wait until one more call fits in the window, then claim it.
    ///
    /// The bookkeeping happens under the lock; the wait itself does not, so
    /// concurrent callers queue up for successive slots instead of each
    /// other. A caller dropped while waiting gives its slot back.
    pub async fn acquire(&self) {
        let now = Instant::now();
        let admit_at = {
            let mut calls = self.lock_calls();
            while let Some(&oldest) = calls.front() {
                if now.saturating_duration_since(oldest) >= self.window {
                    calls.pop_front();
                } else {
                    break;
                }
            }

            let admit_at = if calls.len() < self.max_calls {
                now
            } else {
                // The slot frees up one window after the call N places back.
                calls[calls.len() - self.max_calls] + self.window
            };
            calls.push_back(admit_at);
            admit_at
        };

        if admit_at > now {
            debug!(
                wait_ms = (admit_at - now).as_millis() as u64,
                "rate limit reached, delaying upstream call"
            );
            let reservation = Reservation {
                limiter: self,
                at: admit_at,
            };
            sleep_until(admit_at).await;
            std::mem::forget(reservation);
        }
    }

    /// Calls admitted (or scheduled) within the current window.
    pub fn in_flight(&self) -> usize {
        let now = Instant::now();
        let calls = self.lock_calls();
        calls
            .iter()
            .filter(|&&t| now.saturating_duration_since(t) < self.window)
            .count()
    }

    fn lock_calls(&self) -> MutexGuard<'_, VecDeque<Instant>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Slot booked by a waiting caller; released if the caller goes away first.
struct Reservation<'a> {
    limiter: &'a RateLimiter,
    at: Instant,
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        let mut calls = self.limiter.lock_calls();
        if let Some(i) = calls.iter().rposition(|&t| t == self.at) {
            calls.remove(i);
            debug!("waiting caller cancelled, slot released");
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CALLS_PER_MINUTE)
    }
}
