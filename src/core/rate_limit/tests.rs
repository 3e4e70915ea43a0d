//! Unit tests for the sliding-window rate limiter
//!
//! All tests run on a paused tokio clock, so sleeps complete instantly while
//! `Instant::now()` still advances by the slept amount.

use super::*;
use std::sync::Arc;

#[cfg(test)]
mod rate_limit_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_calls_under_limit_do_not_wait() {
        let limiter = RateLimiter::new(10);
        let start = Instant::now();

        for _ in 0..10 {
            limiter.acquire().await;
        }

        assert_eq!(Instant::now(), start);
        assert_eq!(limiter.in_flight(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_over_limit_waits_for_window() {
        let limiter = RateLimiter::new(10);
        let start = Instant::now();

        for _ in 0..10 {
            limiter.acquire().await;
        }
        limiter.acquire().await;

        assert_eq!(Instant::now() - start, Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_accounts_for_age_of_oldest_call() {
        let limiter = RateLimiter::new(2);
        let start = Instant::now();

        limiter.acquire().await;
        tokio::time::advance(Duration::from_secs(20)).await;
        limiter.acquire().await;
        tokio::time::advance(Duration::from_secs(10)).await;

        // Oldest call is 30s old, so the third waits the remaining 30s
        limiter.acquire().await;
        assert_eq!(Instant::now() - start, Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_never_wait() {
        let limiter = RateLimiter::new(1);

        for _ in 0..5 {
            let before = Instant::now();
            limiter.acquire().await;
            assert_eq!(Instant::now(), before);
            tokio::time::advance(Duration::from_secs(61)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_old_calls_are_evicted() {
        let limiter = RateLimiter::new(3);
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert_eq!(limiter.in_flight(), 3);

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(limiter.in_flight(), 0);

        let before = Instant::now();
        limiter.acquire().await;
        assert_eq!(Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_get_successive_windows() {
        let limiter = Arc::new(RateLimiter::new(2));
        let start = Instant::now();

        let handles: Vec<_> = (0..6)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move {
                    limiter.acquire().await;
                    Instant::now() - start
                })
            })
            .collect();

        let mut waits = Vec::new();
        for handle in handles {
            waits.push(handle.await.unwrap());
        }
        waits.sort();

        // Never more than two admissions inside any 60s window
        assert_eq!(
            waits,
            vec![
                Duration::ZERO,
                Duration::ZERO,
                Duration::from_secs(60),
                Duration::from_secs(60),
                Duration::from_secs(120),
                Duration::from_secs(120),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_waiter_releases_its_slot() {
        let limiter = RateLimiter::new(1);
        let start = Instant::now();
        limiter.acquire().await;

        // Second caller gives up while parked for the next window
        let waited = tokio::time::timeout(Duration::from_secs(1), limiter.acquire()).await;
        assert!(waited.is_err());
        assert_eq!(limiter.in_flight(), 1);

        tokio::time::advance(Duration::from_secs(59)).await;
        assert_eq!(Instant::now() - start, Duration::from_secs(60));

        let before = Instant::now();
        limiter.acquire().await;
        assert_eq!(Instant::now(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_waiter_does_not_delay_queue_behind_it() {
        let limiter = Arc::new(RateLimiter::new(1));
        let start = Instant::now();
        limiter.acquire().await;

        let cancelled = tokio::spawn({
            let limiter = Arc::clone(&limiter);
            async move { limiter.acquire().await }
        });
        tokio::task::yield_now().await;
        cancelled.abort();
        assert!(cancelled.await.unwrap_err().is_cancelled());

        // Only the first call occupies the window, so the next slot is at 60s
        limiter.acquire().await;
        assert_eq!(Instant::now() - start, Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_limit_is_clamped_to_one() {
        let limiter = RateLimiter::new(0);
        assert_eq!(limiter.max_calls(), 1);

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert_eq!(Instant::now() - start, Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_window() {
        let limiter = RateLimiter::with_window(1, Duration::from_secs(5));
        let start = Instant::now();

        limiter.acquire().await;
        limiter.acquire().await;

        assert_eq!(Instant::now() - start, Duration::from_secs(5));
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(RateLimiter::default().max_calls(), DEFAULT_MAX_CALLS_PER_MINUTE);
    }
}
