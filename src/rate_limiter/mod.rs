use tokio::sync::Mutex;
use tokio::time::{Duration, Instant, sleep_until};

/// Keeps a minimum gap between consecutive requests.
///
/// Shared between concurrent callers; each caller reserves the next free slot
/// before sleeping so requests never bunch up.
pub struct RateLimiter {
    delay: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            next_slot: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let slot = self.reserve_slot().await;
        if let Some(at) = slot {
            sleep_until(at).await;
        }
    }

    async fn reserve_slot(&self) -> Option<Instant> {
        let mut next_slot = self.next_slot.lock().await;
        let now = Instant::now();

        let wait_until = (*next_slot).filter(|at| *at > now);
        let start = wait_until.unwrap_or(now);
        *next_slot = Some(start + self.delay);

        wait_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(500);
        let start = Instant::now();

        limiter.wait().await;

        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn test_following_requests_are_spaced() {
        let limiter = RateLimiter::new(500);
        let start = Instant::now();

        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;

        assert!(Instant::now() - start >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_gap_counts_towards_delay() {
        let limiter = RateLimiter::new(500);
        limiter.wait().await;
        tokio::time::sleep(Duration::from_millis(800)).await;

        let start = Instant::now();
        limiter.wait().await;

        assert_eq!(Instant::now(), start);
    }
}
