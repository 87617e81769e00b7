//! Randomized inter-request delay
//!
//! A cooperative pause between item fetches to keep the request rate
//! polite toward the remote host. The delay is drawn uniformly from the
//! configured range and has no correctness implication.

use crate::config::ThrottleConfig;
use std::time::Duration;

/// Politeness delay between sequential requests
#[derive(Debug, Clone)]
pub struct Throttle {
    min_delay: Duration,
    max_delay: Duration,
}

impl Throttle {
    /// Creates a throttle from the configured delay range
    ///
    /// Config validation guarantees `min-delay-ms <= max-delay-ms`.
    pub fn new(config: &ThrottleConfig) -> Self {
        Self {
            min_delay: Duration::from_millis(config.min_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }

    /// Draws the next delay uniformly from the configured range
    pub fn next_delay(&self) -> Duration {
        if self.min_delay == self.max_delay {
            return self.min_delay;
        }
        let min = self.min_delay.as_millis() as u64;
        let max = self.max_delay.as_millis() as u64;
        Duration::from_millis(rand::random_range(min..=max))
    }

    /// Sleeps for one randomized delay
    pub async fn pause(&self) {
        tokio::time::sleep(self.next_delay()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_stays_within_range() {
        let throttle = Throttle::new(&ThrottleConfig {
            min_delay_ms: 800,
            max_delay_ms: 1000,
        });

        for _ in 0..100 {
            let delay = throttle.next_delay();
            assert!(delay >= Duration::from_millis(800));
            assert!(delay <= Duration::from_millis(1000));
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let throttle = Throttle::new(&ThrottleConfig {
            min_delay_ms: 50,
            max_delay_ms: 50,
        });
        assert_eq!(throttle.next_delay(), Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_pause_completes() {
        let throttle = Throttle::new(&ThrottleConfig {
            min_delay_ms: 1,
            max_delay_ms: 2,
        });
        throttle.pause().await;
    }
}
