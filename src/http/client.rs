use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client with built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    /// Send a rate limited GET. Transport errors are returned as `reqwest::Error`
    /// so callers can decide whether they mean absence.
    pub async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.client.get(url).send().await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
