use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::StageRecord;

/// Discovered stages with the time they were fetched
#[derive(Debug, Clone)]
pub struct CachedStages {
    pub stages: Vec<StageRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl CachedStages {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

type Slot = Arc<Mutex<Option<CachedStages>>>;

/// In-memory stage cache keyed by competition id.
///
/// Each key has its own lock, held while a discovery runs, so concurrent
/// requests for one competition wait for the same discovery instead of
/// starting their own.
pub struct StageCache {
    ttl: Duration,
    slots: Mutex<HashMap<String, Slot>>,
}

impl StageCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Return fresh cached stages for `key`, or run `discover` and store its
    /// result. Errors are passed through and never cached.
    pub async fn get_or_discover<F, Fut>(&self, key: &str, discover: F) -> Result<Vec<StageRecord>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<StageRecord>>>,
    {
        let slot = self.slot(key).await;
        let mut entry = slot.lock().await;

        if let Some(cached) = entry.as_ref().filter(|c| c.is_fresh(Utc::now(), self.ttl)) {
            debug!("Stage cache hit for {}", key);
            return Ok(cached.stages.clone());
        }

        info!("Stage cache miss for {}, discovering", key);
        let stages = discover().await?;
        *entry = Some(CachedStages {
            stages: stages.clone(),
            fetched_at: Utc::now(),
        });

        Ok(stages)
    }

    /// Peek at the entry for `key`, fresh or not
    pub async fn get(&self, key: &str) -> Option<CachedStages> {
        let slot = self.slots.lock().await.get(key).cloned()?;
        let entry = slot.lock().await;
        entry.clone()
    }

    pub async fn invalidate(&self, key: &str) {
        if let Some(slot) = self.slots.lock().await.get(key).cloned() {
            *slot.lock().await = None;
            info!("Invalidated stage cache for {}", key);
        }
    }

    async fn slot(&self, key: &str) -> Slot {
        let mut slots = self.slots.lock().await;
        slots.entry(key.to_string()).or_default().clone()
    }
}
