//! Cache layer that orchestrates freshness checks with network fetching.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use super::traits::{CacheResult, Clock, SystemClock};

#[derive(Debug, Clone)]
struct CachedEntry<T> {
  data: T,
  fetched_at: DateTime<Utc>,
}

/// In-memory cache keyed by request URL.
///
/// Clones share the same underlying map, so every clone of a client sees
/// the same cached payloads for the lifetime of the process.
pub struct ResponseCache<T> {
  entries: Arc<Mutex<HashMap<String, CachedEntry<T>>>>,
  /// How long a payload may be reused
  ttl: Duration,
  clock: Arc<dyn Clock>,
}

impl<T: Clone> ResponseCache<T> {
  /// Create a cache reading the wall clock, with a five minute TTL.
  pub fn new() -> Self {
    Self::with_clock(Arc::new(SystemClock))
  }

  pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
    Self {
      entries: Arc::new(Mutex::new(HashMap::new())),
      ttl: Duration::minutes(5),
      clock,
    }
  }

  /// Set the freshness window.
  pub fn with_ttl(mut self, ttl: Duration) -> Self {
    self.ttl = ttl;
    self
  }

  fn entries(&self) -> MutexGuard<'_, HashMap<String, CachedEntry<T>>> {
    // A panic mid-insert cannot leave the map half-written, so poisoning is ignored.
    self.entries.lock().unwrap_or_else(|e| e.into_inner())
  }

  /// Check if a payload fetched at `fetched_at` may still be reused.
  fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
    self.clock.now() - fetched_at < self.ttl
  }

  /// Return the cached payload for `key` if it is still fresh.
  pub fn get(&self, key: &str) -> Option<CacheResult<T>> {
    let entries = self.entries();
    let cached = entries.get(key)?;
    if self.is_fresh(cached.fetched_at) {
      Some(CacheResult::from_cache(cached.data.clone(), cached.fetched_at))
    } else {
      None
    }
  }

  /// Store a payload stamped with the current time, replacing any previous one.
  pub fn insert(&self, key: &str, data: T) -> DateTime<Utc> {
    let fetched_at = self.clock.now();
    self
      .entries()
      .insert(key.to_string(), CachedEntry { data, fetched_at });
    fetched_at
  }

  /// Number of stored payloads, fresh or expired.
  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.entries().len()
  }

  /// Fetch with cache-first strategy.
  ///
  /// 1. Check cache - if fresh, return immediately
  /// 2. If expired/missing, fetch from network
  /// 3. Store the new payload; errors are returned and nothing is cached
  pub async fn fetch<F, Fut, E>(&self, key: &str, fetcher: F) -> Result<CacheResult<T>, E>
  where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
  {
    if let Some(cached) = self.get(key) {
      debug!("response cache hit");
      return Ok(cached);
    }

    debug!("response cache miss");
    let data = fetcher().await?;
    let fetched_at = self.insert(key, data.clone());
    Ok(CacheResult::from_network(data, fetched_at))
  }
}

impl<T: Clone> Default for ResponseCache<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for ResponseCache<T> {
  fn clone(&self) -> Self {
    Self {
      entries: Arc::clone(&self.entries),
      ttl: self.ttl,
      clock: Arc::clone(&self.clock),
    }
  }
}
