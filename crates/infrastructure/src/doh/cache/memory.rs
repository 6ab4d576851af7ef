use async_trait::async_trait;
use dashmap::DashMap;
use ferrous_doh_application::ports::{CachedResponse, ResponseCache};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    response: CachedResponse,
    expires_at: Instant,
}

/// Bounded in-process response cache with per-entry expiry.
///
/// Expired entries are dropped lazily on lookup and in bulk by
/// [`purge_expired`](Self::purge_expired). When full, expired entries are
/// evicted first, then the entry closest to expiry.
pub struct MemoryResponseCache {
    entries: DashMap<String, Entry>,
    max_entries: usize,
}

impl MemoryResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, e| e.expires_at > now);
        before.saturating_sub(self.entries.len())
    }

    fn make_room(&self) {
        if self.purge_expired() > 0 && self.entries.len() < self.max_entries {
            return;
        }
        while self.entries.len() >= self.max_entries {
            let victim = self
                .entries
                .iter()
                .min_by_key(|e| e.value().expires_at)
                .map(|e| e.key().clone());
            match victim {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl ResponseCache for MemoryResponseCache {
    async fn lookup(&self, key: &str) -> Option<CachedResponse> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return Some(entry.response.clone());
            }
        } else {
            return None;
        }
        self.entries.remove_if(key, |_, e| e.expires_at <= now);
        None
    }

    async fn store(&self, key: &str, response: CachedResponse, ttl_secs: u32) {
        if ttl_secs == 0 {
            return;
        }
        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            self.make_room();
        }
        debug!(key = %key, ttl_secs, status = response.status, "Caching response");
        self.entries.insert(
            key.to_string(),
            Entry {
                response,
                expires_at: Instant::now() + Duration::from_secs(ttl_secs as u64),
            },
        );
    }
}
