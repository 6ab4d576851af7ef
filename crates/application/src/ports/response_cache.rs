use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::QueryClass;

#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status: u16,
    pub body: Bytes,
    /// `Cache-Control: max-age` advertised when the entry was written.
    pub max_age: u32,
    pub class: QueryClass,
}

impl CachedResponse {
    pub fn is_negative(&self) -> bool {
        !(200..300).contains(&self.status)
    }
}

/// Shared response cache keyed by canonical query URL.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn lookup(&self, key: &str) -> Option<CachedResponse>;

    /// Stores `response` under `key` for `ttl_secs`, replacing any previous entry.
    async fn store(&self, key: &str, response: CachedResponse, ttl_secs: u32);
}
