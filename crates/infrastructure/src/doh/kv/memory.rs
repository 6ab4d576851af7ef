use async_trait::async_trait;
use dashmap::DashMap;
use ferrous_doh_application::ports::KeyValueStore;
use ferrous_doh_domain::DomainError;

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
