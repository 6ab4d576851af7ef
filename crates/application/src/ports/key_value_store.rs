use async_trait::async_trait;
use ferrous_doh_domain::DomainError;

/// Durable byte store the provider metrics snapshot lives in.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError>;
}
