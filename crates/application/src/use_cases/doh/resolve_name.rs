use crate::ports::DohResolver;
use ferrous_doh_domain::dns_wire::{encode_b64url, MessageBuilder, TransactionIdSource};
use ferrous_doh_domain::{DohRequest, DohResponse, DomainError, RecordType};
use std::sync::Arc;
use tracing::debug;

/// `/resolve?name=&type=`: builds a query and resolves it as standard traffic.
pub struct ResolveNameUseCase {
    resolver: Arc<dyn DohResolver>,
    ids: Arc<dyn TransactionIdSource>,
}

impl ResolveNameUseCase {
    pub fn new(resolver: Arc<dyn DohResolver>, ids: Arc<dyn TransactionIdSource>) -> Self {
        Self { resolver, ids }
    }

    pub async fn execute(
        &self,
        name: &str,
        record_type: Option<&str>,
    ) -> Result<DohResponse, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".into()));
        }

        let record_type = record_type.map(RecordType::from_mnemonic).unwrap_or_default();
        debug!(name = %name, record_type = %record_type, "Resolving by name");

        let query = MessageBuilder::build_query(name, record_type, self.ids.as_ref());
        let request = DohRequest::standard(encode_b64url(&query));
        self.resolver.resolve(&request).await
    }
}
