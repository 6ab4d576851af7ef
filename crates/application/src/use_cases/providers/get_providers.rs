use crate::ports::DohResolver;
use ferrous_doh_domain::RankedProvider;
use std::sync::Arc;

pub struct GetProvidersUseCase {
    resolver: Arc<dyn DohResolver>,
}

impl GetProvidersUseCase {
    pub fn new(resolver: Arc<dyn DohResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self) -> Vec<RankedProvider> {
        self.resolver.ranked_providers().await
    }
}
