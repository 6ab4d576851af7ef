mod cache_policy;
mod gaming_classifier;
mod provider_ranker;

pub use cache_policy::{CacheDecision, CachePolicy};
pub use gaming_classifier::GamingClassifier;
pub use provider_ranker::ProviderRanker;
