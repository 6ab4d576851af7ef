//! Ferrous DoH Domain Layer
pub mod config;
pub mod dns_wire;
pub mod errors;
pub mod provider;
pub mod record_type;
pub mod resolution;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use provider::{MetricsSnapshot, Provider, ProviderMetric, RankedProvider};
pub use record_type::RecordType;
pub use resolution::{
    CacheStatus, DohRequest, DohResponse, QueryClass, ResolutionOutcome, TRANSPORT_FAILURE_STATUS,
};
