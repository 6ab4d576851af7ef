use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid base64url payload: {0}")]
    InvalidBase64(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport request to {server} failed: {message}")]
    TransportRequest { server: String, message: String },

    #[error("All upstream providers failed")]
    UpstreamExhausted,

    #[error("No upstream providers configured")]
    NoProviders,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
