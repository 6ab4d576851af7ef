//! HTTPS transport for DNS-over-HTTPS upstreams (RFC 8484, GET form).
//!
//! ```text
//! GET /dns-query?dns=<base64url message> HTTP/2
//! Accept: application/dns-message
//! ```

use super::{DohTransport, HttpReply};
use async_trait::async_trait;
use ferrous_doh_domain::DomainError;
use reqwest::Url;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared client with connection pooling. Per-call deadlines are applied on
/// top of this upper bound.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

#[derive(Debug, Default, Clone, Copy)]
pub struct HttpsTransport;

impl HttpsTransport {
    pub fn new() -> Self {
        Self
    }

    /// `url` with `dns` set to the encoded query, replacing any existing value.
    pub fn query_url(url: &str, dns_b64: &str) -> Result<Url, DomainError> {
        let mut parsed = Url::parse(url).map_err(|e| DomainError::TransportRequest {
            server: url.to_string(),
            message: format!("invalid URL: {}", e),
        })?;

        let retained: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, _)| k != "dns")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        {
            let mut pairs = parsed.query_pairs_mut();
            pairs.clear();
            for (k, v) in &retained {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("dns", dns_b64);
        }
        Ok(parsed)
    }
}

#[async_trait]
impl DohTransport for HttpsTransport {
    async fn get(
        &self,
        url: &str,
        dns_b64: &str,
        timeout: Duration,
    ) -> Result<HttpReply, DomainError> {
        let target = Self::query_url(url, dns_b64)?;
        debug!(url = %url, query_len = dns_b64.len(), "Sending DoH query");

        let exchange = async {
            let response = SHARED_CLIENT
                .get(target)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(HttpReply { status, body })
        };

        let reply = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: url.to_string(),
            })?
            .map_err(|e| DomainError::TransportRequest {
                server: url.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            url = %url,
            status = reply.status,
            response_len = reply.body.len(),
            "DoH response received"
        );
        Ok(reply)
    }
}
