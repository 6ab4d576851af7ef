use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::DomainError;
use ferrous_doh_infrastructure::doh::{DohTransport, HttpReply};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, &'static [u8]),
    Error,
}

#[derive(Debug, Clone)]
struct Script {
    delay: Duration,
    reply: Reply,
}

/// Scripted upstreams keyed by URL. Latency is simulated with tokio sleeps,
/// so tests run deterministically under a paused clock.
#[derive(Default)]
pub struct MockTransport {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<HashMap<String, u64>>,
    queries: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, url: &str, delay_ms: u64, reply: Reply) -> Self {
        self.scripts.lock().unwrap().insert(
            url.to_string(),
            Script {
                delay: Duration::from_millis(delay_ms),
                reply,
            },
        );
        self
    }

    pub fn calls(&self, url: &str) -> u64 {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> u64 {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohTransport for MockTransport {
    async fn get(
        &self,
        url: &str,
        dns_b64: &str,
        timeout: Duration,
    ) -> Result<HttpReply, DomainError> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;
        self.queries.lock().unwrap().push(dns_b64.to_string());

        let script = self
            .scripts
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Script {
                delay: Duration::ZERO,
                reply: Reply::Error,
            });

        if tokio::time::timeout(timeout, tokio::time::sleep(script.delay))
            .await
            .is_err()
        {
            return Err(DomainError::TransportTimeout {
                server: url.to_string(),
            });
        }

        match script.reply {
            Reply::Status(status, body) => Ok(HttpReply {
                status,
                body: Bytes::from_static(body),
            }),
            Reply::Error => Err(DomainError::TransportRequest {
                server: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}
