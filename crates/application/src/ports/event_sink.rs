use asim_dns_domain::{DomainError, NormalizedRecord};
use async_trait::async_trait;

/// Downstream consumer of normalized records, one record at a time.
///
/// Delivery failures are reported to the caller for logging and otherwise
/// ignored; no retry or backpressure flows back into the engine.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn consume(&self, record: NormalizedRecord) -> Result<(), DomainError>;
}
