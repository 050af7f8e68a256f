use asim_dns_application::ports::EventSink;
use asim_dns_domain::{DomainError, NormalizedRecord};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Writes each normalized record as one JSON object per line.
///
/// The writer is shared behind a mutex so a single sink can serve the
/// receiver's event path and any future flush paths concurrently.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the inner writer, flushing first.
    pub fn into_inner(self) -> Result<W, DomainError> {
        let mut writer = self
            .writer
            .into_inner()
            .map_err(|_| DomainError::IoError("sink writer lock poisoned".to_string()))?;
        writer
            .flush()
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        Ok(writer)
    }
}

#[async_trait]
impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    async fn consume(&self, record: NormalizedRecord) -> Result<(), DomainError> {
        let line = serde_json::to_string(&record)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DomainError::IoError("sink writer lock poisoned".to_string()))?;
        writeln!(writer, "{line}").map_err(|e| DomainError::IoError(e.to_string()))?;
        Ok(())
    }
}
