#![allow(dead_code)]

use asim_dns_application::ports::{EventSink, HostIdentity, HostInfoPort};
use asim_dns_domain::{DomainError, NormalizedRecord, RawEvent};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::Mutex;

/// Sink that records every consumed record for later inspection.
pub struct RecordingSink {
    records: Mutex<Vec<NormalizedRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub async fn records(&self) -> Vec<NormalizedRecord> {
        self.records.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn consume(&self, record: NormalizedRecord) -> Result<(), DomainError> {
        self.records.lock().await.push(record);
        Ok(())
    }
}

/// Sink that rejects every record.
pub struct FailingSink;

#[async_trait]
impl EventSink for FailingSink {
    async fn consume(&self, _record: NormalizedRecord) -> Result<(), DomainError> {
        Err(DomainError::SinkError("downstream unavailable".to_string()))
    }
}

pub struct FixedHostInfo;

impl HostInfoPort for FixedHostInfo {
    fn identity(&self) -> HostIdentity {
        HostIdentity {
            hostname: "testhost".to_string(),
            ip_address: Some("192.0.2.10".to_string()),
            os: "Windows".to_string(),
            os_version: Some("10.0.19042.1466".to_string()),
            domain_type: "WORKGROUP".to_string(),
        }
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub fn query_request(domain: &str, query_type: i64) -> RawEvent {
    RawEvent::new(3006, base_time(), 1234)
        .with_field("QueryName", domain)
        .with_field("QueryType", query_type)
}

pub fn query_response(domain: &str, status: i64) -> RawEvent {
    RawEvent::new(3008, base_time(), 1234)
        .with_field("QueryName", domain)
        .with_field("QueryType", 1i64)
        .with_field("Status", status)
}
