//! The broker-connection seam between the producer client and the
//! transport that actually moves bytes.

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// Acknowledgment returned by the broker for one delivered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    /// Topic the record was written to
    pub topic: String,
    /// Partition the broker assigned
    pub partition: i32,
    /// Offset of the record within the partition
    pub offset: i64,
}

/// A connection to a message broker that can accept one record per call.
///
/// Implementors own the network session and its timeouts. The connection
/// must be safe to share across concurrent callers; the client holds it
/// behind an `Arc`.
#[async_trait]
pub trait BrokerConnection: Send + Sync {
    /// Submit one record for delivery to `topic`.
    ///
    /// Exactly one acknowledgment or error is produced per call. Errors
    /// are surfaced to the caller; no retry happens at this layer.
    async fn send(&self, topic: &str, key: Option<Bytes>, value: Bytes) -> Result<DeliveryResult>;
}
