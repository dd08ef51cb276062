use async_trait::async_trait;
use bytes::Bytes;
use catalog_producer::broker::{BrokerConnection, DeliveryResult};
use catalog_producer::config::{Config, KafkaConfig, ProducerConfig};
use catalog_producer::{Error, Result};
use std::env;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Get test configuration from environment variables
#[allow(dead_code)]
pub fn get_test_config() -> Config {
    // Use TEST_ prefix for test environment variables
    let kafka = KafkaConfig {
        brokers: env::var("TEST_KAFKA_BROKERS")
            .unwrap_or_else(|_| "localhost:9092".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect(),
        compression: "none".to_string(), // No compression for tests
        acks: "all".to_string(),
        linger_ms: 0,    // Immediate sending for tests
        batch_size: 1,   // Small batches for tests
        buffer_memory: 1_048_576, // 1MB for tests
        message_timeout_ms: 10_000,
    };

    let producer = ProducerConfig {
        topic: format!("test_products_{}", std::process::id()),
        ..ProducerConfig::default()
    };

    Config { kafka, producer }
}

/// One record as the mock broker observed it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedSend {
    pub topic: String,
    pub key: Option<Bytes>,
    pub value: Bytes,
}

/// In-memory broker connection: assigns offsets sequentially on a
/// single partition and records every accepted send.
#[allow(dead_code)]
pub struct MockBroker {
    reachable: bool,
    next_offset: AtomicI64,
    sent: Mutex<Vec<RecordedSend>>,
}

#[allow(dead_code)]
impl MockBroker {
    pub fn new() -> Self {
        Self {
            reachable: true,
            next_offset: AtomicI64::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A broker that refuses every send, as if the network were down.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            next_offset: AtomicI64::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<RecordedSend> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrokerConnection for MockBroker {
    async fn send(&self, topic: &str, key: Option<Bytes>, value: Bytes) -> Result<DeliveryResult> {
        if !self.reachable {
            return Err(Error::Connection("broker unreachable".to_string()));
        }

        let offset = self.next_offset.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(RecordedSend {
            topic: topic.to_string(),
            key,
            value,
        });

        Ok(DeliveryResult {
            topic: topic.to_string(),
            partition: 0,
            offset,
        })
    }
}
