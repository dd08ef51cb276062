//! The producer client: the single entry point for publishing product
//! records.
//!
//! A [`ProducerClient`] is built with an explicit broker connection and
//! a destination topic. Each send serializes the record, resolves its
//! partition key, and performs exactly one submit on the connection.
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_producer::config::KafkaConfig;
//! use catalog_producer::kafka::KafkaConnection;
//! use catalog_producer::ProducerClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let kafka = KafkaConfig {
//!         brokers: vec!["localhost:9092".to_string()],
//!         compression: "snappy".to_string(),
//!         acks: "all".to_string(),
//!         linger_ms: 100,
//!         batch_size: 16384,
//!         buffer_memory: 33_554_432,
//!         message_timeout_ms: 30_000,
//!     };
//!     let connection = Arc::new(KafkaConnection::from_config(&kafka)?);
//!     let client = ProducerClient::new(connection, "products");
//!
//!     let delivery = client.send_product("Nike", "Blue Trainers").await?;
//!     println!("delivered at offset {}", delivery.offset);
//!
//!     Ok(())
//! }
//! ```

use crate::broker::{BrokerConnection, DeliveryResult};
use crate::kafka::{JsonSerializer, KeyStrategy, RecordSerializer, SerializationFormat};
use crate::record::{ProductRecord, RecordEnvelope};
use crate::Result;
use bytes::Bytes;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Publishes product records to a single configured topic.
///
/// The client is stateless apart from its shared broker connection and
/// may be used from concurrent callers.
pub struct ProducerClient {
    connection: Arc<dyn BrokerConnection>,
    topic: String,
    serializer: JsonSerializer,
    key_strategy: KeyStrategy,
    client_id: Option<String>,
}

impl ProducerClient {
    pub fn new(connection: Arc<dyn BrokerConnection>, topic: impl Into<String>) -> Self {
        Self {
            connection,
            topic: topic.into(),
            serializer: JsonSerializer::new(SerializationFormat::JsonCompact),
            key_strategy: KeyStrategy::default(),
            client_id: None,
        }
    }

    pub fn with_format(mut self, format: SerializationFormat) -> Self {
        self.serializer = JsonSerializer::new(format);
        self
    }

    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    /// Identity stamped into each record's source metadata.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Build a record from its parts and submit it.
    ///
    /// Empty strings are permitted; only presence is required.
    #[instrument(skip(self), fields(topic = %self.topic))]
    pub async fn send_product(&self, name: &str, description: &str) -> Result<DeliveryResult> {
        self.send_record(ProductRecord::new(name, description)).await
    }

    /// Submit a record the caller already built.
    ///
    /// Exactly one delivery acknowledgment or error is produced per
    /// call; nothing is retried or buffered here.
    pub async fn send_record(&self, product: ProductRecord) -> Result<DeliveryResult> {
        let mut envelope = RecordEnvelope::new(product);
        envelope.source.client_id = self.client_id.clone();

        let payload = self.serializer.serialize(&envelope)?;
        let key = self.key_strategy.extract_key(&envelope);

        debug!(key = ?key, "Submitting record to broker");

        let delivery = self
            .connection
            .send(
                &self.topic,
                key.map(|k| Bytes::from(k.into_bytes())),
                Bytes::from(payload.into_bytes()),
            )
            .await?;

        debug!(
            partition = delivery.partition,
            offset = delivery.offset,
            "Record acknowledged"
        );

        Ok(delivery)
    }

    /// Submit several records, one result per input in input order.
    ///
    /// Sends run concurrently but stay independent: a failed record
    /// does not affect the others.
    pub async fn send_products(&self, products: Vec<ProductRecord>) -> Vec<Result<DeliveryResult>> {
        join_all(products.into_iter().map(|p| self.send_record(p))).await
    }
}
