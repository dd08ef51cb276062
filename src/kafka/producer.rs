use crate::broker::{BrokerConnection, DeliveryResult};
use crate::{config::KafkaConfig, Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;

/// Broker connection backed by an rdkafka [`FutureProducer`].
pub struct KafkaConnection {
    producer: FutureProducer,
}

impl KafkaConnection {
    pub fn new(brokers: &[String], config: &KafkaConfig) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers.join(","))
            .set("compression.type", &config.compression)
            .set("acks", &config.acks)
            .set("linger.ms", config.linger_ms.to_string())
            .set("batch.size", config.batch_size.to_string())
            .set("buffer.memory", config.buffer_memory.to_string())
            .set("message.timeout.ms", config.message_timeout_ms.to_string())
            .create()
            .map_err(Error::Kafka)?;

        Ok(Self { producer })
    }

    pub fn from_config(config: &KafkaConfig) -> Result<Self> {
        Self::new(&config.brokers, config)
    }

    /// Wait for all queued records to be acknowledged or failed.
    ///
    /// Called before dropping the connection so in-flight records are
    /// not lost on shutdown.
    pub fn flush(&self, timeout: Duration) -> Result<()> {
        self.producer.flush(timeout).map_err(Error::Kafka)
    }
}

#[async_trait]
impl BrokerConnection for KafkaConnection {
    async fn send(&self, topic: &str, key: Option<Bytes>, value: Bytes) -> Result<DeliveryResult> {
        let mut record = FutureRecord::<[u8], [u8]>::to(topic).payload(value.as_ref());
        if let Some(key) = key.as_ref() {
            record = record.key(key.as_ref());
        }

        let (partition, offset) = self
            .producer
            .send(record, rdkafka::util::Timeout::Never)
            .await
            .map_err(|(e, _)| Error::Kafka(e))?;

        Ok(DeliveryResult {
            topic: topic.to_string(),
            partition,
            offset,
        })
    }
}
