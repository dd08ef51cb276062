use crate::kafka::{KeyStrategy, SerializationFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub kafka: KafkaConfig,
    #[serde(default)]
    pub producer: ProducerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaConfig {
    pub brokers: Vec<String>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_acks")]
    pub acks: String,
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_buffer_memory")]
    pub buffer_memory: usize,
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProducerConfig {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub format: SerializationFormat,
    #[serde(default)]
    pub key_field: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            format: SerializationFormat::default(),
            key_field: None,
            client_id: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("CATALOG_PRODUCER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn bootstrap_servers(&self) -> String {
        self.kafka.brokers.join(",")
    }
}

impl ProducerConfig {
    /// Key strategy implied by the configuration: a configured field
    /// path wins, otherwise records are keyed by product name.
    pub fn key_strategy(&self) -> KeyStrategy {
        match &self.key_field {
            Some(path) => KeyStrategy::FieldPath(path.clone()),
            None => KeyStrategy::ProductName,
        }
    }
}

fn default_topic() -> String {
    "products".to_string()
}

fn default_compression() -> String {
    "snappy".to_string()
}

fn default_acks() -> String {
    "all".to_string()
}

fn default_linger_ms() -> u32 {
    100
}

fn default_batch_size() -> usize {
    16384
}

fn default_buffer_memory() -> usize {
    33_554_432 // 32MB
}

fn default_message_timeout_ms() -> u64 {
    30_000
}
