use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A product catalog entry as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The wire form of a record: the product plus producer metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEnvelope {
    pub product: ProductRecord,
    pub ts_ms: i64,
    pub source: ProducerMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerMetadata {
    pub version: String,
    pub producer: String,
    pub client_id: Option<String>,
}

impl ProducerMetadata {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            producer: "catalog-producer".to_string(),
            client_id: None,
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

impl Default for ProducerMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEnvelope {
    pub fn new(product: ProductRecord) -> Self {
        Self {
            product,
            ts_ms: Utc::now().timestamp_millis(),
            source: ProducerMetadata::new(),
        }
    }
}
