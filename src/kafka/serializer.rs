use crate::record::RecordEnvelope;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SerializationFormat {
    /// Pretty-printed JSON, for debugging and human inspection.
    Json,
    /// Single-line JSON, the wire default.
    #[default]
    JsonCompact,
}

pub trait RecordSerializer {
    fn serialize(&self, envelope: &RecordEnvelope) -> Result<String>;
}

pub struct JsonSerializer {
    format: SerializationFormat,
}

impl JsonSerializer {
    pub fn new(format: SerializationFormat) -> Self {
        Self { format }
    }
}

impl RecordSerializer for JsonSerializer {
    fn serialize(&self, envelope: &RecordEnvelope) -> Result<String> {
        match self.format {
            SerializationFormat::Json => {
                serde_json::to_string_pretty(envelope).map_err(Into::into)
            }
            SerializationFormat::JsonCompact => serde_json::to_string(envelope).map_err(Into::into),
        }
    }
}
