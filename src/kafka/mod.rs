pub mod key_strategy;
pub mod producer;
pub mod serializer;
pub mod topic_manager;


pub use key_strategy::KeyStrategy;
pub use producer::KafkaConnection;
pub use serializer::{JsonSerializer, RecordSerializer, SerializationFormat};
pub use topic_manager::TopicManager;
