use catalog_producer::config::Config;
use catalog_producer::kafka::{KeyStrategy, SerializationFormat};
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_minimal_config_applies_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[kafka]
brokers = ["localhost:9092"]
"#,
    );

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.kafka.brokers, vec!["localhost:9092".to_string()]);
    assert_eq!(config.kafka.compression, "snappy");
    assert_eq!(config.kafka.acks, "all");
    assert_eq!(config.kafka.linger_ms, 100);
    assert_eq!(config.kafka.batch_size, 16384);
    assert_eq!(config.kafka.buffer_memory, 33_554_432);
    assert_eq!(config.kafka.message_timeout_ms, 30_000);

    assert_eq!(config.producer.topic, "products");
    assert_eq!(config.producer.format, SerializationFormat::JsonCompact);
    assert_eq!(config.producer.key_field, None);
    assert_eq!(config.producer.key_strategy(), KeyStrategy::ProductName);
}

#[test]
fn test_full_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[kafka]
brokers = ["kafka-1:9092", "kafka-2:9092"]
compression = "none"
acks = "1"
linger_ms = 0
batch_size = 1
buffer_memory = 1048576
message_timeout_ms = 5000

[producer]
topic = "catalog.products"
format = "json"
key_field = "product.name"
client_id = "docs-quickstart"
"#,
    );

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.bootstrap_servers(), "kafka-1:9092,kafka-2:9092");
    assert_eq!(config.kafka.compression, "none");
    assert_eq!(config.kafka.message_timeout_ms, 5000);

    assert_eq!(config.producer.topic, "catalog.products");
    assert_eq!(config.producer.format, SerializationFormat::Json);
    assert_eq!(config.producer.client_id.as_deref(), Some("docs-quickstart"));
    assert_eq!(
        config.producer.key_strategy(),
        KeyStrategy::FieldPath("product.name".to_string())
    );
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_missing_brokers_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[producer]
topic = "catalog.products"
"#,
    );

    assert!(Config::from_file(&path).is_err());
}
