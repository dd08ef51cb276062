//! Error types and result handling for catalog-producer.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.
//!
//! # Example
//!
//! ```rust
//! use catalog_producer::{Error, Result};
//!
//! fn reach_broker() -> Result<()> {
//!     // Simulating an unreachable broker
//!     Err(Error::Connection("Failed to connect".to_string()))
//! }
//!
//! match reach_broker() {
//!     Ok(()) => println!("Connected"),
//!     Err(Error::Connection(msg)) => eprintln!("Connection error: {}", msg),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for catalog-producer operations.
///
/// This enum represents all possible errors that can occur while
/// producing records, from configuration issues to delivery failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, typically from an invalid config file or
    /// environment variables.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Kafka client or producer error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// JSON serialization error when encoding a record.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic connection error not covered by specific types.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The broker accepted the connection but refused the record.
    #[error("Record rejected for topic '{topic}': {reason}")]
    Rejected {
        /// Topic the record was destined for
        topic: String,
        /// Broker-supplied reason for the rejection
        reason: String,
    },

    /// Operation timeout.
    #[error("Timeout error: {message}")]
    Timeout {
        /// Description of what timed out
        message: String,
    },
}

/// A convenient Result type alias for catalog-producer operations.
///
/// This is equivalent to `std::result::Result<T, catalog_producer::Error>`.
///
/// # Example
///
/// ```rust
/// use catalog_producer::Result;
///
/// fn do_something() -> Result<String> {
///     Ok("Success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
