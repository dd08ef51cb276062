pub mod broker;
pub mod client;
pub mod config;
pub mod error;
pub mod record;

pub mod kafka;

pub use broker::{BrokerConnection, DeliveryResult};
pub use client::ProducerClient;
pub use config::Config;
pub use error::{Error, Result};
pub use record::ProductRecord;
