use catalog_producer::kafka::{KafkaConnection, TopicManager};
use catalog_producer::{BrokerConnection, Config, Error, ProducerClient, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "catalog-producer")]
#[command(about = "Publishes a product catalog record to Kafka", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[arg(short, long, help = "Override the destination topic")]
    topic: Option<String>,

    #[arg(long, help = "Create the destination topic if it does not exist")]
    ensure_topic: bool,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,

    #[arg(value_name = "NAME", help = "Product name")]
    name: String,

    #[arg(value_name = "DESCRIPTION", help = "Product description")]
    description: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    info!("Starting catalog-producer");
    info!("Loading configuration from {:?}", args.config);

    let config = match Config::from_file(&args.config) {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(Error::Config(e.to_string()));
        }
    };

    let topic = args.topic.unwrap_or_else(|| config.producer.topic.clone());

    info!(
        kafka_brokers = ?config.kafka.brokers,
        topic = %topic,
        "Configuration summary"
    );

    if args.ensure_topic {
        let mut topics = TopicManager::new(&config.kafka.brokers, 3, 1)?;
        topics.ensure_topic_exists(&topic).await?;
    }

    let connection = Arc::new(KafkaConnection::from_config(&config.kafka)?);
    let mut client = ProducerClient::new(Arc::clone(&connection) as Arc<dyn BrokerConnection>, topic)
        .with_format(config.producer.format)
        .with_key_strategy(config.producer.key_strategy());
    if let Some(client_id) = &config.producer.client_id {
        client = client.with_client_id(client_id);
    }

    let delivery = client.send_product(&args.name, &args.description).await?;

    info!(
        topic = %delivery.topic,
        partition = delivery.partition,
        offset = delivery.offset,
        "Record delivered"
    );

    connection.flush(Duration::from_secs(10))?;

    Ok(())
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("catalog_producer=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("catalog_producer=info,warn"))
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
