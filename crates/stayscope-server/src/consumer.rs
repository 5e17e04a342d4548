//! Kafka consumer loop feeding the report pipeline.
//!
//! Auto-commit consumption: a delivery reaches the pipeline at most
//! once, and there is no redelivery tied to the processing outcome. The
//! pipeline's never-raises contract is what keeps one bad message from
//! stalling this loop.

use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::{ClientConfig, Message};
use tracing::{error, warn};

use stayscope_gateway::http::HttpGateway;
use stayscope_pipeline::ReportPipeline;
use stayscope_storage::store::Store;

use crate::config::Config;

pub fn build_consumer(config: &Config) -> Result<StreamConsumer, KafkaError> {
    let consumer: StreamConsumer = ClientConfig::new()
        .set("group.id", &config.group_id)
        .set("bootstrap.servers", &config.kafka_brokers)
        .set("enable.auto.commit", "true")
        .create()?;

    consumer.subscribe(&[&config.topic])?;

    Ok(consumer)
}

/// Run the consumer loop forever: one message, one pipeline invocation.
pub async fn run(consumer: StreamConsumer, pipeline: ReportPipeline<Store, HttpGateway>) {
    loop {
        match consumer.recv().await {
            Err(e) => {
                error!(error = %e, "kafka receive error");
            }
            Ok(message) => {
                let Some(Ok(payload)) = message.payload_view::<str>() else {
                    warn!("received message without valid UTF-8 payload");
                    continue;
                };
                pipeline.handle_message(payload).await;
            }
        }
    }
}
