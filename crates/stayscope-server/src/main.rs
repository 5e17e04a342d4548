//! stayscope-server
//!
//! Process wiring: configuration, logging, store selection, the Kafka
//! consumer feeding the report pipeline, and the axum read API.

use axum::Router;
use axum::routing::{get, post};
use rdkafka::ClientConfig;
use rdkafka::producer::FutureProducer;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stayscope_gateway::http::HttpGateway;
use stayscope_pipeline::ReportPipeline;
use stayscope_storage::memory::MemoryStore;
use stayscope_storage::s3::S3Store;
use stayscope_storage::store::Store;

mod config;
mod consumer;
mod error;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    let store = match &config.bucket {
        Some(bucket) => {
            let s3 = stayscope_storage::client::build_client().await;
            Store::S3(S3Store::new(s3, bucket.clone()))
        }
        None => {
            info!("no bucket configured, using in-memory report store");
            Store::Memory(MemoryStore::new())
        }
    };

    let gateway = HttpGateway::new(config.graphql_endpoint.clone());
    let pipeline = ReportPipeline::new(store.clone(), gateway);
    let consumer = consumer::build_consumer(&config)?;

    let producer: FutureProducer = ClientConfig::new()
        .set("bootstrap.servers", &config.kafka_brokers)
        .create()?;

    let state = AppState {
        store,
        producer,
        topic: config.topic.clone(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/reports", get(routes::reports::list_reports))
        .route("/reports", post(routes::reports::request_report))
        .route("/reports/{id}", get(routes::reports::get_report))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        topic = %config.topic,
        gateway = %config.graphql_endpoint,
        "stayscope server started",
    );

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "http server exited");
        }
    });

    consumer::run(consumer, pipeline).await;

    Ok(())
}
