use std::env;

/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub kafka_brokers: String,
    pub topic: String,
    pub group_id: String,
    pub graphql_endpoint: String,
    /// S3 bucket for report storage; unset means the in-memory store.
    pub bucket: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("STAYSCOPE_BIND_ADDR", "0.0.0.0:8080"),
            kafka_brokers: env_or("KAFKA_BROKERS", "localhost:9092"),
            topic: env_or("STAYSCOPE_TOPIC", "report-requests"),
            group_id: env_or("STAYSCOPE_GROUP_ID", "stayscope"),
            graphql_endpoint: env_or("GRAPHQL_ENDPOINT", "http://localhost:8081/graphql"),
            bucket: env::var("STAYSCOPE_BUCKET").ok(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
