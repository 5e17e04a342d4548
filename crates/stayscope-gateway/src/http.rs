//! reqwest-backed Query Gateway.

use serde_json::json;
use tracing::debug;

use crate::error::GatewayError;
use crate::query::QueryGateway;
use crate::types::{ContactRecord, HotelRecord, parse_contacts, parse_hotels};

const HOTELS_QUERY: &str =
    "query HotelsByLocation($location: String!) { hotelsByLocation(location: $location) { id } }";

const CONTACTS_QUERY: &str = "query ContactsByLocation($location: String!) { contactsByLocation(location: $location) { id type } }";

/// Query Gateway over HTTP: one POST per query against a fixed GraphQL
/// endpoint. Non-2xx statuses are errors.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn send_query(
        &self,
        query: &'static str,
        location: &str,
    ) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "query": query,
                "variables": { "location": location },
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}

impl QueryGateway for HttpGateway {
    async fn hotels_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<HotelRecord>, GatewayError> {
        let body = self.send_query(HOTELS_QUERY, location).await?;
        debug!(location, bytes = body.len(), "hotels query returned");
        parse_hotels(&body)
    }

    async fn contacts_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<ContactRecord>, GatewayError> {
        let body = self.send_query(CONTACTS_QUERY, location).await?;
        debug!(location, bytes = body.len(), "contacts query returned");
        parse_contacts(&body)
    }
}
