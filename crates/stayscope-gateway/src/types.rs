//! Wire shapes for the two Query Gateway queries.
//!
//! The envelope carries an optional `data` key; a response without one is
//! a query failure. Inside `data`, an absent or null result list is not a
//! failure — it decodes to an empty list and aggregates to a zero count.

use serde::Deserialize;

use crate::error::GatewayError;

/// Envelope of a GraphQL HTTP response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
}

/// `data` payload of the `hotelsByLocation` query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelsData {
    #[serde(default)]
    pub hotels_by_location: Option<Vec<HotelRecord>>,
}

/// One inventory entry at a location. The id is nullable in the remote
/// schema, so an entry without one still counts as an entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelRecord {
    #[serde(default)]
    pub id: Option<String>,
}

/// `data` payload of the `contactsByLocation` query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsData {
    #[serde(default)]
    pub contacts_by_location: Option<Vec<ContactRecord>>,
}

/// One contact entry at a location. `type` carries the channel tag
/// (`"PHONE"`, `"EMAIL"`, ...) and may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub contact_type: Option<String>,
}

/// Shape a raw `hotelsByLocation` response body into its result list.
pub fn parse_hotels(body: &str) -> Result<Vec<HotelRecord>, GatewayError> {
    let response: GraphQlResponse<HotelsData> = serde_json::from_str(body)?;
    let data = response.data.ok_or(GatewayError::MissingData)?;
    Ok(data.hotels_by_location.unwrap_or_default())
}

/// Shape a raw `contactsByLocation` response body into its result list.
pub fn parse_contacts(body: &str) -> Result<Vec<ContactRecord>, GatewayError> {
    let response: GraphQlResponse<ContactsData> = serde_json::from_str(body)?;
    let data = response.data.ok_or(GatewayError::MissingData)?;
    Ok(data.contacts_by_location.unwrap_or_default())
}
