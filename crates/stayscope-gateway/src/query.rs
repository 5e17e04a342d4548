use crate::error::GatewayError;
use crate::types::{ContactRecord, HotelRecord};

/// Location-scoped lookups against the Query Gateway.
///
/// Each call is a single request/response round trip; implementations do
/// not retry or paginate. Callers treat any error from either call as a
/// stage failure.
#[allow(async_fn_in_trait)]
pub trait QueryGateway {
    async fn hotels_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<HotelRecord>, GatewayError>;

    async fn contacts_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<ContactRecord>, GatewayError>;
}
