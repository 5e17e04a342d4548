//! The report generation state machine.
//!
//! One invocation takes one raw message payload through decode, an
//! initial `Processing` write, the two location queries, and a single
//! terminal update. The public operation is total: every internal
//! failure is converted into a terminal report state or logged and
//! dropped, never propagated to the message source. A malformed message
//! or an unreachable dependency must not stall the consumer loop.

use tracing::{error, info, warn};

use stayscope_core::decode::decode_request;
use stayscope_core::models::report::Report;
use stayscope_gateway::error::GatewayError;
use stayscope_gateway::query::QueryGateway;
use stayscope_storage::store::ReportStore;

use crate::aggregate;

/// The orchestrator. Stateless between invocations; all per-request
/// state lives in the single report value being built.
pub struct ReportPipeline<S, G> {
    store: S,
    gateway: G,
}

impl<S: ReportStore, G: QueryGateway> ReportPipeline<S, G> {
    pub fn new(store: S, gateway: G) -> Self {
        Self { store, gateway }
    }

    /// Process one message delivery end-to-end. Never fails; the message
    /// source moves on to its next delivery regardless of the outcome.
    pub async fn handle_message(&self, payload: &str) {
        info!(bytes = payload.len(), "received report request");

        let request = match decode_request(payload) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "failed to decode report request");
                // Terminal from birth: no Processing write on this path.
                let report = Report::undecodable();
                if let Err(e) = self.store.create(&report).await {
                    error!(error = %e, id = %report.id, "failed to persist error report");
                }
                return;
            }
        };

        let report = Report::processing(request.id, request.location);
        if let Err(e) = self.store.create(&report).await {
            // Nothing was persisted, so there is no record to mark failed.
            error!(error = %e, id = %report.id, "failed to persist initial report");
            return;
        }
        info!(id = %report.id, location = %report.location, "created initial report");

        let terminal = match self.run_queries(&report.location).await {
            Ok((hotel_count, phone_number_count)) => {
                report.completed(hotel_count, phone_number_count)
            }
            Err(e) => {
                warn!(error = %e, "query stage failed");
                report.failed()
            }
        };

        match self.store.update(&terminal).await {
            Ok(()) => info!(
                id = %terminal.id,
                status = ?terminal.status,
                hotel_count = terminal.hotel_count,
                phone_number_count = terminal.phone_number_count,
                "updated report",
            ),
            Err(e) => error!(error = %e, id = %terminal.id, "failed to persist terminal report"),
        }
    }

    /// Issue the two independent location queries concurrently. A failure
    /// of either one fails the stage; counts only exist when both
    /// succeed.
    async fn run_queries(&self, location: &str) -> Result<(u32, u32), GatewayError> {
        let (hotels, contacts) = tokio::join!(
            self.gateway.hotels_by_location(location),
            self.gateway.contacts_by_location(location),
        );

        let hotels = hotels?;
        let contacts = contacts?;

        Ok((
            aggregate::hotel_count(&hotels),
            aggregate::phone_number_count(&contacts),
        ))
    }
}
