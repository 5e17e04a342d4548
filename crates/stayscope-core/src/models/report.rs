use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Location recorded when the inbound payload could not be decoded.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// The persisted outcome record of one generation request.
///
/// A report is written once with status [`ReportStatus::Processing`] and
/// then updated exactly once to a terminal status. Transitions produce
/// new values; nothing mutates a report in place across pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub request_date: jiff::Timestamp,
    pub status: ReportStatus,
    pub location: String,
    pub hotel_count: u32,
    pub phone_number_count: u32,
}

/// Report lifecycle status. `Completed` and `Error` are terminal; a
/// report never moves backwards. There is no externally observable
/// pending state — the record does not exist before processing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Processing,
    Completed,
    Error,
}

impl Report {
    /// Initial record for a successfully decoded request. Reuses the
    /// request's correlation id when present, otherwise mints a fresh
    /// one.
    pub fn processing(id: Option<String>, location: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(fresh_id),
            request_date: jiff::Timestamp::now(),
            status: ReportStatus::Processing,
            location: location.unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            hotel_count: 0,
            phone_number_count: 0,
        }
    }

    /// Terminal record for a payload that could not be decoded. This is
    /// the one path with no `Processing` write: the record is created
    /// directly in its terminal state.
    pub fn undecodable() -> Self {
        Self {
            id: fresh_id(),
            request_date: jiff::Timestamp::now(),
            status: ReportStatus::Error,
            location: UNKNOWN_LOCATION.to_string(),
            hotel_count: 0,
            phone_number_count: 0,
        }
    }

    /// Terminal success transition.
    pub fn completed(self, hotel_count: u32, phone_number_count: u32) -> Self {
        Self {
            status: ReportStatus::Completed,
            hotel_count,
            phone_number_count,
            ..self
        }
    }

    /// Terminal failure transition. Counts keep their pre-query values.
    pub fn failed(self) -> Self {
        Self {
            status: ReportStatus::Error,
            ..self
        }
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
