use serde::{Deserialize, Serialize};

/// An inbound "generate a report" request. Transient; never persisted.
///
/// `status` is advisory only: the pipeline owns the report lifecycle and
/// ignores whatever status the producer claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub id: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}
