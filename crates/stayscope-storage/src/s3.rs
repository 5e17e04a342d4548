//! S3-backed report store. One JSON object per report under the
//! `reports/` prefix, keyed by report id.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use tracing::debug;

use stayscope_core::models::report::Report;

use crate::error::StorageError;
use crate::store::ReportStore;

const REPORT_PREFIX: &str = "reports/";

fn report_key(id: &str) -> String {
    format!("{REPORT_PREFIX}{id}.json")
}

#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn put(&self, report: &Report, first_write: bool) -> Result<(), StorageError> {
        let body = serde_json::to_vec(report)?;

        let mut req = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(report_key(&report.id))
            .content_type("application/json")
            .body(ByteStream::from(body));

        if first_write {
            // If-None-Match: * makes the create conditional on the key
            // not existing yet.
            req = req.if_none_match("*");
        }

        req.send().await.map_err(|e| {
            let err = e.into_service_error();
            // S3 returns 412 Precondition Failed when the key exists
            if first_write && err.to_string().contains("PreconditionFailed") {
                StorageError::AlreadyExists {
                    id: report.id.clone(),
                }
            } else {
                StorageError::PutObject(err.to_string())
            }
        })?;

        debug!(id = %report.id, first_write, "stored report object");

        Ok(())
    }
}

impl ReportStore for S3Store {
    async fn create(&self, report: &Report) -> Result<(), StorageError> {
        self.put(report, true).await
    }

    async fn update(&self, report: &Report) -> Result<(), StorageError> {
        // No existence check: the pipeline only updates ids it has just
        // created, and S3 cannot test presence without an extra read.
        self.put(report, false).await
    }

    async fn get(&self, id: &str) -> Result<Option<Report>, StorageError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(report_key(id))
            .send()
            .await;

        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(StorageError::GetObject(err.to_string()));
            }
        };

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(e.to_string()))?
            .into_bytes();

        debug!(id, bytes = body.len(), "loaded report object");

        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn list_all(&self) -> Result<Vec<Report>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(REPORT_PREFIX);

            if let Some(token) = &continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

            for obj in resp.contents() {
                if let Some(key) = obj.key() {
                    keys.push(key.to_string());
                }
            }

            if resp.is_truncated() == Some(true) {
                continuation_token = resp.next_continuation_token().map(|s| s.to_string());
            } else {
                break;
            }
        }

        debug!(keys = keys.len(), "listed report objects");

        let mut reports = Vec::with_capacity(keys.len());
        for key in &keys {
            let Some(id) = key
                .strip_prefix(REPORT_PREFIX)
                .and_then(|rest| rest.strip_suffix(".json"))
            else {
                continue;
            };
            if let Some(report) = self.get(id).await? {
                reports.push(report);
            }
        }

        Ok(reports)
    }
}
