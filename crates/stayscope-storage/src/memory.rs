//! In-memory report store for local mode and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use stayscope_core::models::report::Report;

use crate::error::StorageError;
use crate::store::ReportStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Report>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poisoning only marks a panic elsewhere; the map itself is still
    /// consistent, and store operations must never panic.
    fn map(&self) -> MutexGuard<'_, HashMap<String, Report>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReportStore for MemoryStore {
    async fn create(&self, report: &Report) -> Result<(), StorageError> {
        let mut map = self.map();
        if map.contains_key(&report.id) {
            return Err(StorageError::AlreadyExists {
                id: report.id.clone(),
            });
        }
        map.insert(report.id.clone(), report.clone());
        debug!(id = %report.id, "created report in memory store");
        Ok(())
    }

    async fn update(&self, report: &Report) -> Result<(), StorageError> {
        let mut map = self.map();
        match map.get_mut(&report.id) {
            Some(slot) => {
                *slot = report.clone();
                debug!(id = %report.id, "updated report in memory store");
                Ok(())
            }
            None => Err(StorageError::NotFound {
                id: report.id.clone(),
            }),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Report>, StorageError> {
        Ok(self.map().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Report>, StorageError> {
        let mut reports: Vec<Report> = self.map().values().cloned().collect();
        reports.sort_by(|a, b| a.request_date.cmp(&b.request_date));
        Ok(reports)
    }
}
