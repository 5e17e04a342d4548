use stayscope_core::models::report::Report;

use crate::error::StorageError;
use crate::memory::MemoryStore;
use crate::s3::S3Store;

/// Durable keyed storage for report records.
///
/// `create` is the first write for an id and fails on a duplicate where
/// the backend can detect one; `update` replaces an existing record. The
/// pipeline issues at most one of each per report; `get` and `list_all`
/// back the read API.
#[allow(async_fn_in_trait)]
pub trait ReportStore {
    async fn create(&self, report: &Report) -> Result<(), StorageError>;

    async fn update(&self, report: &Report) -> Result<(), StorageError>;

    async fn get(&self, id: &str) -> Result<Option<Report>, StorageError>;

    async fn list_all(&self) -> Result<Vec<Report>, StorageError>;
}

/// Backend selected at startup: S3 when a bucket is configured, the
/// in-memory map otherwise.
#[derive(Debug, Clone)]
pub enum Store {
    S3(S3Store),
    Memory(MemoryStore),
}

impl ReportStore for Store {
    async fn create(&self, report: &Report) -> Result<(), StorageError> {
        match self {
            Store::S3(store) => store.create(report).await,
            Store::Memory(store) => store.create(report).await,
        }
    }

    async fn update(&self, report: &Report) -> Result<(), StorageError> {
        match self {
            Store::S3(store) => store.update(report).await,
            Store::Memory(store) => store.update(report).await,
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Report>, StorageError> {
        match self {
            Store::S3(store) => store.get(id).await,
            Store::Memory(store) => store.get(id).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Report>, StorageError> {
        match self {
            Store::S3(store) => store.list_all().await,
            Store::Memory(store) => store.list_all().await,
        }
    }
}
