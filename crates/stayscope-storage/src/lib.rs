//! stayscope-storage
//!
//! Report Store: the [`store::ReportStore`] trait, an S3-backed
//! implementation (one JSON object per report), and an in-memory
//! implementation for local mode and tests.

pub mod client;
pub mod error;
pub mod memory;
pub mod s3;
pub mod store;
