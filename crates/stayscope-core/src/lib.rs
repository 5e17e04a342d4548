//! stayscope-core
//!
//! Pure domain types and the report-request decoder.
//! No transport or storage dependency — this is the shared vocabulary of
//! the stayscope system.

pub mod decode;
pub mod error;
pub mod models;
