//! stayscope-pipeline
//!
//! The report generation state machine and the count aggregation over
//! query results. This is the orchestration core: everything else in the
//! workspace either feeds it (the message source) or serves it (the
//! store, the gateway).

pub mod aggregate;
pub mod pipeline;

pub use pipeline::ReportPipeline;
