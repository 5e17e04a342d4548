//! stayscope-gateway
//!
//! Query Gateway client: the [`query::QueryGateway`] trait, typed result
//! structures for the two location-scoped GraphQL queries, and the
//! reqwest-backed [`http::HttpGateway`] implementation.

pub mod error;
pub mod http;
pub mod query;
pub mod types;
