//! service-core: Shared infrastructure for the artifact backend.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
