//! NASSAU — two-down auto-press golf match scorer
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod scoring;
pub mod scorecard;
pub mod settlement;
pub mod report;
