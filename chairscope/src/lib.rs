//! chairscope - Review-Cycle Reporting
//!
//! Library interface exposing the data model, pipeline services, and report
//! writers so integration tests can drive full reporting runs against an
//! in-memory platform.

pub mod models;
pub mod report;
pub mod services;
