//! pathfinder-core — Aptitude assessment engine.
//!
//! This crate defines the question bank model, the answer ledger, the
//! progression state machine, and the scoring and career recommendation
//! logic that the `pathfinder` CLI drives.

pub mod builtin;
pub mod careers;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod parser;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod session;

pub use error::AssessmentError;
