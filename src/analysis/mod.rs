//! Comparison and export of simulation results.
//!
//! # Components
//! - [`compare`] / [`compare_policies`] - Run several policies on one input
//! - [`ComparisonReport`] - Results keyed by policy
//! - [`export_report`] / [`export_result`] - Write results to a file
//! - [`load_artifact`] - Read a JSON export back for cross-run comparison

mod compare;
mod export;

pub use compare::{compare, compare_policies, ComparisonReport};
pub use export::{
    export_report, export_result, load_artifact, ExportArtifact, ExportEntry, ExportFormat,
    ExportOptions,
};
