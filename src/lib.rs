//! pagesim - A page replacement simulator with FIFO, LRU and optimal policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   reference string + frame capacity (already parsed by host)    │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulator (simulator/)                      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacers: FIFO | LRU | Optimal (two-pass)    │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      FrameSet + driver → History, faults, elapsed        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Analysis (analysis/)                        │   │
//! │  │   compare (scoped threads) → ComparisonReport → export  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`simulator`] - Frame set, eviction policies and the simulation driver
//! - [`analysis`] - Multi-policy comparison and result export
//!
//! # Quick Start
//! ```no_run
//! use pagesim::{compare, export_report, ExportOptions, PageId};
//!
//! let reference = PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
//! let report = compare(&reference, 3).unwrap();
//! println!("{}", report);
//!
//! export_report(&report, "results.json", ExportOptions::json()).unwrap();
//! ```

pub mod analysis;
pub mod common;
pub mod simulator;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_EXPORT_FILE, EXPORT_FORMAT_VERSION};
pub use common::{Error, PageId, Result};

pub use analysis::{
    compare, compare_policies, export_report, export_result, load_artifact, ComparisonReport,
    ExportArtifact, ExportFormat, ExportOptions,
};
pub use simulator::{
    simulate, simulate_fifo, simulate_lru, simulate_optimal, FrameSet, History, Policy,
    SimulationConfig, SimulationResult,
};
