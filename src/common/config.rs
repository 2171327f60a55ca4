//! Configuration constants for pagesim.

/// Version stamped into every JSON export artifact.
///
/// Bumped whenever the on-disk schema changes in a way older readers
/// cannot decode. [`load_artifact`](crate::analysis::load_artifact) rejects
/// any other version.
pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// File name used when the host does not choose an export destination.
pub const DEFAULT_EXPORT_FILE: &str = "page_replacement_results.json";

/// Smallest frame capacity a simulation accepts.
pub const MIN_FRAME_CAPACITY: usize = 1;
