//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts in insertion order
//! - [`LruReplacer`] - evicts the least recently touched page
//! - [`OptimalReplacer`] - Belady's clairvoyant policy (needs the whole
//!   reference string up front)
//!
//! FIFO and LRU are streamable: they decide from the frame set alone.
//! The optimal replacer is built from the full reference string in a
//! planning pass before the simulation pass starts.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::PageId;
use crate::simulator::FrameSet;

/// Per-policy eviction strategy driven by the simulation loop.
///
/// For every reference the driver first resolves a miss (asking
/// [`evict`](Replacer::evict) for a victim when the set is full, then
/// inserting the page at the back), then calls
/// [`record_access`](Replacer::record_access).
pub trait Replacer {
    /// Record that `page` was referenced at position `step`.
    ///
    /// `hit` is true if the page was resident before this reference.
    fn record_access(&mut self, frames: &mut FrameSet, step: usize, page: PageId, hit: bool);

    /// Select the resident page to evict from a full frame set.
    ///
    /// Returns `None` only if `frames` is empty.
    fn evict(&mut self, frames: &FrameSet) -> Option<PageId>;
}
