//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageId;
use crate::simulator::replacer::Replacer;
use crate::simulator::FrameSet;

/// Evicts pages in the order they were loaded.
///
/// Hits never reorder the frame set, so the front of the set is always
/// the oldest-inserted page.
#[derive(Debug, Default, Clone, Copy)]
pub struct FifoReplacer;

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        FifoReplacer
    }
}

impl Replacer for FifoReplacer {
    fn record_access(&mut self, _frames: &mut FrameSet, _step: usize, _page: PageId, _hit: bool) {
        // Insertion order is the only order FIFO cares about.
    }

    fn evict(&mut self, frames: &FrameSet) -> Option<PageId> {
        frames.oldest()
    }
}
