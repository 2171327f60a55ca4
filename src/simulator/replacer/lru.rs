//! LRU (Least Recently Used) replacement policy.

use crate::common::PageId;
use crate::simulator::replacer::Replacer;
use crate::simulator::FrameSet;

/// Evicts the page whose last access (hit or load) is oldest.
///
/// Recency lives in the frame set order itself: every hit moves the page
/// to the back, new pages are inserted at the back, so the front is always
/// the least recently used page.
#[derive(Debug, Default, Clone, Copy)]
pub struct LruReplacer;

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        LruReplacer
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, frames: &mut FrameSet, _step: usize, page: PageId, hit: bool) {
        if hit {
            frames.touch(page);
        }
    }

    fn evict(&mut self, frames: &FrameSet) -> Option<PageId> {
        frames.oldest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new();
        let mut frames = FrameSet::new(3).unwrap();
        for (step, p) in [0, 1, 2].into_iter().enumerate() {
            frames.insert(pid(p)).unwrap();
            replacer.record_access(&mut frames, step, pid(p), false);
        }

        assert_eq!(replacer.evict(&frames), Some(pid(0)));
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut replacer = LruReplacer::new();
        let mut frames = FrameSet::new(3).unwrap();
        for (step, p) in [0, 1, 2].into_iter().enumerate() {
            frames.insert(pid(p)).unwrap();
            replacer.record_access(&mut frames, step, pid(p), false);
        }

        // Touch 0 and 1: page 2 becomes least recent
        replacer.record_access(&mut frames, 3, pid(0), true);
        replacer.record_access(&mut frames, 4, pid(1), true);

        assert_eq!(replacer.evict(&frames), Some(pid(2)));
        assert_eq!(frames.snapshot(), vec![pid(2), pid(0), pid(1)]);
    }
}
