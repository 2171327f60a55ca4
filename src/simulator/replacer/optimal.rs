//! Optimal (Belady) replacement policy.
//!
//! The optimal policy is offline: it evicts the page whose next use lies
//! furthest in the future, so it needs the entire reference string before
//! the first eviction. It runs in two passes:
//!
//! 1. [`OptimalReplacer::new`] walks the reference string backwards once and
//!    records, for every position, where the same page is referenced next.
//! 2. The simulation pass keeps each resident page's next use up to date on
//!    every access and picks the furthest one on eviction.
//!
//! Both passes are O(n); each eviction scans the resident pages, so a full
//! run is O(n + faults × frames).

use std::collections::HashMap;

use crate::common::PageId;
use crate::simulator::replacer::Replacer;
use crate::simulator::FrameSet;

/// Belady's clairvoyant replacer.
///
/// # Tie-break
/// Pages that are never referenced again count as infinitely far away.
/// When several pages share the furthest next use (in practice: several
/// pages with no next use), the one that comes first in the frame set's
/// snapshot order is evicted. Frame set order is insertion order here, so
/// this is the longest-resident of the tied pages.
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    /// `next_occurrence[i]` is the next position after `i` referencing the
    /// same page, or `None` if there is none.
    next_occurrence: Vec<Option<usize>>,

    /// Next use of each resident page, as of its latest access.
    next_use: HashMap<PageId, Option<usize>>,
}

impl OptimalReplacer {
    /// Plan a replacer for `reference`.
    ///
    /// The replacer is only meaningful for the same reference string it
    /// was planned from.
    pub fn new(reference: &[PageId]) -> Self {
        let mut next_occurrence = vec![None; reference.len()];
        let mut seen_at: HashMap<PageId, usize> = HashMap::new();

        for (pos, &page) in reference.iter().enumerate().rev() {
            next_occurrence[pos] = seen_at.insert(page, pos);
        }

        Self {
            next_occurrence,
            next_use: HashMap::new(),
        }
    }

    /// Next reference to the page accessed at `step`.
    pub fn next_occurrence(&self, step: usize) -> Option<usize> {
        self.next_occurrence.get(step).copied().flatten()
    }

    /// Distance key for a resident page; no next use sorts last.
    fn distance(&self, page: PageId) -> usize {
        self.next_use
            .get(&page)
            .copied()
            .flatten()
            .unwrap_or(usize::MAX)
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, _frames: &mut FrameSet, step: usize, page: PageId, _hit: bool) {
        let next = self.next_occurrence(step);
        self.next_use.insert(page, next);
    }

    fn evict(&mut self, frames: &FrameSet) -> Option<PageId> {
        let mut victim: Option<(PageId, usize)> = None;

        for page in frames.iter() {
            let distance = self.distance(page);
            // Strictly greater: the first page in snapshot order wins ties
            if victim.map_or(true, |(_, best)| distance > best) {
                victim = Some((page, distance));
            }
        }

        let (page, _) = victim?;
        self.next_use.remove(&page);
        Some(page)
    }
}
