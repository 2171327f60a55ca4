//! The bounded set of resident pages.

use std::collections::{HashSet, VecDeque};

use crate::common::{Error, PageId, Result};

/// Pages currently resident in memory, in a policy-defined order.
///
/// The front of the order is the page the owning policy considers oldest
/// (insertion order for FIFO/optimal, least recently used for LRU). New
/// pages always join at the back.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - no page appears twice
///
/// # Example
/// ```
/// use pagesim::{FrameSet, PageId};
///
/// let mut frames = FrameSet::new(2).unwrap();
/// frames.insert(PageId::new(1)).unwrap();
/// frames.insert(PageId::new(2)).unwrap();
/// assert!(frames.is_full());
///
/// // Must evict before inserting into a full set
/// assert!(frames.insert(PageId::new(3)).is_err());
/// frames.evict(PageId::new(1));
/// frames.insert(PageId::new(3)).unwrap();
/// assert_eq!(frames.snapshot(), vec![PageId::new(2), PageId::new(3)]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages (front = next eviction candidate for FIFO/LRU).
    order: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_input("frame capacity must be greater than 0"));
        }

        Ok(Self {
            order: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        })
    }

    /// Check whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Add `page` at the back of the order.
    ///
    /// Inserting a page that is already resident is a no-op.
    ///
    /// # Errors
    /// Returns `Error::CapacityViolation` if the set is full. Callers must
    /// evict first.
    pub fn insert(&mut self, page: PageId) -> Result<()> {
        if self.contains(page) {
            return Ok(());
        }
        if self.is_full() {
            return Err(Error::CapacityViolation {
                capacity: self.capacity,
            });
        }

        self.order.push_back(page);
        self.resident.insert(page);
        Ok(())
    }

    /// Remove a specific resident page.
    ///
    /// Returns `false` if the page was not resident.
    pub fn evict(&mut self, page: PageId) -> bool {
        if !self.resident.remove(&page) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|&p| p == page) {
            self.order.remove(pos);
        }
        true
    }

    /// Move a resident page to the back of the order.
    ///
    /// Returns `false` if the page was not resident.
    pub fn touch(&mut self, page: PageId) -> bool {
        if !self.contains(page) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|&p| p == page) {
            self.order.remove(pos);
            self.order.push_back(page);
        }
        true
    }

    /// The page at the front of the order.
    #[inline]
    pub fn oldest(&self) -> Option<PageId> {
        self.order.front().copied()
    }

    /// Independent copy of the current order.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.order.iter().copied().collect()
    }

    /// Iterate resident pages front to back.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.order.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.order.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
