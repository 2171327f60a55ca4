//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one page in a reference string.
///
/// Serialized transparently as its integer value so exported histories
/// read as plain arrays of numbers.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Build a reference string from raw page numbers.
    pub fn sequence<I: IntoIterator<Item = u32>>(ids: I) -> Vec<PageId> {
        ids.into_iter().map(PageId).collect()
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
        assert_eq!(format!("{}", PageId::new(u32::MAX)), "Page(4294967295)");
    }

    #[test]
    fn test_sequence() {
        let seq = PageId::sequence([7, 0, 1]);
        assert_eq!(seq, vec![PageId(7), PageId(0), PageId(1)]);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&PageId::new(9)).unwrap();
        assert_eq!(json, "9");
        let back: PageId = serde_json::from_str("9").unwrap();
        assert_eq!(back, PageId::new(9));
    }
}
