//! Frame store - the resident set of one simulator.
//!
//! A [`FrameStore`] holds the pages currently occupying frames, bounded by
//! a [`FrameSize`]. Iteration order is arrival order: evicted pages are
//! removed in place and new pages are appended at the end.

use std::collections::HashSet;
use std::hash::Hash;

use crate::common::FrameSize;

/// A capacity-bounded, ordered set of resident pages.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - no page appears twice
///
/// # Example
/// ```
/// use pagesim::FrameSize;
/// use pagesim::replacement::FrameStore;
///
/// let mut store = FrameStore::new(FrameSize::new(2).unwrap());
/// store.insert(7);
/// store.insert(0);
/// assert!(store.is_full());
/// assert!(store.remove(&7));
/// store.insert(1);
/// assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameStore<P> {
    /// Resident pages in arrival order.
    pages: Vec<P>,

    /// Set for O(1) membership check.
    members: HashSet<P>,

    capacity: FrameSize,
}

impl<P: Eq + Hash + Clone> FrameStore<P> {
    /// Create an empty store with room for `capacity` pages.
    pub fn new(capacity: FrameSize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity.get()),
            members: HashSet::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: &P) -> bool {
        self.members.contains(page)
    }

    /// Append a page that is not yet resident.
    ///
    /// The caller must make room first: inserting into a full store, or
    /// inserting a page twice, is a simulator bug.
    pub fn insert(&mut self, page: P) {
        debug_assert!(!self.is_full(), "insert into a full frame store");
        if self.members.insert(page.clone()) {
            self.pages.push(page);
        }
    }

    /// Remove a resident page, keeping the order of the rest.
    ///
    /// Returns `false` if the page was not resident.
    pub fn remove(&mut self, page: &P) -> bool {
        if !self.members.remove(page) {
            return false;
        }
        if let Some(pos) = self.pages.iter().position(|p| p == page) {
            self.pages.remove(pos);
        }
        true
    }

    /// Resident pages in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.pages.iter()
    }

    /// Resident pages in arrival order, as a slice.
    pub fn as_slice(&self) -> &[P] {
        &self.pages
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity.get()
    }

    #[inline]
    pub fn capacity(&self) -> FrameSize {
        self.capacity
    }
}

impl<'a, P> IntoIterator for &'a FrameStore<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(frames: usize) -> FrameStore<u32> {
        FrameStore::new(FrameSize::new(frames).unwrap())
    }

    #[test]
    fn test_store_basic() {
        let mut s = store(3);
        assert!(s.is_empty());

        s.insert(1);
        s.insert(2);
        assert_eq!(s.len(), 2);
        assert!(s.contains(&1));
        assert!(!s.contains(&3));
        assert!(!s.is_full());

        s.insert(3);
        assert!(s.is_full());
        assert_eq!(s.capacity().get(), 3);
    }

    #[test]
    fn test_store_remove_keeps_order() {
        let mut s = store(3);
        s.insert(1);
        s.insert(2);
        s.insert(3);

        assert!(s.remove(&2));
        assert!(!s.contains(&2));
        s.insert(4);

        assert_eq!(s.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn test_store_remove_missing() {
        let mut s = store(2);
        s.insert(1);
        assert!(!s.remove(&9));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_store_duplicate_insert_ignored() {
        let mut s = store(3);
        s.insert(5);
        s.insert(5);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_store_generic_pages() {
        let mut s: FrameStore<&str> = FrameStore::new(FrameSize::new(2).unwrap());
        s.insert("a");
        s.insert("b");
        assert!(s.contains(&"a"));
        assert_eq!((&s).into_iter().count(), 2);
    }
}
