//! Thread safe wrapper around [`RawHeap`] that retains the K lowest ranked items of a stream.
//!
//! Every operation takes the single mutex for its whole duration. `put` and `get` never wait:
//! a full heap evicts its root instead of blocking producers and an empty heap fails with
//! [`HeapError::Underflow`] instead of blocking consumers. The two condition variables are
//! notified on every state change and only waited on by the opt-in `put_blocking`,
//! `get_blocking` and `get_timeout` operations.
use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::predicate::Precedes;
use crate::raw::RawHeap;
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

// upper bound on the slots reserved up front for large or unbounded capacities
const PREALLOCATED_SLOTS: usize = 1024;

pub struct BoundedTopKHeap<T, P> {
    heap: Mutex<RawHeap<T, P>>,
    capacity: usize,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T, P: Precedes<T>> BoundedTopKHeap<T, P> {
    /// Creates an empty heap, a `capacity` of 0 leaves it unbounded
    pub fn new(predicate: P, capacity: usize) -> Self {
        Self {
            heap: Mutex::new(RawHeap::with_capacity(
                predicate,
                capacity.min(PREALLOCATED_SLOTS),
            )),
            capacity,
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    pub fn from_config(predicate: P, config: &HeapConfig) -> Self {
        Self::new(predicate, config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_bounded(&self) -> bool {
        self.capacity > 0
    }

    fn is_full(&self, heap: &RawHeap<T, P>) -> bool {
        self.capacity > 0 && heap.len() >= self.capacity
    }

    /// Inserts `item`, never blocks and never fails.
    ///
    /// On a full heap `item` is compared against the root: it takes the root's place when it is
    /// ordered before it and is dropped otherwise. The evicted root cannot be recovered.
    #[tracing::instrument(skip_all)]
    pub fn put(&self, item: T) {
        let mut heap = self.heap.lock();
        if self.is_full(&heap) {
            match heap.replace_root(item) {
                Ok(_evicted) => tracing::trace!("Evicted root to make room for incoming item"),
                Err(_discarded) => tracing::trace!("Discarded item ranking above current root"),
            }
        } else {
            heap.push(item);
        }
        self.not_empty.notify_one();
    }

    /// Removes the maximum retained item, failing straight away if there is none.
    #[tracing::instrument(skip_all)]
    pub fn get(&self) -> Result<T, HeapError> {
        let mut heap = self.heap.lock();
        let item = heap.pop().ok_or(HeapError::Underflow)?;
        self.not_full.notify_one();
        Ok(item)
    }

    /// Approximate number of retained items, may be stale as soon as it returns
    pub fn size(&self) -> usize {
        self.heap.lock().len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.lock().is_empty()
    }

    /// Removes every retained item under one lock acquisition, maximum first.
    #[tracing::instrument(skip_all)]
    pub fn drain(&self) -> Vec<T> {
        let mut heap = self.heap.lock();
        let mut drained = Vec::with_capacity(heap.len());
        while let Some(item) = heap.pop() {
            drained.push(item);
        }
        tracing::debug!("Drained {} items", drained.len());
        self.not_full.notify_all();
        drained
    }

    /// Bounded queue style insert: waits for room instead of evicting.
    ///
    /// Identical to [`Self::put`] on an unbounded heap.
    #[tracing::instrument(skip_all)]
    pub fn put_blocking(&self, item: T) {
        let mut heap = self.heap.lock();
        while self.is_full(&heap) {
            self.not_full.wait(&mut heap);
        }
        heap.push(item);
        self.not_empty.notify_one();
    }

    /// Waits until an item is available and removes the maximum.
    #[tracing::instrument(skip_all)]
    pub fn get_blocking(&self) -> T {
        let mut heap = self.heap.lock();
        loop {
            if let Some(item) = heap.pop() {
                self.not_full.notify_one();
                return item;
            }
            self.not_empty.wait(&mut heap);
        }
    }

    /// Like [`Self::get_blocking`] but gives up with [`HeapError::Underflow`] once `timeout`
    /// elapses on an empty heap.
    #[tracing::instrument(skip_all)]
    pub fn get_timeout(&self, timeout: Duration) -> Result<T, HeapError> {
        let mut heap = self.heap.lock();
        // a timeout too large for a deadline waits indefinitely
        self.not_empty
            .wait_while_for(&mut heap, |heap| heap.is_empty(), timeout);
        let item = heap.pop().ok_or(HeapError::Underflow)?;
        self.not_full.notify_one();
        Ok(item)
    }

    /// Checks the heap property under the lock
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        self.heap.lock().is_valid()
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for BoundedTopKHeap<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedTopKHeap")
            .field("heap", &*self.heap.lock())
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Order, cmp_gt, cmp_lt};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn test_retains_three_smallest() {
        let heap = BoundedTopKHeap::new(lt, 3);
        for value in [5, 3, 8, 1, 9, 2] {
            heap.put(value);
            assert!(heap.size() <= 3);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.get(), Ok(3));
        assert_eq!(heap.get(), Ok(2));
        assert_eq!(heap.get(), Ok(1));
        assert_eq!(heap.get(), Err(HeapError::Underflow));
    }

    #[test]
    fn test_get_on_empty_heap_underflows_and_leaves_it_unchanged() {
        let heap = BoundedTopKHeap::new(lt, 2);
        assert_eq!(heap.get(), Err(HeapError::Underflow));
        assert_eq!(heap.size(), 0);

        heap.put(7);
        assert_eq!(heap.get(), Ok(7));
        assert_eq!(heap.get(), Err(HeapError::Underflow));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_unbounded_never_evicts() {
        let heap = BoundedTopKHeap::new(lt, 0);
        assert!(!heap.is_bounded());
        for (count, value) in (0..500).rev().enumerate() {
            heap.put(value);
            assert_eq!(heap.size(), count + 1);
        }
        for remaining in (0..500).rev() {
            heap.get().unwrap();
            assert_eq!(heap.len(), remaining);
        }
    }

    #[rstest]
    #[case(Order::Lt, vec![("c", 3), ("b", 2), ("a", 1)])]
    #[case(Order::Gt, vec![("e", 8), ("f", 9), ("g", 10)])]
    fn test_order_picks_retained_end(#[case] order: Order, #[case] expected: Vec<(&str, i32)>) {
        let heap = BoundedTopKHeap::new(order, 3);
        let stream = [
            ("e", 8),
            ("a", 1),
            ("g", 10),
            ("c", 3),
            ("d", 5),
            ("b", 2),
            ("f", 9),
        ];
        for item in stream {
            heap.put(item);
        }
        assert_eq!(heap.drain(), expected);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_canonical_pair_predicates() {
        let smallest = BoundedTopKHeap::new(cmp_lt::<&str, f64>, 2);
        let largest = BoundedTopKHeap::new(cmp_gt::<&str, f64>, 2);
        for item in [("x", 0.4), ("y", 0.1), ("z", 0.9), ("w", 0.6)] {
            smallest.put(item);
            largest.put(item);
        }
        assert_eq!(smallest.drain(), vec![("x", 0.4), ("y", 0.1)]);
        assert_eq!(largest.drain(), vec![("w", 0.6), ("z", 0.9)]);
    }

    #[test]
    fn test_equal_to_root_is_discarded_when_full() {
        let heap = BoundedTopKHeap::new(cmp_lt::<&str, i32>, 2);
        heap.put(("first", 4));
        heap.put(("second", 1));
        heap.put(("late", 4));
        assert_eq!(heap.drain(), vec![("first", 4), ("second", 1)]);
    }

    #[test]
    fn test_from_config() {
        let heap = BoundedTopKHeap::from_config(lt, &HeapConfig::unbounded().capacity(4));
        assert_eq!(heap.capacity(), 4);
        for value in 0..10 {
            heap.put(value);
        }
        assert_eq!(heap.drain(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_get_timeout_underflows_on_empty_heap() {
        let heap = BoundedTopKHeap::new(lt, 1);
        assert_eq!(
            heap.get_timeout(Duration::from_millis(10)),
            Err(HeapError::Underflow)
        );
    }

    #[test]
    fn test_get_timeout_returns_available_item() {
        let heap = BoundedTopKHeap::new(lt, 1);
        heap.put(11);
        assert_eq!(heap.get_timeout(Duration::from_millis(10)), Ok(11));
    }

    #[test]
    fn test_get_timeout_with_unbounded_duration_returns_available_item() {
        let heap = BoundedTopKHeap::new(lt, 1);
        heap.put(4);
        assert_eq!(heap.get_timeout(Duration::MAX), Ok(4));
    }
}
