//! Array backed binary heap ordered by an injected [`Precedes`] relation.
//!
//! The element at index `i` has its children at `2i + 1` and `2i + 2`. A parent is never ordered
//! before any of its children, which makes the root the maximum under the relation. Pairing that
//! max-heap shape with [`RawHeap::push_pop`] is what lets a bounded heap retain the K items that
//! rank lowest across a stream: the root is always the first candidate for eviction.
use crate::predicate::Precedes;

pub struct RawHeap<T, P> {
    data: Vec<T>,
    predicate: P,
}

impl<T, P: Precedes<T>> RawHeap<T, P> {
    pub fn new(predicate: P) -> Self {
        Self {
            data: Vec::new(),
            predicate,
        }
    }

    pub fn with_capacity(predicate: P, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            predicate,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The maximum item under the relation
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Appends `item` and settles it towards the root.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(0, last);
    }

    /// Removes the root.
    ///
    /// The last item takes over the vacated root slot and is settled downwards, unless it was the
    /// only item left in which case it is handed back as is.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Offers `item` against the root and returns whichever of the two is discarded.
    ///
    /// Cheaper than a push followed by a pop as the root is compared directly and at most one
    /// downward pass happens.
    pub fn push_pop(&mut self, item: T) -> T {
        match self.replace_root(item) {
            Ok(evicted) | Err(evicted) => evicted,
        }
    }

    /// Replaces the root with `item` when `item` is ordered before it.
    ///
    /// Returns `Ok(previous_root)` on replacement and hands `item` back as `Err` when it was
    /// rejected, which is also the case on an empty heap.
    pub(crate) fn replace_root(&mut self, item: T) -> Result<T, T> {
        let evicts_root = match self.data.first() {
            Some(root) => self.predicate.precedes(&item, root),
            None => false,
        };
        if !evicts_root {
            return Err(item);
        }
        let evicted = std::mem::replace(&mut self.data[0], item);
        self.sift_down(0);
        Ok(evicted)
    }

    /// Drains the heap, root first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Follows the path from `pos` towards `start`, moving parents down until the item fits.
    fn sift_up(&mut self, start: usize, mut pos: usize) {
        while pos > start {
            let parent = (pos - 1) >> 1;
            if !self
                .predicate
                .precedes(&self.data[parent], &self.data[pos])
            {
                break;
            }
            self.data.swap(parent, pos);
            pos = parent;
        }
    }

    /// Walks the item at `pos` down to a leaf by promoting the larger child at every level, then
    /// settles it back up towards `pos`.
    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        let start = pos;
        let mut child = 2 * pos + 1;
        while child < end {
            let right = child + 1;
            // ties go to the right child
            if right < end
                && !self
                    .predicate
                    .precedes(&self.data[right], &self.data[child])
            {
                child = right;
            }
            self.data.swap(pos, child);
            pos = child;
            child = 2 * pos + 1;
        }
        self.sift_up(start, pos);
    }

    /// Checks that no child is ordered before its parent
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            !self
                .predicate
                .precedes(&self.data[(i - 1) / 2], &self.data[i])
        })
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: std::fmt::Debug, P> std::fmt::Debug for RawHeap<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawHeap").field("data", &self.data).finish()
    }
}
