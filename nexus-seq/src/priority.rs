//! PriorityQueue - a binary heap over owned contiguous storage.
//!
//! The heap is a complete binary tree stored implicitly by index:
//!
//! ```text
//! children of i: 2i + 1, 2i + 2
//! parent of i:   (i - 1) / 2
//! ```
//!
//! The [`Polarity`] parameter picks which end of the order sits at the root.
//! Every node outranks or ties with both of its children.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::error::check_capacity;
use crate::{Error, MaxFirst, MinFirst, Polarity, Result, Sequence};

/// Capacity used by [`PriorityQueue::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A priority queue backed by a binary heap.
///
/// The root is always the highest-priority element under `P`: the maximum
/// for [`MaxFirst`], the minimum for [`MinFirst`]. Push and pop are
/// O(log n), peek is O(1).
///
/// # Growth
///
/// When a push finds the heap full, capacity grows by exactly one slot.
/// This is linear growth, so a run of pushes past the initial capacity costs
/// O(n) per push in reallocation. Size the initial capacity for the expected
/// load.
///
/// # Ties
///
/// Equal elements are never swapped during sift-up or sift-down. The order
/// in which equal elements come out is deterministic but unspecified: this
/// is not a stable priority queue.
///
/// # Example
///
/// ```
/// use nexus_seq::MaxPriorityQueue;
///
/// let mut heap: MaxPriorityQueue<u64> = MaxPriorityQueue::with_capacity(3)?;
/// heap.push(30);
/// heap.push(10);
/// heap.push(20);
///
/// assert_eq!(heap.peek()?, &30);
/// assert_eq!(heap.pop()?, 30);
/// assert_eq!(heap.pop()?, 20);
/// assert_eq!(heap.pop()?, 10);
/// assert!(heap.is_empty());
/// # Ok::<(), nexus_seq::Error>(())
/// ```
pub struct PriorityQueue<T: Ord, P: Polarity> {
    /// Heap-ordered elements; `items.len()` is the element count.
    items: Vec<T>,
    /// Logical capacity. `items` never holds more than this.
    capacity: usize,
    _polarity: PhantomData<P>,
}

/// Largest element first.
pub type MaxPriorityQueue<T> = PriorityQueue<T, MaxFirst>;

/// Smallest element first.
pub type MinPriorityQueue<T> = PriorityQueue<T, MinFirst>;

impl<T: Ord, P: Polarity> PriorityQueue<T, P> {
    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self::with_checked_capacity(capacity))
    }

    fn with_checked_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            _polarity: PhantomData,
        }
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Pushes a value onto the heap, growing by one slot first if full.
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Pushes an element that may be absent.
    ///
    /// Always returns `Ok(true)` for a present element: growth guarantees
    /// there is room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `element` is `None`. The heap is
    /// not modified.
    pub fn insert(&mut self, element: Option<T>) -> Result<bool> {
        let Some(value) = element else {
            tracing::trace!(len = self.len(), polarity = P::NAME, "heap rejected absent element");
            return Err(Error::InvalidInput);
        };
        self.push(value);
        Ok(true)
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = grown_capacity(old_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.items.len(),
            polarity = P::NAME,
            "heap full, grew storage"
        );
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the root element.
    ///
    /// The last element moves to the root and sifts down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        let last = self.items.pop().ok_or(Error::EmptyContainer)?;
        if self.items.is_empty() {
            return Ok(last);
        }
        let root = core::mem::replace(&mut self.items[0], last);
        self.sift_down(0);
        Ok(root)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pops elements while the predicate holds for the root.
    ///
    /// Elements come out in priority order.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_seq::MinPriorityQueue;
    ///
    /// let mut heap: MinPriorityQueue<u64> = MinPriorityQueue::with_capacity(4)?;
    /// heap.extend([1, 5, 3, 7]);
    ///
    /// let expired: Vec<_> = heap.drain_while(|&deadline| deadline < 4).collect();
    /// assert_eq!(expired, vec![1, 3]);
    /// assert_eq!(heap.peek()?, &5);
    /// # Ok::<(), nexus_seq::Error>(())
    /// ```
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, P, F>
    where
        F: FnMut(&T) -> bool,
    {
        DrainWhile { heap: self, pred }
    }

    /// Consumes the heap, returning its elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Ok(value) = self.pop() {
            out.push(value);
        }
        out
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the root element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyContainer)
    }

    /// Returns an iterator over the elements in heap storage order.
    ///
    /// Storage order is the level-order layout of the tree, not priority
    /// order. Only the first element is guaranteed to be the root. Use
    /// [`into_sorted_vec`](Self::into_sorted_vec) for priority order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// Moves the element at `pos` toward the root until its parent ranks at
    /// least as high.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !P::outranks(&self.items[pos], &self.items[parent]) {
                break;
            }
            self.items.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` toward the leaves until neither child
    /// strictly outranks it.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut winner = pos;

            if left < len && P::outranks(&self.items[left], &self.items[winner]) {
                winner = left;
            }
            if right < len && P::outranks(&self.items[right], &self.items[winner]) {
                winner = right;
            }
            if winner == pos {
                break;
            }
            self.items.swap(pos, winner);
            pos = winner;
        }
    }
}

/// Linear growth.
#[inline]
fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_add(1)
}

impl<T: Ord, P: Polarity> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::with_checked_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: Ord, P: Polarity> Extend<T> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord, P: Polarity> Sequence<T> for PriorityQueue<T, P> {
    #[inline]
    fn insert(&mut self, element: Option<T>) -> Result<bool> {
        PriorityQueue::insert(self, element)
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        PriorityQueue::peek(self)
    }

    #[inline]
    fn remove_first(&mut self) -> Result<T> {
        self.pop()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

/// Renders the elements in heap storage order, padded with `None` up to the
/// capacity: `[30, 10, 20, None]`.
impl<T: Ord + fmt::Display, P: Polarity> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.capacity {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.items.get(i) {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("None")?,
            }
        }
        f.write_str("]")
    }
}

impl<T: Ord + fmt::Debug, P: Polarity> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("polarity", &P::NAME)
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("elements", &self.items)
            .finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over a [`PriorityQueue`] in heap storage order.
///
/// Created by [`PriorityQueue::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    /// Returns the next element, or an error once the traversal is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoNextElement`] when every element has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.inner.next().ok_or(Error::NoNextElement)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T: Ord, P: Polarity> IntoIterator for &'a PriorityQueue<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator that pops roots while a predicate holds.
///
/// Created by [`PriorityQueue::drain_while`].
pub struct DrainWhile<'a, T: Ord, P: Polarity, F>
where
    F: FnMut(&T) -> bool,
{
    heap: &'a mut PriorityQueue<T, P>,
    pred: F,
}

impl<T: Ord, P: Polarity, F> Iterator for DrainWhile<'_, T, P, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let root = self.heap.peek().ok()?;
        if (self.pred)(root) {
            self.heap.pop().ok()
        } else {
            None
        }
    }
}
