//! Fifo - a circular-buffer queue that doubles its storage when full.
//!
//! Elements live in a boxed slice of slots. Two cursors describe the logical
//! contents:
//!
//! ```text
//! capacity = 6, front = 4, len = 4
//!
//!   slot:   0     1     2     3     4     5
//!         ┌─────┬─────┬─────┬─────┬─────┬─────┐
//!         │  c  │  d  │  -  │  -  │  a  │  b  │
//!         └─────┴─────┴─────┴─────┴─────┴─────┘
//!                                   ^front
//!
//! logical element i lives at slot (front + i) % capacity
//! ```
//!
//! Slots outside the logical range are always empty: popping moves the
//! element out and leaves `None` behind.

use core::fmt;
use core::iter::FusedIterator;

use crate::error::check_capacity;
use crate::{Error, Result, Sequence};

/// Capacity used by [`Fifo::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A FIFO queue over a circular buffer.
///
/// Capacity is fixed at construction but grows automatically: when a push
/// finds every slot occupied, storage is reallocated at twice the capacity
/// and the elements are compacted to start at slot 0. Pushes are O(1)
/// amortized, pops and peeks are O(1).
///
/// # Example
///
/// ```
/// use nexus_seq::Fifo;
///
/// let mut queue: Fifo<u64> = Fifo::with_capacity(3)?;
/// queue.push(10);
/// queue.push(20);
/// queue.push(30);
/// queue.push(40); // full: capacity doubles to 6
///
/// assert_eq!(queue.len(), 4);
/// assert_eq!(queue.capacity(), 6);
/// assert_eq!(queue.pop_front()?, 10);
/// assert_eq!(queue.peek_front()?, &20);
/// # Ok::<(), nexus_seq::Error>(())
/// ```
pub struct Fifo<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

impl<T> Fifo<T> {
    /// Creates an empty queue with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            slots: empty_slots(capacity),
            front: 0,
            len: 0,
        })
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot holding logical element `offset`.
    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % self.slots.len()
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Appends a value at the rear, doubling storage first if the queue is
    /// full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let rear = self.slot(self.len);
        self.slots[rear] = Some(value);
        self.len += 1;
    }

    /// Appends an element that may be absent.
    ///
    /// Always returns `Ok(true)` for a present element: growth guarantees
    /// there is room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `element` is `None`. The queue is
    /// not modified.
    pub fn insert(&mut self, element: Option<T>) -> Result<bool> {
        let Some(value) = element else {
            tracing::trace!(len = self.len, "fifo rejected absent element");
            return Err(Error::InvalidInput);
        };
        self.push(value);
        Ok(true)
    }

    /// Reallocates at twice the capacity, compacting elements to slot 0.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity);
        let mut slots = empty_slots(new_capacity);
        for (i, dst) in slots.iter_mut().take(self.len).enumerate() {
            let src = self.slot(i);
            *dst = self.slots[src].take();
        }
        self.slots = slots;
        self.front = 0;
        tracing::debug!(old_capacity, new_capacity, len = self.len, "fifo full, grew storage");
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let value = self.slots[self.front]
            .take()
            .ok_or(Error::EmptyContainer)?;
        self.front = self.slot(1);
        self.len -= 1;
        Ok(value)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    pub fn peek_front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.slots[self.front].as_ref().ok_or(Error::EmptyContainer)
    }

    /// Returns an iterator over the elements, oldest first.
    ///
    /// The iterator borrows the queue, so the queue cannot be modified while
    /// it is alive. Call `iter` again to restart from the front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            fifo: self,
            offset: 0,
        }
    }
}

/// Doubling growth.
#[inline]
fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_mul(2)
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            front: 0,
            len: 0,
        }
    }
}

impl<T> Extend<T> for Fifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> Sequence<T> for Fifo<T> {
    #[inline]
    fn insert(&mut self, element: Option<T>) -> Result<bool> {
        Fifo::insert(self, element)
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.peek_front()
    }

    #[inline]
    fn remove_first(&mut self) -> Result<T> {
        self.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Fifo::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Fifo::len(self)
    }
}

/// Renders the logical contents oldest first, padded with `None` up to the
/// capacity: `[10, 20, None]`.
impl<T: fmt::Display> fmt::Display for Fifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.capacity() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.slots[self.slot(i)].as_ref().filter(|_| i < self.len) {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("None")?,
            }
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for Fifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fifo")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("front", &self.front)
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a Fifo<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over a [`Fifo`], oldest element first.
///
/// Created by [`Fifo::iter`].
pub struct Iter<'a, T> {
    fifo: &'a Fifo<T>,
    offset: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Returns the next element, or an error once the traversal is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoNextElement`] when every element has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.next().ok_or(Error::NoNextElement)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            fifo: self.fifo,
            offset: self.offset,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.offset >= self.fifo.len {
            return None;
        }
        let slot = self.fifo.slot(self.offset);
        self.offset += 1;
        self.fifo.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.fifo.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Fifo<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
