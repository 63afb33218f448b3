//! The sequence-container contract shared by every container in this crate.

use crate::Result;

/// Insert at one end, observe and remove at the other.
///
/// Which element is "first" depends on the container: the oldest element for
/// a [`Fifo`](crate::Fifo), the root of the heap for a
/// [`PriorityQueue`](crate::PriorityQueue).
///
/// Absent elements are modelled as `None`. Callers holding a plain value can
/// use the container's infallible `push` instead.
///
/// # Example
///
/// ```
/// use nexus_seq::{Error, Fifo, MaxPriorityQueue, Sequence};
///
/// fn drain_all<S: Sequence<u32>>(seq: &mut S) -> Vec<u32> {
///     let mut out = Vec::with_capacity(seq.len());
///     while let Ok(v) = seq.remove_first() {
///         out.push(v);
///     }
///     out
/// }
///
/// let mut fifo: Fifo<u32> = Fifo::with_capacity(2)?;
/// let mut heap: MaxPriorityQueue<u32> = MaxPriorityQueue::with_capacity(2)?;
/// for v in [2, 3, 1] {
///     fifo.insert(Some(v))?;
///     heap.insert(Some(v))?;
/// }
///
/// assert_eq!(drain_all(&mut fifo), vec![2, 3, 1]);
/// assert_eq!(drain_all(&mut heap), vec![3, 2, 1]);
/// assert_eq!(fifo.insert(None), Err(Error::InvalidInput));
/// # Ok::<(), nexus_seq::Error>(())
/// ```
pub trait Sequence<T> {
    /// Inserts an element, growing storage if needed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) if `element` is
    /// `None`. The container is left unchanged.
    fn insert(&mut self, element: Option<T>) -> Result<bool>;

    /// Returns the first element without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) if empty.
    fn peek(&self) -> Result<&T>;

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) if empty.
    fn remove_first(&mut self) -> Result<T>;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;
}
