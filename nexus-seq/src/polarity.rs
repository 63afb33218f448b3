//! Ordering direction for priority queues.
//!
//! Priority is layered on [`Ord`]: a [`Polarity`] decides which end of the
//! total order is served first.
//!
//! ```text
//! MaxFirst: outranks(a, b) <=> a > b   (root holds the maximum)
//! MinFirst: outranks(a, b) <=> a < b   (root holds the minimum)
//! ```

use core::cmp::Ordering;

/// Direction in which a [`PriorityQueue`](crate::PriorityQueue) orders its
/// elements.
///
/// Implemented by the uninhabited markers [`MaxFirst`] and [`MinFirst`].
pub trait Polarity {
    /// Short name used in debug output.
    const NAME: &'static str;

    /// Three-way priority comparison.
    ///
    /// `Greater` means `a` has strictly higher priority than `b`.
    fn compare<T: Ord>(a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` has strictly higher priority than `b`.
    ///
    /// Equal elements never outrank each other.
    #[inline]
    fn outranks<T: Ord>(a: &T, b: &T) -> bool {
        Self::compare(a, b).is_gt()
    }
}

/// Largest element first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxFirst {}

/// Smallest element first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinFirst {}

impl Polarity for MaxFirst {
    const NAME: &'static str = "max-first";

    #[inline]
    fn compare<T: Ord>(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl Polarity for MinFirst {
    const NAME: &'static str = "min-first";

    #[inline]
    fn compare<T: Ord>(a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
