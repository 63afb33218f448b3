//! Bounded, auto-growing sequence containers over owned storage.
//!
//! Two containers, each a single contiguous allocation that the container
//! owns outright:
//!
//! | Container | Order | Push | Pop | Growth when full |
//! |-----------|-------|------|-----|------------------|
//! | [`Fifo`] | insertion order | O(1) amortized | O(1) | capacity × 2 |
//! | [`PriorityQueue`] | by [`Polarity`] | O(log n) | O(log n) | capacity + 1 |
//!
//! Capacity is chosen at construction and never shrinks. A push into a full
//! container reallocates instead of failing, so pushes are infallible.
//!
//! # Quick Start
//!
//! ```
//! use nexus_seq::{Fifo, MaxPriorityQueue};
//!
//! let mut queue: Fifo<u64> = Fifo::with_capacity(3)?;
//! queue.extend([10, 20, 30]);
//! assert_eq!(queue.pop_front()?, 10);
//!
//! let mut heap: MaxPriorityQueue<u64> = MaxPriorityQueue::with_capacity(3)?;
//! heap.extend([30, 10, 20]);
//! assert_eq!(heap.pop()?, 30);
//! # Ok::<(), nexus_seq::Error>(())
//! ```
//!
//! # Absent elements
//!
//! [`Sequence::insert`] and the containers' `insert` methods take an
//! `Option<T>` and reject `None` with [`Error::InvalidInput`]. Use `push` when
//! the value is always present.
//!
//! # Iteration
//!
//! `iter()` borrows the container, so it cannot be mutated while a traversal
//! is alive. Calling `iter()` again starts over. [`Fifo`] iterates oldest
//! first. [`PriorityQueue`] iterates in heap storage order, which is not
//! priority order.
//!
//! ```text
//! Fifo:          front ──► ... ──► rear
//! PriorityQueue: items[0] (root), items[1], items[2], ...
//! ```
//!
//! # Primitive aliases
//!
//! | Alias | Expands to |
//! |-------|-----------|
//! | [`IntFifo`] | `Fifo<i32>` |
//! | [`IntPriorityQueue`] | `PriorityQueue<i32, MinFirst>` |
//! | [`MaxPriorityQueue<T>`] | `PriorityQueue<T, MaxFirst>` |
//! | [`MinPriorityQueue<T>`] | `PriorityQueue<T, MinFirst>` |
//!
//! # Logging
//!
//! Resizes are reported as `tracing` events at `debug` level and rejected
//! inputs at `trace` level. The crate never installs a subscriber.

#![warn(missing_docs)]

pub mod error;
pub mod fifo;
pub mod polarity;
pub mod priority;
pub mod sequence;

pub use error::{Error, Result};
pub use fifo::Fifo;
pub use polarity::{MaxFirst, MinFirst, Polarity};
pub use priority::{MaxPriorityQueue, MinPriorityQueue, PriorityQueue};
pub use sequence::Sequence;

/// FIFO queue specialized for `i32`.
pub type IntFifo = Fifo<i32>;

/// Min-first priority queue specialized for `i32`.
pub type IntPriorityQueue = PriorityQueue<i32, MinFirst>;
