use std::collections::{BinaryHeap, VecDeque};
use std::cmp::Reverse;

use nexus_seq::{
    Error, Fifo, IntFifo, IntPriorityQueue, MaxPriorityQueue, MinPriorityQueue, Sequence,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// FIFO order
// =============================================================================

#[test]
fn fifo_removal_order_matches_insertion() {
    let mut queue = IntFifo::with_capacity(3).unwrap();
    for v in [10, 20, 30] {
        assert_eq!(queue.insert(Some(v)), Ok(true));
    }

    assert_eq!(queue.pop_front(), Ok(10));
    assert_eq!(queue.pop_front(), Ok(20));
    assert_eq!(queue.pop_front(), Ok(30));
    assert!(queue.is_empty());
}

#[test]
fn fifo_matches_vecdeque_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue: Fifo<u32> = Fifo::with_capacity(1).unwrap();
    let mut oracle = VecDeque::new();

    for _ in 0..10_000 {
        if rng.random_range(0..3) < 2 {
            let v = rng.random_range(0..1_000);
            queue.push(v);
            oracle.push_back(v);
        } else {
            assert_eq!(queue.pop_front().ok(), oracle.pop_front());
        }
        assert_eq!(queue.len(), oracle.len());
        assert_eq!(queue.peek_front().ok(), oracle.front());
        assert!(queue.len() <= queue.capacity());
    }

    assert!(queue.iter().eq(oracle.iter()));
}

// =============================================================================
// Heap extremal correctness
// =============================================================================

#[test]
fn max_heap_example() {
    let mut heap: MaxPriorityQueue<i32> = MaxPriorityQueue::with_capacity(3).unwrap();
    heap.extend([30, 10, 20]);

    assert_eq!(heap.peek(), Ok(&30));
    assert_eq!(heap.pop(), Ok(30));
    assert_eq!(heap.pop(), Ok(20));
    assert_eq!(heap.pop(), Ok(10));
    assert!(heap.is_empty());
}

#[test]
fn int_priority_queue_is_min_first() {
    let mut heap = IntPriorityQueue::with_capacity(3).unwrap();
    heap.extend([30, 10, 20]);

    assert_eq!(heap.peek(), Ok(&10));
    assert_eq!(heap.into_sorted_vec(), vec![10, 20, 30]);
}

#[test]
fn max_heap_matches_binary_heap_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap: MaxPriorityQueue<i64> = MaxPriorityQueue::with_capacity(4).unwrap();
    let mut oracle = BinaryHeap::new();

    for _ in 0..5_000 {
        if rng.random_range(0..3) < 2 {
            let v = rng.random_range(-500..500);
            heap.push(v);
            oracle.push(v);
        } else {
            assert_eq!(heap.pop().ok(), oracle.pop());
        }
        assert_eq!(heap.peek().ok(), oracle.peek());
        assert_eq!(heap.len(), oracle.len());
    }
}

#[test]
fn min_heap_matches_reversed_binary_heap_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap: MinPriorityQueue<u16> = MinPriorityQueue::with_capacity(1).unwrap();
    let mut oracle = BinaryHeap::new();

    for _ in 0..5_000 {
        if rng.random_range(0..3) < 2 {
            let v = rng.random_range(0..100);
            heap.push(v);
            oracle.push(Reverse(v));
        } else {
            assert_eq!(heap.pop().ok(), oracle.pop().map(|Reverse(v)| v));
        }
        assert_eq!(heap.peek().ok(), oracle.peek().map(|Reverse(v)| v));
    }
}

// =============================================================================
// Resize preserves contents
// =============================================================================

#[test]
fn fifo_resize_doubles_and_keeps_front() {
    let mut queue = IntFifo::with_capacity(3).unwrap();
    queue.extend([10, 20, 30, 40]);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.capacity(), 6);
    assert_eq!(queue.peek_front(), Ok(&10));
}

#[test]
fn heap_resize_adds_one_slot() {
    let mut heap: MaxPriorityQueue<i32> = MaxPriorityQueue::with_capacity(2).unwrap();
    heap.extend([50, 30, 20]);

    assert_eq!(heap.len(), 3);
    assert_eq!(heap.capacity(), 3);
    assert_eq!(heap.peek(), Ok(&50));
}

// =============================================================================
// Emptiness and idempotent queries
// =============================================================================

fn check_queries<S: Sequence<i32>>(seq: &S) {
    assert_eq!(seq.is_empty(), seq.len() == 0);
    assert_eq!(seq.len(), seq.len());
    assert_eq!(seq.peek(), seq.peek());
}

#[test]
fn emptiness_tracks_len() {
    let mut queue = IntFifo::with_capacity(2).unwrap();
    let mut heap = IntPriorityQueue::with_capacity(2).unwrap();

    check_queries(&queue);
    check_queries(&heap);

    queue.push(1);
    heap.push(1);
    check_queries(&queue);
    check_queries(&heap);
    assert!(!Sequence::is_empty(&queue));
    assert!(!Sequence::is_empty(&heap));

    assert_eq!(queue.remove_first(), Ok(1));
    assert_eq!(heap.remove_first(), Ok(1));
    assert!(Sequence::is_empty(&queue));
    assert!(Sequence::is_empty(&heap));
}

#[test]
fn capacity_is_stable_without_mutation() {
    let queue = IntFifo::with_capacity(5).unwrap();
    let heap = IntPriorityQueue::with_capacity(5).unwrap();
    assert_eq!(queue.capacity(), queue.capacity());
    assert_eq!(heap.capacity(), heap.capacity());
}

// =============================================================================
// Error round-trip
// =============================================================================

#[test]
fn zero_capacity_never_constructs() {
    let expected = Err(Error::InvalidConfiguration { capacity: 0 });
    assert_eq!(IntFifo::with_capacity(0).map(|_| ()), expected);
    assert_eq!(IntPriorityQueue::with_capacity(0).map(|_| ()), expected);
    assert_eq!(MaxPriorityQueue::<String>::with_capacity(0).map(|_| ()), expected);
}

#[test]
fn absent_element_rejected_without_mutation() {
    let mut queue: Fifo<String> = Fifo::with_capacity(1).unwrap();
    let mut heap: MaxPriorityQueue<String> = MaxPriorityQueue::with_capacity(1).unwrap();
    queue.push("a".to_string());
    heap.push("a".to_string());

    assert_eq!(Sequence::insert(&mut queue, None), Err(Error::InvalidInput));
    assert_eq!(Sequence::insert(&mut heap, None), Err(Error::InvalidInput));
    assert_eq!(queue.len(), 1);
    assert_eq!(heap.len(), 1);
    assert_eq!(queue.capacity(), 1);
    assert_eq!(heap.capacity(), 1);
}

#[test]
fn empty_container_errors() {
    let mut queue = IntFifo::with_capacity(1).unwrap();
    let mut heap = IntPriorityQueue::with_capacity(1).unwrap();

    assert_eq!(queue.peek_front(), Err(Error::EmptyContainer));
    assert_eq!(queue.pop_front(), Err(Error::EmptyContainer));
    assert_eq!(heap.peek(), Err(Error::EmptyContainer));
    assert_eq!(heap.pop(), Err(Error::EmptyContainer));

    // Still usable afterwards
    queue.push(1);
    heap.push(1);
    assert_eq!(queue.len(), 1);
    assert_eq!(heap.len(), 1);
}

// =============================================================================
// Iteration count
// =============================================================================

#[test]
fn iteration_yields_len_elements() {
    let mut queue = IntFifo::with_capacity(4).unwrap();
    let mut heap = IntPriorityQueue::with_capacity(4).unwrap();

    for n in 0..20 {
        assert_eq!(queue.iter().count(), n);
        assert_eq!(heap.iter().count(), n);
        queue.push(n as i32);
        heap.push(-(n as i32));
        if n % 3 == 0 {
            queue.pop_front().unwrap();
            queue.push(100);
        }
    }
}

#[test]
fn heap_iteration_starts_at_root() {
    let mut heap: MaxPriorityQueue<char> = MaxPriorityQueue::with_capacity(2).unwrap();
    heap.extend("heap".chars());

    assert_eq!(heap.iter().next(), Some(&'p'));
    let mut seen: Vec<_> = heap.iter().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, vec!['a', 'e', 'h', 'p']);
}

#[test]
fn exhausted_iterator_reports_error() {
    let queue: Fifo<u8> = Fifo::with_capacity(1).unwrap();
    let heap: MinPriorityQueue<u8> = MinPriorityQueue::with_capacity(1).unwrap();

    assert_eq!(queue.iter().try_next(), Err(Error::NoNextElement));
    assert_eq!(heap.iter().try_next(), Err(Error::NoNextElement));
}
