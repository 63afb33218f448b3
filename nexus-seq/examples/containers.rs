//! Walks each container through a short scenario and prints its state.
//!
//! Run with: RUST_LOG=debug cargo run -p nexus-seq --example containers

use nexus_seq::{IntFifo, IntPriorityQueue, MaxPriorityQueue, Result, Sequence};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    fifo()?;
    int_heap()?;
    generic_heap()?;
    Ok(())
}

fn fifo() -> Result<()> {
    println!("=== IntFifo ===");
    let mut queue = IntFifo::with_capacity(3)?;
    println!("empty: {}, size: {}", queue.is_empty(), queue.len());

    for v in [10, 20, 30, 40] {
        println!("insert {v}: {}", queue.insert(Some(v))?);
    }
    println!("contents: {queue} (capacity {})", queue.capacity());
    println!("front: {}", queue.peek_front()?);

    println!("pop: {}", queue.pop_front()?);
    println!("contents: {queue}");

    println!("insert 50: {}", queue.insert(Some(50))?);
    println!("contents: {queue}");

    match queue.insert(None) {
        Ok(_) => println!("absent element accepted"),
        Err(e) => println!("insert None: {e}"),
    }
    Ok(())
}

fn int_heap() -> Result<()> {
    println!("\n=== IntPriorityQueue (min-first) ===");
    let mut heap = IntPriorityQueue::with_capacity(3)?;
    for v in [30, 10, 20, 5] {
        heap.push(v);
        println!("push {v}: {heap}");
    }

    print!("iteration (storage order):");
    for v in &heap {
        print!(" {v}");
    }
    println!();

    drain::<i32, _>("pop order", &mut heap);
    if let Err(e) = heap.peek() {
        println!("peek on empty: {e}");
    }
    Ok(())
}

fn generic_heap() -> Result<()> {
    println!("\n=== MaxPriorityQueue<&str> ===");
    let mut heap: MaxPriorityQueue<&str> = MaxPriorityQueue::with_capacity(2)?;
    heap.extend(["Charlie", "Alice", "Bob"]);
    println!("contents: {heap} (capacity {})", heap.capacity());
    drain::<&str, _>("pop order", &mut heap);
    Ok(())
}

fn drain<T: std::fmt::Display, S: Sequence<T>>(label: &str, seq: &mut S) {
    print!("{label}:");
    while let Ok(v) = seq.remove_first() {
        print!(" {v}");
    }
    println!();
}
