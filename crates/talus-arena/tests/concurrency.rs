//! Concurrent allocation scenarios.
//!
//! T threads each perform M fixed-size allocations on one shared arena
//! sized for all of them. Every returned handle must be pairwise disjoint,
//! in bounds, and aligned — the single-lock design makes each allocation
//! atomic, so no two threads can ever be handed overlapping ranges.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::unbounded;
use talus_arena::Arena;

const THREADS: usize = 8;
const ALLOCS_PER_THREAD: usize = 64;
const ALLOC_SIZE: usize = 16;
const ALLOC_ALIGN: usize = 8;

#[test]
fn concurrent_allocations_are_disjoint() {
    let capacity = THREADS * ALLOCS_PER_THREAD * ALLOC_SIZE + 1024;
    let arena = Arc::new(Arena::new(capacity).unwrap());
    let (tx, rx) = unbounded();

    let mut workers = Vec::new();
    for _ in 0..THREADS {
        let arena = Arc::clone(&arena);
        let tx = tx.clone();
        workers.push(thread::spawn(move || {
            for _ in 0..ALLOCS_PER_THREAD {
                let handle = arena.allocate(ALLOC_SIZE, ALLOC_ALIGN).unwrap();
                tx.send(handle).unwrap();
            }
        }));
    }
    drop(tx);
    for worker in workers {
        worker.join().unwrap();
    }

    let mut handles: Vec<_> = rx.iter().collect();
    assert_eq!(handles.len(), THREADS * ALLOCS_PER_THREAD);

    for h in &handles {
        assert_eq!(h.offset() % ALLOC_ALIGN, 0);
        assert!(h.offset() + h.len() <= arena.capacity());
    }

    handles.sort_by_key(|h| h.offset());
    for pair in handles.windows(2) {
        assert!(pair[0].offset() + pair[0].len() <= pair[1].offset());
    }
}

#[test]
fn balanced_concurrent_teardown_rewinds() {
    // Each thread deallocates only what it allocated, so the live count
    // can never underflow; the last deallocate to run rewinds the cursor.
    let arena = Arc::new(Arena::new(1 << 16).unwrap());

    let mut workers = Vec::new();
    for _ in 0..THREADS {
        let arena = Arc::clone(&arena);
        workers.push(thread::spawn(move || {
            for _ in 0..ALLOCS_PER_THREAD {
                arena.allocate(32, 8).unwrap();
                arena.deallocate().unwrap();
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(arena.live_count(), 0);
    assert_eq!(arena.used(), 0);
}

#[test]
fn writes_are_visible_across_threads() {
    // The view guards release the arena lock on drop, which orders the
    // write before any later read from another thread.
    let arena = Arc::new(Arena::new(256).unwrap());
    let handle = arena.allocate(64, 8).unwrap();

    {
        let mut view = arena.write(&handle).unwrap();
        view.fill(0x5A);
    }

    let reader = {
        let arena = Arc::clone(&arena);
        thread::spawn(move || {
            let view = arena.read(&handle).unwrap();
            view.iter().all(|&b| b == 0x5A)
        })
    };
    assert!(reader.join().unwrap());
}
