//! Seeded random stress workload.
//!
//! Drives a shared arena with a deterministic ChaCha8-seeded mix of
//! allocations and deallocations across threads. Sizes and alignments
//! vary per operation; out-of-memory is an expected outcome, any other
//! error fails the test. After every thread balances its own
//! allocations, the arena must be fully rewound.

use std::sync::Arc;
use std::thread;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use talus_arena::{Arena, ArenaError};

const THREADS: u64 = 4;
const OPS_PER_THREAD: usize = 2_000;
const CAPACITY: usize = 1 << 16;

#[test]
fn randomized_mixed_workload_holds_invariants() {
    let arena = Arc::new(Arena::new(CAPACITY).unwrap());

    let mut workers = Vec::new();
    for t in 0..THREADS {
        let arena = Arc::clone(&arena);
        workers.push(thread::spawn(move || {
            let mut rng = ChaCha8Rng::seed_from_u64(0x5EED ^ t);
            let mut outstanding = 0usize;
            for _ in 0..OPS_PER_THREAD {
                if outstanding > 0 && rng.random_bool(0.5) {
                    arena.deallocate().unwrap();
                    outstanding -= 1;
                } else {
                    let size = rng.random_range(1..256);
                    let align = 1usize << rng.random_range(0..6);
                    match arena.allocate(size, align) {
                        Ok(handle) => {
                            assert_eq!(handle.offset() % align, 0);
                            assert!(handle.offset() + handle.len() <= CAPACITY);
                            outstanding += 1;
                        }
                        Err(ArenaError::OutOfMemory { .. }) => {}
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
            }
            for _ in 0..outstanding {
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
