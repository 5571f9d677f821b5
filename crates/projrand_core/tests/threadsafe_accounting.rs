//! Integration tests for concurrent use of a shared engine.
//!
//! With `T` threads each issuing `K` calls against one shared engine,
//! exactly `T * K` generation steps must happen, none skipped or repeated.

use projrand_core::{RandomEngine, SeedableEngine, ThreadsafeEngine, TwisterEngine};
use rayon::prelude::*;
use std::thread;

const THREADS: usize = 8;
const CALLS_PER_THREAD: usize = 2_000;

/// Engine wrapper that counts generation steps.
struct CountingEngine {
    inner: TwisterEngine,
    steps: usize,
}

impl RandomEngine for CountingEngine {
    fn next(&mut self) -> u64 {
        self.steps += 1;
        self.inner.next()
    }

    fn reseed(&mut self, seed: u64) {
        self.inner.reseed(seed)
    }
}

fn counting(seed: u64) -> ThreadsafeEngine<CountingEngine> {
    ThreadsafeEngine::new(CountingEngine {
        inner: TwisterEngine::from_seed(seed),
        steps: 0,
    })
}

fn sequential(seed: u64, count: usize) -> Vec<u64> {
    let mut engine = TwisterEngine::from_seed(seed);
    let mut values: Vec<u64> = (0..count).map(|_| engine.next()).collect();
    values.sort_unstable();
    values
}

#[test]
fn test_every_step_counted_once_with_scoped_threads() {
    let shared = counting(2024);

    let mut drawn: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| (0..CALLS_PER_THREAD).map(|_| shared.next()).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("worker thread panicked"))
            .collect()
    });

    let engine = shared.into_inner();
    assert_eq!(engine.steps, THREADS * CALLS_PER_THREAD);

    // Same multiset as a single-threaded run: nothing skipped or duplicated
    drawn.sort_unstable();
    assert_eq!(drawn, sequential(2024, THREADS * CALLS_PER_THREAD));
}

#[test]
fn test_every_step_counted_once_with_rayon() {
    let shared = counting(7);

    let mut drawn: Vec<u64> = (0..THREADS * CALLS_PER_THREAD)
        .into_par_iter()
        .map(|_| shared.next())
        .collect();

    assert_eq!(shared.into_inner().steps, THREADS * CALLS_PER_THREAD);

    drawn.sort_unstable();
    assert_eq!(drawn, sequential(7, THREADS * CALLS_PER_THREAD));
}

/// A bulk fill is never split by other callers: each block must be a
/// contiguous run of the single-threaded sequence.
#[test]
fn test_fill_blocks_are_not_interleaved() {
    const BLOCK: usize = 64;
    let shared: ThreadsafeEngine<TwisterEngine> = ThreadsafeEngine::from_seed(99);

    let blocks: Vec<Vec<u64>> = (0..THREADS * 16)
        .into_par_iter()
        .map(|_| {
            let mut block = vec![0u64; BLOCK];
            shared.fill(&mut block);
            block
        })
        .collect();

    let mut reference = TwisterEngine::from_seed(99);
    let mut stream = vec![0u64; THREADS * 16 * BLOCK];
    reference.fill(&mut stream);

    for block in &blocks {
        let start = stream
            .iter()
            .position(|&v| v == block[0])
            .expect("block head must come from the reference stream");
        assert_eq!(start % BLOCK, 0, "block did not start on a call boundary");
        assert_eq!(&stream[start..start + BLOCK], block.as_slice());
    }
}

#[test]
fn test_shared_reference_passed_to_generic_consumers() {
    fn draw_four<E: RandomEngine>(mut engine: E) -> [u64; 4] {
        let mut out = [0u64; 4];
        engine.fill(&mut out);
        out
    }

    let shared = counting(3);
    let results: Vec<[u64; 4]> = thread::scope(|s| {
        let a = s.spawn(|| draw_four(&shared));
        let b = s.spawn(|| draw_four(&shared));
        vec![
            a.join().expect("worker thread panicked"),
            b.join().expect("worker thread panicked"),
        ]
    });

    assert_eq!(results.len(), 2);
    assert_eq!(shared.into_inner().steps, 8);
}
