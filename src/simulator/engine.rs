//! The simulation driver shared by every policy.

use std::time::Instant;

use crate::common::config::MIN_FRAME_CAPACITY;
use crate::common::{Error, PageId, Result};
use crate::simulator::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};
use crate::simulator::{FrameSet, History, Policy, SimulationResult};

/// Check a frame capacity before simulating.
///
/// Every `u32` is a legal page id, so the reference string needs no check.
///
/// # Errors
/// Returns `Error::InvalidInput` if `capacity` is 0.
pub fn validate(capacity: usize) -> Result<()> {
    if capacity < MIN_FRAME_CAPACITY {
        return Err(Error::invalid_input(format!(
            "frame capacity must be at least {}, got {}",
            MIN_FRAME_CAPACITY, capacity
        )));
    }
    Ok(())
}

/// Run `policy` over `reference` with `capacity` frames.
///
/// # Errors
/// Returns `Error::InvalidInput` for invalid input (see [`validate`]). No
/// partial result is produced.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let reference = PageId::sequence([1, 2, 3, 4, 1, 2, 5]);
/// let result = simulate(Policy::Fifo, &reference, 3).unwrap();
/// assert_eq!(result.faults, 7);
/// assert_eq!(result.history.len(), 7);
/// ```
#[tracing::instrument(level = "debug", skip(reference), fields(references = reference.len()))]
pub fn simulate(policy: Policy, reference: &[PageId], capacity: usize) -> Result<SimulationResult> {
    match policy {
        Policy::Fifo => simulate_fifo(reference, capacity),
        Policy::Lru => simulate_lru(reference, capacity),
        Policy::Optimal => simulate_optimal(reference, capacity),
    }
}

/// First-in-first-out: evict the oldest-loaded page.
pub fn simulate_fifo(reference: &[PageId], capacity: usize) -> Result<SimulationResult> {
    validate(capacity)?;
    let start = Instant::now();
    run(Policy::Fifo, FifoReplacer::new(), reference, capacity, start)
}

/// Least recently used: evict the page touched longest ago.
pub fn simulate_lru(reference: &[PageId], capacity: usize) -> Result<SimulationResult> {
    validate(capacity)?;
    let start = Instant::now();
    run(Policy::Lru, LruReplacer::new(), reference, capacity, start)
}

/// Belady's optimal policy: evict the page used furthest in the future.
///
/// Plans over the whole reference string before simulating; the planning
/// pass is included in the elapsed time.
pub fn simulate_optimal(reference: &[PageId], capacity: usize) -> Result<SimulationResult> {
    validate(capacity)?;
    let start = Instant::now();
    let replacer = OptimalReplacer::new(reference);
    run(Policy::Optimal, replacer, reference, capacity, start)
}

fn run<R: Replacer>(
    policy: Policy,
    mut replacer: R,
    reference: &[PageId],
    capacity: usize,
    start: Instant,
) -> Result<SimulationResult> {
    let mut frames = FrameSet::new(capacity)?;
    let mut history = History::with_capacity(reference.len());
    let mut faults = 0u64;
    let mut evictions = 0u64;

    for (step, &page) in reference.iter().enumerate() {
        let hit = frames.contains(page);

        if !hit {
            faults += 1;

            if frames.is_full() {
                let victim = replacer
                    .evict(&frames)
                    .ok_or(Error::CapacityViolation { capacity })?;
                frames.evict(victim);
                evictions += 1;
            }

            frames.insert(page)?;
        }

        replacer.record_access(&mut frames, step, page, hit);
        history.push(frames.snapshot());
    }

    let elapsed = start.elapsed();
    tracing::debug!(
        %policy,
        capacity,
        references = reference.len(),
        faults,
        evictions,
        elapsed_us = elapsed.as_micros() as u64,
        "simulation finished"
    );

    Ok(SimulationResult {
        policy,
        capacity,
        history,
        faults,
        evictions,
        elapsed,
    })
}
