//! Multi-policy comparison.

use std::collections::BTreeMap;
use std::fmt;
use std::{panic, thread};

use crate::common::{Error, PageId, Result};
use crate::simulator::{self, Policy, SimulationResult};

/// Results of several policies run on the same input, keyed by policy.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    capacity: usize,
    reference_len: usize,
    results: BTreeMap<Policy, SimulationResult>,
}

impl ComparisonReport {
    /// Frame capacity every policy ran with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the shared reference string.
    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    pub fn get(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results.get(&policy)
    }

    /// Results in canonical policy order.
    pub fn iter(&self) -> impl Iterator<Item = (Policy, &SimulationResult)> + '_ {
        self.results.iter().map(|(&policy, result)| (policy, result))
    }

    pub fn policies(&self) -> impl Iterator<Item = Policy> + '_ {
        self.results.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Policy with the fewest faults; ties go to the earlier policy.
    pub fn best(&self) -> Option<Policy> {
        self.iter()
            .min_by_key(|(_, result)| result.faults)
            .map(|(policy, _)| policy)
    }

    /// `(policy, faults)` from fewest to most faults.
    pub fn ranking(&self) -> Vec<(Policy, u64)> {
        let mut ranking: Vec<(Policy, u64)> = self
            .iter()
            .map(|(policy, result)| (policy, result.faults))
            .collect();
        ranking.sort_by_key(|&(_, faults)| faults);
        ranking
    }

    pub fn into_results(self) -> BTreeMap<Policy, SimulationResult> {
        self.results
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Page replacement comparison ({} references, {} frames)",
            self.reference_len, self.capacity
        )?;
        writeln!(
            f,
            "{:<10} {:>8} {:>8} {:>10} {:>14}",
            "Policy", "Faults", "Hits", "Hit rate", "Time (sec)"
        )?;
        for (policy, result) in self.iter() {
            writeln!(
                f,
                "{:<10} {:>8} {:>8} {:>9.2}% {:>14.6}",
                policy.name(),
                result.faults,
                result.hits(),
                result.hit_rate() * 100.0,
                result.elapsed.as_secs_f64()
            )?;
        }
        if let Some(best) = self.best() {
            write!(f, "Fewest faults: {}", best)?;
        }
        Ok(())
    }
}

/// Run FIFO, LRU and optimal on the same input.
///
/// # Errors
/// Returns the first validation failure; no partial report is produced.
///
/// # Example
/// ```
/// use pagesim::{compare, PageId, Policy};
///
/// let reference = PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
/// let report = compare(&reference, 3).unwrap();
/// assert_eq!(report.get(Policy::Optimal).unwrap().faults, 7);
/// assert_eq!(report.best(), Some(Policy::Optimal));
/// ```
pub fn compare(reference: &[PageId], capacity: usize) -> Result<ComparisonReport> {
    compare_policies(reference, capacity, &Policy::ALL)
}

/// Run the given policies on the same input.
///
/// Each policy runs on its own scoped thread with its own frame set; the
/// call returns once all of them have finished. Duplicate policies are
/// run once.
///
/// # Errors
/// - `Error::InvalidInput` if `policies` is empty or the input is invalid
/// - otherwise the failure of the first failing policy in canonical order
#[tracing::instrument(skip(reference), fields(references = reference.len()))]
pub fn compare_policies(
    reference: &[PageId],
    capacity: usize,
    policies: &[Policy],
) -> Result<ComparisonReport> {
    if policies.is_empty() {
        return Err(Error::invalid_input("no policies selected for comparison"));
    }
    simulator::validate(capacity)?;

    let mut selected = policies.to_vec();
    selected.sort();
    selected.dedup();

    // Handles are joined in `selected` order, which is canonical order
    let outcomes: Vec<(Policy, Result<SimulationResult>)> = thread::scope(|s| {
        let handles: Vec<_> = selected
            .iter()
            .map(|&policy| {
                let handle = s.spawn(move || simulator::simulate(policy, reference, capacity));
                (policy, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(policy, handle)| match handle.join() {
                Ok(outcome) => (policy, outcome),
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut results = BTreeMap::new();
    for (policy, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                results.insert(policy, result);
            }
            Err(e) => {
                tracing::warn!(%policy, error = %e, "comparison aborted");
                return Err(e);
            }
        }
    }

    let report = ComparisonReport {
        capacity,
        reference_len: reference.len(),
        results,
    };
    tracing::debug!(best = ?report.best(), "comparison finished");
    Ok(report)
}
