//! Simulation output: frame history and fault statistics.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::PageId;
use crate::simulator::Policy;

/// Frame set snapshots, one per processed reference.
///
/// `history.get(i)` is the frame set right after reference `i` was
/// handled. Each snapshot is an owned copy; nothing in a `History` aliases
/// simulator state.
///
/// This is everything a renderer needs to plot occupancy over time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Vec<PageId>>);

impl History {
    pub(crate) fn with_capacity(steps: usize) -> Self {
        History(Vec::with_capacity(steps))
    }

    pub(crate) fn push(&mut self, snapshot: Vec<PageId>) {
        self.0.push(snapshot);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Snapshot after step `step`.
    pub fn get(&self, step: usize) -> Option<&[PageId]> {
        self.0.get(step).map(Vec::as_slice)
    }

    /// Iterate snapshots in step order.
    pub fn iter(&self) -> impl Iterator<Item = &[PageId]> + '_ {
        self.0.iter().map(Vec::as_slice)
    }

    /// Largest number of resident pages seen at any step.
    pub fn max_occupancy(&self) -> usize {
        self.0.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Every page that was ever resident, ascending.
    pub fn distinct_pages(&self) -> Vec<PageId> {
        self.0
            .iter()
            .flatten()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn as_slice(&self) -> &[Vec<PageId>] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Vec<PageId>> {
        self.0
    }
}

/// Result of running one policy over one reference string.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: Policy,

    /// Frame capacity the run used.
    pub capacity: usize,

    /// Frame set after every reference.
    pub history: History,

    /// References that were not resident when processed.
    pub faults: u64,

    /// Faults that had to evict a resident page first.
    pub evictions: u64,

    /// Wall-clock duration of the run. Informational only.
    pub elapsed: Duration,
}

impl SimulationResult {
    /// Number of references processed.
    pub fn references(&self) -> u64 {
        self.history.len() as u64
    }

    /// References that were already resident.
    ///
    /// Saturates at zero for a hand-built result claiming more faults than
    /// recorded steps.
    pub fn hits(&self) -> u64 {
        self.references().saturating_sub(self.faults)
    }

    /// Hit rate (0.0 to 1.0). Zero for an empty reference string.
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }

    /// Fault rate (0.0 to 1.0). Zero for an empty reference string.
    pub fn fault_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }

    /// Compare everything except elapsed time.
    pub fn same_outcome(&self, other: &SimulationResult) -> bool {
        self.policy == other.policy
            && self.capacity == other.capacity
            && self.faults == other.faults
            && self.evictions == other.evictions
            && self.history == other.history
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Page Faults ({}): {}\nExecution Time: {:.6} sec",
            self.policy,
            self.faults,
            self.elapsed.as_secs_f64()
        )
    }
}
