//! Explicit simulation configuration.

use serde::{Deserialize, Serialize};

use crate::common::{PageId, Result};
use crate::simulator::{engine, Policy, SimulationResult};

/// Everything one simulation run needs, as a plain value.
///
/// Front ends build one of these from user input and hand it over; they
/// hold no simulation state themselves.
///
/// # Example
/// ```
/// use pagesim::{PageId, Policy, SimulationConfig};
///
/// let config = SimulationConfig::new(PageId::sequence([1, 2, 1]), 2, Policy::Lru);
/// let result = config.run().unwrap();
/// assert_eq!(result.faults, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Pages in reference order.
    pub reference: Vec<PageId>,

    /// Number of frames.
    pub capacity: usize,

    /// Policy to simulate.
    pub policy: Policy,
}

impl SimulationConfig {
    pub fn new(reference: Vec<PageId>, capacity: usize, policy: Policy) -> Self {
        Self {
            reference,
            capacity,
            policy,
        }
    }

    /// Check the configuration without running it.
    pub fn validate(&self) -> Result<()> {
        engine::validate(self.capacity)
    }

    /// Run the configured policy.
    pub fn run(&self) -> Result<SimulationResult> {
        engine::simulate(self.policy, &self.reference, self.capacity)
    }

    /// Same reference string and capacity, different policy.
    pub fn with_policy(&self, policy: Policy) -> Self {
        Self {
            policy,
            ..self.clone()
        }
    }
}
