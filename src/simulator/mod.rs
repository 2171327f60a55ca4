//! Page replacement simulation.
//!
//! A simulation feeds a reference string through a bounded [`FrameSet`],
//! letting one eviction policy choose victims, and records the frame set
//! after every reference.
//!
//! # Components
//! - [`FrameSet`] - The bounded set of resident pages
//! - [`replacer`] - Eviction policy implementations
//! - [`simulate`] - Run one [`Policy`] over a reference string
//! - [`SimulationResult`] / [`History`] - What a run produces
//! - [`SimulationConfig`] - A run described as a plain value

mod config;
mod engine;
mod frame_set;
mod policy;
pub mod replacer;
mod result;

pub use config::SimulationConfig;
pub use engine::{simulate, simulate_fifo, simulate_lru, simulate_optimal, validate};
pub use frame_set::FrameSet;
pub use policy::Policy;
pub use result::{History, SimulationResult};
