//! The Bronzesim simulation engine.
//!
//! This crate owns the day cycle that drives the simulation: pool
//! regeneration, needs drift and eating, the apprenticeship roll, the
//! starvation/exhaustion gates, DSL rule selection, task execution, and
//! periodic vocation rebalancing. A single [`Simulator`] value holds all
//! state; there are no globals and no ambient randomness.
//!
//! # Modules
//!
//! - [`pool`] -- The aggregate per-resource pool the gather path draws on.
//! - [`rules`] -- Condition evaluation and the weighted task draw.
//! - [`executor`] -- Single-switch dispatch over the closed op set.
//! - [`sim`] -- [`Simulator`] construction and the day stepper.
//! - [`report`] -- Report lines and JSON snapshots.

pub mod executor;
pub mod pool;
pub mod report;
pub mod rules;
pub mod sim;

// Re-export the primary surface at crate root.
pub use executor::execute_task;
pub use pool::ResourcePool;
pub use report::{Snapshot, report};
pub use rules::{condition_holds, pick_task};
pub use sim::Simulator;
