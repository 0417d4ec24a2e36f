//! Agent, household, and settlement state for the Bronzesim simulation.
//!
//! Agents hold position, age, needs in `[0, 1]`, and an integer
//! inventory; households bind agents to a settlement and name a parent;
//! settlements carry barter valuations. Entities reference each other by
//! dense integer id only -- parent lookups resolve through the
//! simulator's agent vector, never through owning references.
//!
//! # Modules
//!
//! - [`agent`] -- The entity structs and inventory accessors.
//! - [`vitals`] -- Daily needs drift, eating, and the starvation /
//!   exhaustion gates.
//! - [`crafting`] -- The closed recipe table and per-unit crafting.
//! - [`trade`] -- Barter against settlement valuations.

pub mod agent;
pub mod crafting;
pub mod trade;
pub mod vitals;

// Re-export primary types at crate root.
pub use agent::{Agent, Household, Settlement};
pub use crafting::{Recipe, craft, recipe_for};
pub use trade::trade;
pub use vitals::{NeedsGate, drift_needs, eat, pre_task_gate};
