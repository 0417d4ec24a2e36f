//! Daily needs mechanics.
//!
//! Per day, in order: hunger rises and fatigue recovers, the agent eats
//! from its own stores, and then the starvation/exhaustion gates decide
//! whether the agent may work at all. The gates come before any task
//! selection -- a starving agent takes health damage and does nothing,
//! an exhausted agent rests in place.

use bronzesim_types::Item;

use crate::agent::Agent;

/// Hunger added per day.
pub const HUNGER_PER_DAY: f32 = 0.18;
/// Fatigue recovered overnight per day.
pub const FATIGUE_RECOVERY_PER_DAY: f32 = 0.08;
/// Hunger above which the agent eats if it can.
pub const EAT_THRESHOLD: f32 = 0.7;
/// Hunger relieved by one fish.
pub const FISH_RELIEF: f32 = 0.35;
/// Hunger relieved by one grain.
pub const GRAIN_RELIEF: f32 = 0.30;
/// Hunger above which starvation damage applies.
pub const STARVATION_THRESHOLD: f32 = 0.95;
/// Health lost per starving day.
pub const STARVATION_DAMAGE: f32 = 0.01;
/// Fatigue at which the agent is forced to rest.
pub const EXHAUSTION_THRESHOLD: f32 = 0.90;
/// Fatigue recovered by a forced rest day.
pub const EXHAUSTION_RECOVERY: f32 = 0.20;

/// Outcome of the pre-task needs gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedsGate {
    /// Hunger exceeded the starvation threshold; health was damaged and
    /// the agent does nothing today.
    Starving,
    /// Fatigue forced a rest day; fatigue was partly recovered.
    Exhausted,
    /// The agent may pick and execute a task.
    Ready,
}

/// Apply the daily needs drift: hunger up (cap 1), fatigue down (floor 0).
pub fn drift_needs(agent: &mut Agent) {
    agent.hunger = (agent.hunger + HUNGER_PER_DAY).min(1.0);
    agent.relieve_fatigue(FATIGUE_RECOVERY_PER_DAY);
}

/// Eat from the agent's own stores when hungry.
///
/// One fish is eaten whenever hunger is above the threshold; one grain
/// follows only if hunger is still above it afterwards. Hunger floors
/// at 0.
pub fn eat(agent: &mut Agent) {
    if agent.hunger <= EAT_THRESHOLD {
        return;
    }
    if agent.take_stock(Item::Fish, 1) {
        agent.hunger -= FISH_RELIEF;
    }
    if agent.hunger > EAT_THRESHOLD && agent.take_stock(Item::Grain, 1) {
        agent.hunger -= GRAIN_RELIEF;
    }
    if agent.hunger < 0.0 {
        agent.hunger = 0.0;
    }
}

/// Run the starvation and exhaustion gates, applying their side effects.
pub fn pre_task_gate(agent: &mut Agent) -> NeedsGate {
    if agent.hunger > STARVATION_THRESHOLD {
        agent.health = (agent.health - STARVATION_DAMAGE).max(0.0);
        return NeedsGate::Starving;
    }
    if agent.fatigue >= EXHAUSTION_THRESHOLD {
        agent.relieve_fatigue(EXHAUSTION_RECOVERY);
        return NeedsGate::Exhausted;
    }
    NeedsGate::Ready
}
