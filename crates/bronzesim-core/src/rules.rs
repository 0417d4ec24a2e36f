//! Condition evaluation and the weighted task draw.
//!
//! Each agent-day draws one shared uniform roll (salted by household)
//! that every probability gate in that agent's rules sees, then a
//! separate positional draw walks the cumulative weights of the
//! eligible rules. Both consume only `(seed, x, y, day xor salt)`
//! inputs, so selection is independent of agent iteration order.

use bronzesim_agents::Agent;
use bronzesim_dsl::{Condition, Task, Vocation};
use bronzesim_types::{Season, rng_f01, rng_u32};

/// Salt for the weighted pick draw.
const PICK_SALT: u32 = 0x00C0_FFEE;
/// Multiplier folding the household id into the shared roll salt.
const HOUSEHOLD_STRIDE: u32 = 131;

/// Evaluate a condition for an agent on a day, with the shared roll.
///
/// Every present gate must hold: hunger strictly above, fatigue
/// strictly below, season equal, every inventory clause, and the roll
/// strictly under the probability.
pub fn condition_holds(condition: &Condition, agent: &Agent, day: u32, roll: f32) -> bool {
    if let Some(threshold) = condition.hunger_above
        && agent.hunger <= threshold
    {
        return false;
    }
    if let Some(threshold) = condition.fatigue_below
        && agent.fatigue >= threshold
    {
        return false;
    }
    if let Some(season) = condition.season
        && Season::from_day(day) != season
    {
        return false;
    }
    for clause in &condition.inventory {
        if !clause.cmp.holds(i64::from(agent.stock(clause.item)), i64::from(clause.value)) {
            return false;
        }
    }
    if let Some(prob) = condition.prob
        && roll >= prob
    {
        return false;
    }
    true
}

/// The shared per-agent-day roll every probability gate sees.
pub fn shared_roll(seed: u32, agent: &Agent, day: u32) -> f32 {
    #[allow(clippy::cast_possible_truncation)]
    let household = agent.household as u32;
    rng_f01(seed, agent.x, agent.y, day ^ household.wrapping_mul(HOUSEHOLD_STRIDE))
}

/// Draw a task for the agent from its vocation's eligible rules.
///
/// Rules with non-positive weight are never eligible. The pick value is
/// drawn in `[0, total_weight)` and walked down the eligible rules'
/// weights; the rule that drives it negative selects the task. Returns
/// `None` when no rule is eligible or the selected rule names a task
/// the vocation does not define.
pub fn pick_task<'v>(
    vocation: &'v Vocation,
    agent: &Agent,
    seed: u32,
    day: u32,
) -> Option<&'v Task> {
    let roll = shared_roll(seed, agent, day);

    let mut total = 0_i64;
    let mut eligible = Vec::new();
    for rule in &vocation.rules {
        if rule.weight > 0 && condition_holds(&rule.condition, agent, day, roll) {
            total = total.saturating_add(i64::from(rule.weight));
            eligible.push(rule);
        }
    }
    if total <= 0 {
        return None;
    }

    // total > 0 was just checked, so the remainder never fails.
    let draw = i64::from(rng_u32(seed, agent.x, agent.y, day ^ PICK_SALT));
    let mut pick = draw.checked_rem(total).unwrap_or(0);
    for rule in eligible {
        pick = pick.saturating_sub(i64::from(rule.weight));
        if pick < 0 {
            return vocation.task(&rule.task_name);
        }
    }
    None
}
