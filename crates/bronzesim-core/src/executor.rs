//! Task execution: a single switch over the closed op set.
//!
//! Ops mutate the agent's inventory and fatigue, the shared resource
//! pool (gather), and nothing else. `move_to` and `roam` are abstracted
//! to fatigue bookkeeping; no spatial movement is simulated.

use bronzesim_agents::{Agent, Settlement, crafting, trade};
use bronzesim_dsl::{Op, Task};

use crate::pool::ResourcePool;

/// Fatigue added by a `move_to` op.
pub const MOVE_FATIGUE: f32 = 0.002;
/// Fatigue added per `roam` step.
pub const ROAM_FATIGUE_PER_STEP: f32 = 0.001;
/// Fatigue recovered by a `rest` op.
pub const REST_RECOVERY: f32 = 0.2;
/// Fatigue drift on a day with no task.
pub const IDLE_FATIGUE: f32 = 0.003;

/// Execute a task's ops in order against the agent, its settlement, and
/// the shared pool.
pub fn execute_task(task: &Task, agent: &mut Agent, settlement: &Settlement, pool: &mut ResourcePool) {
    for op in &task.ops {
        match *op {
            Op::MoveTo(_) => agent.add_fatigue(MOVE_FATIGUE),
            Op::Gather { resource, amount } => {
                let got = pool.take(resource, amount);
                if let Some(item) = resource.stockpile_item() {
                    agent.add_stock(item, got);
                }
            }
            Op::Craft { item, amount } => crafting::craft(agent, item, amount),
            Op::Trade => trade::trade(agent, settlement),
            Op::Rest => agent.relieve_fatigue(REST_RECOVERY),
            Op::Roam(steps) => {
                #[allow(clippy::cast_precision_loss)]
                agent.add_fatigue(ROAM_FATIGUE_PER_STEP * steps as f32);
            }
        }
    }
}
