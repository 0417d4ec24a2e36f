//! The simulator: world, population, and the day stepper.
//!
//! A single [`Simulator`] value owns everything -- the chunk cache, the
//! settlements, the resource pool, households, agents, and the vocation
//! table. Per day, in fixed order: the pool regenerates, each agent (in
//! id order) drifts, eats, rolls apprenticeship, passes the needs
//! gates, and picks and executes a task; afterwards the periodic
//! vocation rebalancing runs.
//!
//! Entities cross-reference by dense integer id. Household parents are
//! agent indices resolved through the agent vector, never owning
//! references.

use bronzesim_agents::{Agent, Household, NeedsGate, Settlement, trade, vitals};
use bronzesim_dsl::{SimConfig, VocationTable};
use bronzesim_types::{Item, Season, WORLD_CELLS_X, WORLD_CELLS_Y, hash_u32, rng_f01};
use bronzesim_world::{ChunkCache, RenewModel, Worldgen};
use tracing::debug;

use crate::executor::{IDLE_FATIGUE, execute_task};
use crate::pool::ResourcePool;
use crate::rules::pick_task;

/// Salt for settlement x positions.
const SALT_SETTLE_X: u32 = 0x5E77_A11A;
/// Salt for settlement y positions.
const SALT_SETTLE_Y: u32 = 0x5E77_B22B;
/// Salt for settlement valuation rolls.
const SALT_VALUATION: u32 = 0x0000_C0DE;
/// Salt for agent spawn x positions.
const SALT_SPAWN_X: u32 = 0xABCD_E123;
/// Salt for agent spawn y positions.
const SALT_SPAWN_Y: u32 = 0xCDEF_2345;
/// Salt for agent starting ages.
const SALT_AGE: u32 = 0x0000_0A9E;
/// Salt for initial vocation assignment.
const SALT_VOCATION: u32 = 0x0000_B00C;
/// Salt for the apprenticeship roll.
const SALT_APPRENTICE: u32 = 0x00A2_2E11;
/// Salt for the role-switching roll.
const SALT_ROLE_SWITCH: u32 = 0x005A_17C9;

/// Settlements keep this margin from the world edge, in cells.
const SETTLEMENT_MARGIN: u32 = 1000;
/// Agents spawn at least this far from the world edge, in cells.
const SPAWN_MARGIN: u32 = 100;
/// Agents per household (last household may be smaller).
const AGENTS_PER_HOUSEHOLD: u32 = 5;

/// Apprenticeship age window.
const APPRENTICE_AGES: std::ops::RangeInclusive<u32> = 10..=16;
/// Daily chance an eligible child adopts the household parent's vocation.
const APPRENTICE_PROB: f32 = 0.10;

/// Age from which agents participate in role switching.
const ADULT_AGE: u32 = 17;
/// Chance an eligible adult switches vocation on a rebalancing day.
const SWITCH_PROB: f32 = 0.05;
/// Per-capita grain below which farmers are recruited.
const TARGET_GRAIN_PER_CAPITA: f32 = 3.0;
/// Per-capita fish below which fishers are recruited.
const TARGET_FISH_PER_CAPITA: f32 = 2.0;
/// Per-capita tools below which smiths are recruited.
const TARGET_TOOL_PER_CAPITA: f32 = 0.6;
/// Per-capita pots below which potters are recruited.
const TARGET_POT_PER_CAPITA: f32 = 0.6;

/// The whole simulation state.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// World seed; every positional draw folds it in.
    pub seed: u32,
    /// Per-day renewal rates.
    pub renew: RenewModel,
    /// LRU cache of materialized chunks.
    pub cache: ChunkCache,
    /// Settlements with barter valuations.
    pub settlements: Vec<Settlement>,
    /// Aggregate resource pool the gather path draws on.
    pub pool: ResourcePool,
    /// Households binding agents to settlements.
    pub households: Vec<Household>,
    /// The population, in id order.
    pub agents: Vec<Agent>,
    /// Parsed behavior programs.
    pub vocations: VocationTable,
    /// Current day (0 before the first step).
    pub day: u32,
    /// Cadence of vocation rebalancing, in days.
    pub switch_every_days: u32,
}

impl Simulator {
    /// Build the initial world and population from a parsed config.
    pub fn new(config: &SimConfig) -> Self {
        let seed = config.seed;
        let r#gen = Worldgen::new(seed);
        let renew = RenewModel::new(config.renew);

        let settlements = (0..config.settlement_count)
            .map(|i| init_settlement(seed, i))
            .collect();

        let agent_count = config.agent_count.max(1);
        let household_count = agent_count.div_ceil(AGENTS_PER_HOUSEHOLD);
        // Round-robin assignment; the settlement divisor is clamped to
        // at least 1.
        #[allow(clippy::arithmetic_side_effects)]
        let mut households: Vec<Household> = (0..household_count)
            .map(|h| Household {
                id: h as usize,
                settlement: (h % config.settlement_count.max(1)) as usize,
                parent: None,
            })
            .collect();

        let vocations = config.vocations.clone();
        let agents: Vec<Agent> = (0..agent_count)
            .map(|i| init_agent(seed, i, household_count, &vocations))
            .collect();

        // The household parent is its oldest member after agent init.
        for household in &mut households {
            let mut best_age = None;
            for (index, agent) in agents.iter().enumerate() {
                if agent.household == household.id && best_age.is_none_or(|(_, age)| agent.age > age)
                {
                    best_age = Some((index, agent.age));
                }
            }
            household.parent = best_age.map(|(index, _)| index);
        }

        let pool = ResourcePool::new(&renew, agent_count);
        let cache = ChunkCache::new(config.cache_max, r#gen);

        Self {
            seed,
            renew,
            cache,
            settlements,
            pool,
            households,
            agents,
            vocations,
            day: 0,
            switch_every_days: 30,
        }
    }

    /// The season of the current day.
    pub const fn season(&self) -> Season {
        Season::from_day(self.day)
    }

    /// Number of living agents.
    pub fn alive_count(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let alive = self.agents.iter().filter(|a| a.is_alive()).count() as u32;
        alive
    }

    /// Advance one day. Returns the role-switching report line when the
    /// periodic rebalancing moved anyone.
    pub fn step_day(&mut self) -> Option<String> {
        self.day = self.day.saturating_add(1);
        let season = self.season();
        debug!(day = self.day, season = %season, "stepping day");

        self.pool.regenerate(&self.renew, season);

        for index in 0..self.agents.len() {
            self.step_agent(index);
        }

        self.role_switching()
    }

    fn step_agent(&mut self, index: usize) {
        let day = self.day;
        {
            let Some(agent) = self.agents.get_mut(index) else {
                return;
            };
            if !agent.is_alive() {
                return;
            }
            if day.checked_rem(Season::DAYS_PER_YEAR) == Some(0) {
                agent.age = agent.age.saturating_add(1);
            }
            vitals::drift_needs(agent);
            vitals::eat(agent);
        }

        self.apprentice_roll(index);

        let Some(agent) = self.agents.get_mut(index) else {
            return;
        };
        match vitals::pre_task_gate(agent) {
            NeedsGate::Starving | NeedsGate::Exhausted => return,
            NeedsGate::Ready => {}
        }

        let settlement = self.settlement_of(index);
        let vocation = self
            .agents
            .get(index)
            .and_then(|a| a.vocation)
            .and_then(|vid| self.vocations.get(vid));
        let task = match (vocation, self.agents.get(index)) {
            (Some(voc), Some(agent)) => pick_task(voc, agent, self.seed, day),
            _ => None,
        };

        let Some(agent) = self.agents.get_mut(index) else {
            return;
        };
        match task {
            Some(task) => execute_task(task, agent, &settlement, &mut self.pool),
            None => {
                agent.add_fatigue(IDLE_FATIGUE);
                if index % 9 == 0 {
                    trade::trade(agent, &settlement);
                }
            }
        }
    }

    /// Children aged 10 to 16 adopt the household parent's vocation with
    /// a small daily probability.
    fn apprentice_roll(&mut self, index: usize) {
        let Some(agent) = self.agents.get(index) else {
            return;
        };
        if !APPRENTICE_AGES.contains(&agent.age) {
            return;
        }
        let (x, y, household) = (agent.x, agent.y, agent.household);
        let Some(parent_index) = self.households.get(household).and_then(|h| h.parent) else {
            return;
        };
        let Some(parent_vocation) = self.agents.get(parent_index).map(|p| p.vocation) else {
            return;
        };
        let roll = rng_f01(self.seed, x, y, self.day ^ SALT_APPRENTICE);
        if roll < APPRENTICE_PROB
            && let Some(agent) = self.agents.get_mut(index)
        {
            agent.vocation = parent_vocation;
        }
    }

    /// The settlement the agent trades through (via its household).
    fn settlement_of(&self, index: usize) -> Settlement {
        self.agents
            .get(index)
            .and_then(|a| self.households.get(a.household))
            .and_then(|h| self.settlements.get(h.settlement))
            .copied()
            .unwrap_or_default()
    }

    /// Periodic vocation rebalancing toward whichever staple is scarce.
    ///
    /// Never moves a household's parent agent, only touches adults, and
    /// stops after nudging `alive / 50 + 1` agents. Returns the one-line
    /// report when anyone moved.
    fn role_switching(&mut self) -> Option<String> {
        // checked_rem is None when the cadence is zero, which disables
        // rebalancing entirely.
        if self.day.checked_rem(self.switch_every_days) != Some(0) {
            return None;
        }

        let mut totals = [0_u64; Item::COUNT];
        let mut alive = 0_u64;
        for agent in &self.agents {
            if !agent.is_alive() {
                continue;
            }
            alive = alive.saturating_add(1);
            for item in Item::ALL {
                if let Some(slot) = totals.get_mut(item.index()) {
                    *slot = slot.saturating_add(u64::from(agent.stock(item)));
                }
            }
        }
        if alive == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let per_capita = |item: Item| -> f32 {
            totals.get(item.index()).copied().unwrap_or(0) as f32 / alive as f32
        };
        let pc_grain = per_capita(Item::Grain);
        let pc_fish = per_capita(Item::Fish);
        let pc_tool = per_capita(Item::Tool);
        let pc_pot = per_capita(Item::Pot);

        let farmer = self.vocations.find("farmer");
        let fisher = self.vocations.find("fisher");
        let smith = self.vocations.find("smith");
        let potter = self.vocations.find("potter");

        let mut target = None;
        if farmer.is_some() && pc_grain < TARGET_GRAIN_PER_CAPITA {
            target = farmer;
        }
        if fisher.is_some()
            && pc_fish < TARGET_FISH_PER_CAPITA
            && (target.is_none() || pc_fish < pc_grain)
        {
            target = fisher;
        }
        if smith.is_some() && pc_tool < TARGET_TOOL_PER_CAPITA {
            target = smith;
        }
        if potter.is_some() && pc_pot < TARGET_POT_PER_CAPITA {
            target = potter;
        }
        let target = target?;

        let limit = (alive / 50).saturating_add(1);
        let mut switched = 0_u64;
        for index in 0..self.agents.len() {
            let Some(agent) = self.agents.get(index) else {
                continue;
            };
            if !agent.is_alive() || agent.age < ADULT_AGE || agent.vocation == Some(target) {
                continue;
            }
            let is_parent = self
                .households
                .get(agent.household)
                .is_some_and(|h| h.parent == Some(index));
            if is_parent {
                continue;
            }
            let roll = rng_f01(self.seed, agent.x, agent.y, self.day ^ SALT_ROLE_SWITCH);
            if roll < SWITCH_PROB {
                if let Some(agent) = self.agents.get_mut(index) {
                    agent.vocation = Some(target);
                }
                switched = switched.saturating_add(1);
                if switched >= limit {
                    break;
                }
            }
        }

        if switched > 0 {
            let name = self
                .vocations
                .get(target)
                .map_or("?", |v| v.name.as_str());
            Some(format!(
                "Day {}: role switching nudged {switched} adults into vocation '{name}'",
                self.day
            ))
        } else {
            None
        }
    }
}

/// Derive one settlement's position and valuations from the seed.
///
/// The margin spans and the 0..100 valuation roll are all far below the
/// u32 range, so the derivation arithmetic cannot overflow.
#[allow(clippy::arithmetic_side_effects)]
fn init_settlement(seed: u32, i: u32) -> Settlement {
    let x = hash_u32(i, seed, SALT_SETTLE_X) % (WORLD_CELLS_X - 2 * SETTLEMENT_MARGIN)
        + SETTLEMENT_MARGIN;
    let y = hash_u32(i, seed, SALT_SETTLE_Y) % (WORLD_CELLS_Y - 2 * SETTLEMENT_MARGIN)
        + SETTLEMENT_MARGIN;

    #[allow(clippy::cast_precision_loss)]
    let r = (hash_u32(i, seed, SALT_VALUATION) % 100) as f32 / 100.0;
    let mut settlement = Settlement {
        x,
        y,
        valuations: [1.0; Item::COUNT],
    };
    let tuned = [
        (Item::Fish, 1.0 + 0.5 * r),
        (Item::Grain, 1.0 + 0.5 * (1.0 - r)),
        (Item::Pot, 1.0 + 0.4 * r),
        (Item::Tool, 1.2 + 0.6 * r),
        (Item::Bronze, 1.3 + 0.7 * r),
    ];
    for (item, value) in tuned {
        if let Some(slot) = settlement.valuations.get_mut(item.index()) {
            *slot = value;
        }
    }
    settlement
}

/// Derive one agent's spawn state from the seed.
///
/// Spawn spans, the 8..43 age window, and the 0..100 vocation roll stay
/// far below the u32 range; the household divisor is clamped to at
/// least 1.
#[allow(clippy::arithmetic_side_effects)]
fn init_agent(seed: u32, i: u32, household_count: u32, vocations: &VocationTable) -> Agent {
    let x = hash_u32(i, seed, SALT_SPAWN_X) % (WORLD_CELLS_X - 2 * SPAWN_MARGIN) + SPAWN_MARGIN;
    let y = hash_u32(i, seed, SALT_SPAWN_Y) % (WORLD_CELLS_Y - 2 * SPAWN_MARGIN) + SPAWN_MARGIN;
    let age = 8 + hash_u32(i, seed, SALT_AGE) % 35;

    let farmer = vocations.find("farmer");
    let fisher = vocations.find("fisher");
    let potter = vocations.find("potter");
    let smith = vocations.find("smith");
    let trader = vocations.find("trader");
    let default_vocation = if vocations.is_empty() { None } else { Some(0) };

    let rr = hash_u32(i, seed, SALT_VOCATION) % 100;
    let mut vocation = default_vocation;
    if rr < 45 && farmer.is_some() {
        vocation = farmer;
    } else if rr < 70 && fisher.is_some() {
        vocation = fisher;
    } else if rr < 85 && potter.is_some() {
        vocation = potter;
    } else if rr < 95 && smith.is_some() {
        vocation = smith;
    } else if trader.is_some() {
        vocation = trader;
    }

    Agent {
        x,
        y,
        vocation,
        age,
        household: (i % household_count.max(1)) as usize,
        hunger: 0.10,
        fatigue: 0.10,
        health: 1.0,
        ..Agent::default()
    }
}
