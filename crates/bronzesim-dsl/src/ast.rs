//! Parsed program types for the `.bronze` DSL.
//!
//! Conditions are a fixed-shape record: optional hunger/fatigue/season/
//! probability gates plus a bounded list of inventory clauses. Task ops
//! are a closed tagged variant dispatched in a single match by the
//! executor.

use bronzesim_types::{Cmp, Item, Resource, Season, TerrainTags};

/// Maximum `inv` clauses one condition may carry.
pub const MAX_INV_CLAUSES: usize = 4;

/// One `inv ITEM CMP N` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvClause {
    /// The inventory item inspected.
    pub item: Item,
    /// The comparison applied.
    pub cmp: Cmp,
    /// The right-hand value.
    pub value: i32,
}

/// A rule condition: every present gate must hold for the rule to fire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    /// `hunger > x` gate.
    pub hunger_above: Option<f32>,
    /// `fatigue < x` gate.
    pub fatigue_below: Option<f32>,
    /// `season == name` gate; `None` matches any season.
    pub season: Option<Season>,
    /// Bounded inventory clauses (at most [`MAX_INV_CLAUSES`]).
    pub inventory: Vec<InvClause>,
    /// `prob p` gate against the shared per-agent-day roll.
    pub prob: Option<f32>,
}

/// One task op. The op set is closed; execution is a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Drift toward terrain carrying the tag (fatigue bookkeeping only).
    MoveTo(TerrainTags),
    /// Draw up to `amount` units of a resource from the pool.
    Gather {
        /// The resource drawn.
        resource: Resource,
        /// Units requested.
        amount: u32,
    },
    /// Attempt `amount` crafts of an item.
    Craft {
        /// The item crafted.
        item: Item,
        /// Units attempted.
        amount: u32,
    },
    /// Barter with the household's settlement.
    Trade,
    /// Recover fatigue.
    Rest,
    /// Wander `steps` cells' worth of effort.
    Roam(u32),
}

/// A named ordered sequence of ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name, referenced by rules.
    pub name: String,
    /// Ops executed in order.
    pub ops: Vec<Op>,
}

/// A weighted rule: `when COND do TASK weight W [prob P]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Rule name (diagnostic only).
    pub name: String,
    /// The firing condition.
    pub condition: Condition,
    /// Name of the task this rule selects.
    pub task_name: String,
    /// Draw weight; rules with weight <= 0 are never eligible.
    pub weight: i32,
}

/// A named behavior program: tasks plus weighted rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocation {
    /// Vocation name (`farmer`, `fisher`, ...).
    pub name: String,
    /// The vocation's tasks.
    pub tasks: Vec<Task>,
    /// The vocation's rules.
    pub rules: Vec<Rule>,
}

impl Vocation {
    /// Look up a task by name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }
}

/// The ordered vocation list; agents hold indices into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocationTable {
    /// Vocations in declaration order.
    pub vocations: Vec<Vocation>,
}

impl VocationTable {
    /// Index of a vocation by name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.vocations.iter().position(|v| v.name == name)
    }

    /// Vocation by index.
    pub fn get(&self, id: usize) -> Option<&Vocation> {
        self.vocations.get(id)
    }

    /// True when no vocation was declared.
    pub fn is_empty(&self) -> bool {
        self.vocations.is_empty()
    }
}

/// Everything a `.bronze` program configures, with the stock defaults
/// for anything the program leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// World seed.
    pub seed: u32,
    /// Days to simulate.
    pub days: i32,
    /// Agent population (minimum 1).
    pub agent_count: u32,
    /// Settlement count (minimum 1).
    pub settlement_count: u32,
    /// Chunk-cache capacity (minimum 16).
    pub cache_max: usize,
    /// Snapshot cadence in days; 0 disables snapshots.
    pub snapshot_every_days: i32,
    /// ASCII-map cadence in days; 0 disables maps.
    pub map_every_days: i32,
    /// Per-day renewal fraction per resource, in ordinal order.
    pub renew: [f32; Resource::COUNT],
    /// Parsed behavior programs.
    pub vocations: VocationTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        let mut renew = [0.0; Resource::COUNT];
        let defaults = [
            (Resource::Fish, 0.08),
            (Resource::Grain, 0.06),
            (Resource::Wood, 0.03),
            (Resource::Clay, 0.02),
            (Resource::Copper, 0.005),
            (Resource::Tin, 0.002),
            (Resource::Fire, 0.10),
            (Resource::PlantFiber, 0.04),
            (Resource::Cattle, 0.010),
            (Resource::Sheep, 0.010),
            (Resource::Pig, 0.010),
            (Resource::Charcoal, 0.005),
            (Resource::Religion, 0.002),
            (Resource::Tribalism, 0.0005),
        ];
        for (resource, rate) in defaults {
            if let Some(slot) = renew.get_mut(resource.index()) {
                *slot = rate;
            }
        }
        Self {
            seed: 1337,
            days: 120,
            agent_count: 220,
            settlement_count: 6,
            cache_max: 2048,
            snapshot_every_days: 30,
            map_every_days: 0,
            renew,
            vocations: VocationTable::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_economy() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.seed, 1337);
        assert_eq!(cfg.days, 120);
        assert_eq!(cfg.agent_count, 220);
        assert_eq!(cfg.settlement_count, 6);
        assert_eq!(cfg.cache_max, 2048);
        assert_eq!(cfg.snapshot_every_days, 30);
        assert_eq!(cfg.map_every_days, 0);
        assert!((cfg.renew[Resource::Fish.index()] - 0.08).abs() < f32::EPSILON);
        assert!((cfg.renew[Resource::Tribalism.index()] - 0.0005).abs() < f32::EPSILON);
        assert!(cfg.vocations.is_empty());
    }

    #[test]
    fn vocation_table_lookup() {
        let table = VocationTable {
            vocations: vec![
                Vocation {
                    name: "farmer".to_owned(),
                    ..Vocation::default()
                },
                Vocation {
                    name: "smith".to_owned(),
                    ..Vocation::default()
                },
            ],
        };
        assert_eq!(table.find("farmer"), Some(0));
        assert_eq!(table.find("smith"), Some(1));
        assert_eq!(table.find("potter"), None);
        assert!(table.get(1).is_some());
        assert!(table.get(2).is_none());
    }

    #[test]
    fn task_lookup_by_name() {
        let voc = Vocation {
            name: "farmer".to_owned(),
            tasks: vec![Task {
                name: "harvest".to_owned(),
                ops: vec![Op::Gather {
                    resource: Resource::Grain,
                    amount: 4,
                }],
            }],
            rules: Vec::new(),
        };
        assert!(voc.task("harvest").is_some());
        assert!(voc.task("sow").is_none());
    }
}
