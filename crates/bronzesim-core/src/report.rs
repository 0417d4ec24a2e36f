//! Periodic report lines and JSON snapshots.
//!
//! The textual report aggregates living agents' inventories and
//! vocation counts into two lines. The snapshot is the same aggregation
//! as a serializable value; vocation counts keep vocation-table order
//! in the emitted JSON.
//!
//! The report line prints `cache_chunks=0` unconditionally and elides
//! grain between `fish` and `wood`, matching the long-standing output
//! format downstream tooling parses.

use std::fmt::Write as _;

use bronzesim_types::Item;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::sim::Simulator;

/// Aggregate totals over living agents.
struct Totals {
    alive: u32,
    inventory: [u64; Item::COUNT],
    vocations: Vec<(String, u64)>,
}

fn totals(sim: &Simulator) -> Totals {
    let mut inventory = [0_u64; Item::COUNT];
    let mut counts = vec![0_u64; sim.vocations.vocations.len()];
    let mut alive = 0_u32;
    for agent in &sim.agents {
        if !agent.is_alive() {
            continue;
        }
        alive = alive.saturating_add(1);
        for item in Item::ALL {
            if let Some(slot) = inventory.get_mut(item.index()) {
                *slot = slot.saturating_add(u64::from(agent.stock(item)));
            }
        }
        if let Some(slot) = agent.vocation.and_then(|vid| counts.get_mut(vid)) {
            *slot = slot.saturating_add(1);
        }
    }
    let vocations = sim
        .vocations
        .vocations
        .iter()
        .zip(counts)
        .map(|(vocation, count)| (vocation.name.clone(), count))
        .collect();
    Totals {
        alive,
        inventory,
        vocations,
    }
}

/// Render the two-line periodic report, newline-terminated.
pub fn report(sim: &Simulator) -> String {
    let t = totals(sim);
    let stock = |item: Item| t.inventory.get(item.index()).copied().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Day {} season={} alive={} cache_chunks=0 | fish={}...wood={} clay={} cu={} tin={} bronze={} tool={} pot={}",
        sim.day,
        sim.season().name(),
        t.alive,
        stock(Item::Fish),
        stock(Item::Wood),
        stock(Item::Clay),
        stock(Item::Copper),
        stock(Item::Tin),
        stock(Item::Bronze),
        stock(Item::Tool),
        stock(Item::Pot),
    );
    let _ = write!(out, "  vocations:");
    for (name, count) in &t.vocations {
        let _ = write!(out, " {name}={count}");
    }
    out.push('\n');
    out
}

/// Aggregate inventory totals, serialized in item order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryTotals {
    /// Total fish held.
    pub fish: u64,
    /// Total grain held.
    pub grain: u64,
    /// Total wood held.
    pub wood: u64,
    /// Total clay held.
    pub clay: u64,
    /// Total copper held.
    pub copper: u64,
    /// Total tin held.
    pub tin: u64,
    /// Total bronze held.
    pub bronze: u64,
    /// Total tools held.
    pub tool: u64,
    /// Total pots held.
    pub pot: u64,
}

/// Vocation head counts, serialized as a map in vocation-table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocationCounts(
    /// Pairs of vocation name and living head count, in table order.
    pub Vec<(String, u64)>,
);

impl Serialize for VocationCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// One day's aggregate state, as written to `snapshot_dayDDDDD.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The day the snapshot was taken.
    pub day: u32,
    /// Season name of that day.
    pub season: &'static str,
    /// Living agent count.
    pub alive: u32,
    /// Aggregate inventory of living agents.
    pub inventory: InventoryTotals,
    /// Vocation head counts in table order.
    pub vocations: VocationCounts,
}

impl Snapshot {
    /// Collect the current aggregate state of the simulation.
    pub fn collect(sim: &Simulator) -> Self {
        let t = totals(sim);
        let stock = |item: Item| t.inventory.get(item.index()).copied().unwrap_or(0);
        Self {
            day: sim.day,
            season: sim.season().name(),
            alive: t.alive,
            inventory: InventoryTotals {
                fish: stock(Item::Fish),
                grain: stock(Item::Grain),
                wood: stock(Item::Wood),
                clay: stock(Item::Clay),
                copper: stock(Item::Copper),
                tin: stock(Item::Tin),
                bronze: stock(Item::Bronze),
                tool: stock(Item::Tool),
                pot: stock(Item::Pot),
            },
            vocations: VocationCounts(t.vocations),
        }
    }
}
