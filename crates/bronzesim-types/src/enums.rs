//! Enumeration types for the Bronzesim simulation.
//!
//! Terrain tags are a per-cell bitfield; resources and inventory items
//! are dense enumerations whose ordinals index the per-cell density
//! planes and agent inventories. Name parsing lives next to each type so
//! the DSL front-end has a single place to resolve symbolic names.

use std::fmt;

// ---------------------------------------------------------------------------
// Terrain tags
// ---------------------------------------------------------------------------

/// Per-cell terrain feature bitfield. Any subset of tags may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TerrainTags(u8);

impl TerrainTags {
    /// Within two cells of the world edge.
    pub const COAST: Self = Self(1);
    /// Sandy strip just inside the coast.
    pub const BEACH: Self = Self(1 << 1);
    /// Woodland.
    pub const FOREST: Self = Self(1 << 2);
    /// Wetland; yields clay and plant fiber.
    pub const MARSH: Self = Self(1 << 3);
    /// High ground; the only source of copper and tin.
    pub const HILL: Self = Self(1 << 4);
    /// Coarse river band.
    pub const RIVER: Self = Self(1 << 5);
    /// Cultivated land around a settlement cluster.
    pub const FIELD: Self = Self(1 << 6);
    /// Settlement core.
    pub const SETTLE: Self = Self(1 << 7);

    /// The empty tag set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when no tag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every tag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when at least one tag in `other` is set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Set every tag in `other`.
    pub const fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Resolve a DSL tag name. `settlement` is an alias for `settle`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "coast" => Some(Self::COAST),
            "beach" => Some(Self::BEACH),
            "forest" => Some(Self::FOREST),
            "marsh" => Some(Self::MARSH),
            "hill" => Some(Self::HILL),
            "river" => Some(Self::RIVER),
            "field" => Some(Self::FIELD),
            "settle" | "settlement" => Some(Self::SETTLE),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A world resource carried as an 8-bit density on every cell and as an
/// aggregate count in the simulation-wide pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    /// Coastal fish stocks.
    Fish,
    /// Field grain.
    Grain,
    /// Forest timber.
    Wood,
    /// River and marsh clay.
    Clay,
    /// Hill copper ore.
    Copper,
    /// Hill tin ore (rarer than copper).
    Tin,
    /// Hearth fire, concentrated in settlements.
    Fire,
    /// Fiber from marsh and field plants.
    PlantFiber,
    /// Field cattle.
    Cattle,
    /// Field sheep.
    Sheep,
    /// Field pigs.
    Pig,
    /// Forest charcoal.
    Charcoal,
    /// Religious observance, a settlement intangible.
    Religion,
    /// Tribal cohesion, a settlement intangible.
    Tribalism,
}

impl Resource {
    /// Number of resource kinds.
    pub const COUNT: usize = 14;

    /// Every resource in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fish,
        Self::Grain,
        Self::Wood,
        Self::Clay,
        Self::Copper,
        Self::Tin,
        Self::Fire,
        Self::PlantFiber,
        Self::Cattle,
        Self::Sheep,
        Self::Pig,
        Self::Charcoal,
        Self::Religion,
        Self::Tribalism,
    ];

    /// Ordinal index into density planes and the resource pool.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// DSL name of the resource.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Grain => "grain",
            Self::Wood => "wood",
            Self::Clay => "clay",
            Self::Copper => "copper",
            Self::Tin => "tin",
            Self::Fire => "fire",
            Self::PlantFiber => "plant_fiber",
            Self::Cattle => "cattle",
            Self::Sheep => "sheep",
            Self::Pig => "pig",
            Self::Charcoal => "charcoal",
            Self::Religion => "religion",
            Self::Tribalism => "tribalism",
        }
    }

    /// Resolve a DSL resource name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// The inventory item a gathered unit of this resource becomes, if any.
    ///
    /// Intangibles and livestock have no inventory slot; gathering them
    /// draws down the pool without touching the agent.
    pub const fn stockpile_item(self) -> Option<Item> {
        match self {
            Self::Fish => Some(Item::Fish),
            Self::Grain => Some(Item::Grain),
            Self::Wood => Some(Item::Wood),
            Self::Clay => Some(Item::Clay),
            Self::Copper => Some(Item::Copper),
            Self::Tin => Some(Item::Tin),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Inventory items
// ---------------------------------------------------------------------------

/// An item carried in an agent inventory as an integer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    /// Caught fish.
    Fish,
    /// Harvested grain.
    Grain,
    /// Cut wood.
    Wood,
    /// Dug clay.
    Clay,
    /// Mined copper.
    Copper,
    /// Mined tin.
    Tin,
    /// Smelted bronze (1 copper + 1 tin + 2 wood).
    Bronze,
    /// Bronze tool.
    Tool,
    /// Fired clay pot.
    Pot,
}

impl Item {
    /// Number of item kinds.
    pub const COUNT: usize = 9;

    /// Every item in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fish,
        Self::Grain,
        Self::Wood,
        Self::Clay,
        Self::Copper,
        Self::Tin,
        Self::Bronze,
        Self::Tool,
        Self::Pot,
    ];

    /// Ordinal index into inventories and valuation vectors.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// DSL name of the item.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Grain => "grain",
            Self::Wood => "wood",
            Self::Clay => "clay",
            Self::Copper => "copper",
            Self::Tin => "tin",
            Self::Bronze => "bronze",
            Self::Tool => "tool",
            Self::Pot => "pot",
        }
    }

    /// Resolve a DSL item name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

/// A season of the 360-day year, 90 days each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    /// Days 0-89 of the year.
    Spring,
    /// Days 90-179.
    Summer,
    /// Days 180-269.
    Autumn,
    /// Days 270-359.
    Winter,
}

impl Season {
    /// Days in one full year.
    pub const DAYS_PER_YEAR: u32 = 360;

    /// Derive the season from an absolute day number.
    pub const fn from_day(day: u32) -> Self {
        // DAYS_PER_YEAR is non-zero, so the checked remainder never fails.
        let within = match day.checked_rem(Self::DAYS_PER_YEAR) {
            Some(d) => d,
            None => 0,
        };
        match within {
            0..=89 => Self::Spring,
            90..=179 => Self::Summer,
            180..=269 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Lowercase season name as printed in reports and snapshots.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    /// Resolve a DSL season name. `fall` is an alias for `autumn`;
    /// `None` means "any season".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

/// Comparison operator in a DSL inventory clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cmp {
    /// Strictly greater than.
    Gt,
    /// Strictly less than.
    Lt,
    /// Greater than or equal.
    Ge,
    /// Less than or equal.
    Le,
}

impl Cmp {
    /// Resolve a comparison symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::Ge),
            "<=" => Some(Self::Le),
            _ => None,
        }
    }

    /// Apply the comparison to an inventory count and a clause value.
    pub const fn holds(self, have: i64, value: i64) -> bool {
        match self {
            Self::Gt => have > value,
            Self::Lt => have < value,
            Self::Ge => have >= value,
            Self::Le => have <= value,
        }
    }
}
