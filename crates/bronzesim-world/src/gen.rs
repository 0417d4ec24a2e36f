//! Pure procedural terrain and resource generation.
//!
//! Every cell's tags and initial densities are functions of the world
//! seed and the cell coordinates alone. Regenerating a chunk after
//! eviction therefore reproduces it byte for byte, which the chunk
//! cache relies on.

use bronzesim_types::{Resource, TerrainTags, WORLD_CELLS_X, WORLD_CELLS_Y, hash_u32};

/// Noise salt for the beach strip.
const SALT_BEACH: u32 = 0xBEEF_1234;
/// Noise salt for forest cover.
const SALT_FOREST: u32 = 0x1111_A11A;
/// Noise salt for hills.
const SALT_HILL: u32 = 0x2222_B22B;
/// Noise salt for marshland.
const SALT_MARSH: u32 = 0x3333_C33C;
/// Noise salt for the coarse river bands (sampled at 1/8 resolution).
const SALT_RIVER: u32 = 0x52A1_7B3D;
/// Noise salt for settlement cluster scoring.
const SALT_SETTLE: u32 = 0x5E77_1EAD;
/// Noise salt for the shared resource-density base.
const SALT_DENSITY: u32 = 0x9999_DDDD;

/// Settlement clusters snap to a grid of this pitch, offset to its center.
const SETTLE_PITCH: u32 = 2000;
/// Settlement core radius in cells.
const SETTLE_RADIUS: i64 = 70;
/// Field radius around a settlement core, in cells.
const FIELD_RADIUS: i64 = 250;

/// Stateless world generator; just the seed plus the pure functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Worldgen {
    seed: u32,
}

impl Worldgen {
    /// Create a generator for the given world seed.
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The world seed.
    pub const fn seed(self) -> u32 {
        self.seed
    }

    /// 8-bit noise at a coordinate pair under a salt.
    pub const fn noise(self, x: u32, y: u32, salt: u32) -> u8 {
        (hash_u32(x, y, self.seed ^ salt) & 0xFF) as u8
    }

    /// Terrain tags for a world cell.
    ///
    /// Cell coordinates are bounded by the 52800-cell world, so none of
    /// the derivation arithmetic can overflow.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn cell_tags(self, x: u32, y: u32) -> TerrainTags {
        let mut tags = TerrainTags::empty();
        if is_coast_cell(x, y) {
            tags.insert(TerrainTags::COAST);
        } else if (x < 3 || y < 3 || x > WORLD_CELLS_X - 4 || y > WORLD_CELLS_Y - 4)
            && self.noise(x, y, SALT_BEACH) < 140
        {
            tags.insert(TerrainTags::BEACH);
        }

        if self.noise(x, y, SALT_FOREST) > 150 {
            tags.insert(TerrainTags::FOREST);
        }
        if self.noise(x, y, SALT_HILL) > 200 {
            tags.insert(TerrainTags::HILL);
        }
        if self.noise(x, y, SALT_MARSH) > 215 {
            tags.insert(TerrainTags::MARSH);
        }

        if self.noise(x / 8, y / 8, SALT_RIVER) > 245 {
            tags.insert(TerrainTags::RIVER);
        }

        // Settlement clusters: score the snapped grid point, then tag by
        // distance from it.
        let sx = (x / SETTLE_PITCH) * SETTLE_PITCH + SETTLE_PITCH / 2;
        let sy = (y / SETTLE_PITCH) * SETTLE_PITCH + SETTLE_PITCH / 2;
        let score = self.noise(sx, sy, SALT_SETTLE);
        if score > 240 {
            let dx = i64::from(x) - i64::from(sx);
            let dy = i64::from(y) - i64::from(sy);
            let d2 = dx * dx + dy * dy;
            if d2 < SETTLE_RADIUS * SETTLE_RADIUS {
                tags.insert(TerrainTags::SETTLE);
            }
            if d2 < FIELD_RADIUS * FIELD_RADIUS {
                tags.insert(TerrainTags::FIELD);
            }
        }

        tags
    }

    /// Initial 8-bit density of a resource on a cell with the given tags.
    ///
    /// All resources on one cell share a single density base drawn from
    /// the [`SALT_DENSITY`] noise channel; tag-conditional formulas shape
    /// it per resource. The base is at most 255, so the i32 formula
    /// arithmetic cannot overflow.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn cell_initial_density(self, x: u32, y: u32, resource: Resource, tags: TerrainTags) -> u8 {
        let base = i32::from(self.noise(x, y, SALT_DENSITY));
        match resource {
            Resource::Fish if tags.contains(TerrainTags::COAST) => clamp_u8(120 + base / 2),
            Resource::Grain if tags.contains(TerrainTags::FIELD) => clamp_u8(80 + base / 3),
            Resource::Wood if tags.contains(TerrainTags::FOREST) => clamp_u8(90 + base / 3),
            Resource::Clay
                if tags.intersects(TerrainTags::RIVER) || tags.intersects(TerrainTags::MARSH) =>
            {
                clamp_u8(60 + base / 4)
            }
            Resource::Copper if tags.contains(TerrainTags::HILL) => {
                if base > 240 { 40 } else { 5 }
            }
            Resource::Tin if tags.contains(TerrainTags::HILL) => {
                if base > 250 { 25 } else { 0 }
            }
            Resource::Fire if tags.contains(TerrainTags::SETTLE) => clamp_u8(180 + base / 4),
            Resource::PlantFiber
                if tags.intersects(TerrainTags::MARSH) || tags.intersects(TerrainTags::FIELD) =>
            {
                clamp_u8(70 + base / 3)
            }
            Resource::Cattle if tags.contains(TerrainTags::FIELD) => clamp_u8(40 + base / 4),
            Resource::Sheep if tags.contains(TerrainTags::FIELD) => clamp_u8(35 + base / 4),
            Resource::Pig if tags.contains(TerrainTags::FIELD) => clamp_u8(30 + base / 4),
            Resource::Charcoal if tags.contains(TerrainTags::FOREST) => clamp_u8(25 + base / 5),
            Resource::Religion if tags.contains(TerrainTags::SETTLE) => clamp_u8(60 + base / 5),
            Resource::Tribalism if tags.contains(TerrainTags::SETTLE) => clamp_u8(20 + base / 8),
            _ => 0,
        }
    }
}

/// True for cells in the two-cell coastal ring around the world edge.
#[allow(clippy::arithmetic_side_effects)]
pub const fn is_coast_cell(x: u32, y: u32) -> bool {
    x < 2 || y < 2 || x >= WORLD_CELLS_X - 2 || y >= WORLD_CELLS_Y - 2
}

/// Clamp an i32 into the u8 density range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_u8(v: i32) -> u8 {
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_pure() {
        let r#gen = Worldgen::new(1337);
        for (x, y) in [(0, 0), (500, 700), (26400, 26400), (52799, 1)] {
            assert_eq!(r#gen.cell_tags(x, y), r#gen.cell_tags(x, y));
        }
    }

    #[test]
    fn densities_are_pure() {
        let r#gen = Worldgen::new(1337);
        let (x, y) = (1200, 3400);
        let tags = r#gen.cell_tags(x, y);
        for resource in Resource::ALL {
            assert_eq!(
                r#gen.cell_initial_density(x, y, resource, tags),
                r#gen.cell_initial_density(x, y, resource, tags)
            );
        }
    }

    #[test]
    fn world_edge_is_coast() {
        assert!(is_coast_cell(0, 500));
        assert!(is_coast_cell(1, 500));
        assert!(is_coast_cell(500, 0));
        assert!(is_coast_cell(WORLD_CELLS_X - 1, 500));
        assert!(is_coast_cell(500, WORLD_CELLS_Y - 2));
        assert!(!is_coast_cell(2, 2));
        assert!(!is_coast_cell(26400, 26400));
    }

    #[test]
    fn coast_cells_carry_fish() {
        let r#gen = Worldgen::new(1337);
        let tags = r#gen.cell_tags(0, 0);
        assert!(tags.contains(TerrainTags::COAST));
        // Coastal fish density is at least the 120 floor of the formula.
        let fish = r#gen.cell_initial_density(0, 0, Resource::Fish, tags);
        assert!(fish >= 120);
    }

    #[test]
    fn fish_requires_coast() {
        let r#gen = Worldgen::new(1337);
        let (x, y) = (26400, 26400);
        let tags = r#gen.cell_tags(x, y);
        assert!(!tags.contains(TerrainTags::COAST));
        assert_eq!(r#gen.cell_initial_density(x, y, Resource::Fish, tags), 0);
    }

    #[test]
    fn bare_cells_have_no_density() {
        let r#gen = Worldgen::new(1337);
        // A cell with no tags yields zero for every resource; interior
        // columns always contain plenty of untagged cells.
        let bare = (100..2000_u32).find(|&y| r#gen.cell_tags(12345, y).is_empty());
        assert!(bare.is_some(), "no bare cell found in scan range");
        if let Some(y) = bare {
            let tags = r#gen.cell_tags(12345, y);
            for resource in Resource::ALL {
                assert_eq!(r#gen.cell_initial_density(12345, y, resource, tags), 0);
            }
        }
    }

    #[test]
    fn copper_and_tin_only_on_hills() {
        let r#gen = Worldgen::new(1337);
        for y in 100..4000_u32 {
            let tags = r#gen.cell_tags(9000, y);
            if !tags.contains(TerrainTags::HILL) {
                assert_eq!(r#gen.cell_initial_density(9000, y, Resource::Copper, tags), 0);
                assert_eq!(r#gen.cell_initial_density(9000, y, Resource::Tin, tags), 0);
            }
        }
    }

    #[test]
    fn beach_only_near_the_edge() {
        let r#gen = Worldgen::new(1337);
        let tags = r#gen.cell_tags(26400, 26400);
        assert!(!tags.contains(TerrainTags::BEACH));
        // Beach never overlaps the coast ring itself.
        let edge = r#gen.cell_tags(0, 17);
        assert!(!edge.contains(TerrainTags::BEACH));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Worldgen::new(1337);
        let b = Worldgen::new(7331);
        let mut same = 0_u32;
        for y in 0..500_u32 {
            if a.cell_tags(5000, y) == b.cell_tags(5000, y) {
                same += 1;
            }
        }
        assert!(same < 500, "seeds produced identical terrain columns");
    }
}
