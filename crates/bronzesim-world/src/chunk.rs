//! Chunk materialization and the LRU chunk cache.
//!
//! A [`Chunk`] is a 64x64 block of cells: one terrain-tag array plus one
//! 8-bit density plane per resource. Chunks are generated on first
//! lookup and held in an insertion-ordered map that doubles as the LRU
//! list: a hit moves the entry to the back, eviction pops the front.
//! Because generation is pure in `(seed, cx, cy)`, an evicted chunk
//! rematerializes with identical bytes.

use bronzesim_types::{CHUNK_CELLS, CHUNK_SIZE, Resource, Season, TerrainTags};
use indexmap::IndexMap;
use tracing::trace;

use crate::r#gen::Worldgen;
use crate::model::{RenewModel, season_multiplier};

/// One materialized 64x64 block of world cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    cx: u32,
    cy: u32,
    terrain: Vec<TerrainTags>,
    densities: Vec<Vec<u8>>,
}

impl Chunk {
    /// Materialize the chunk at `(cx, cy)` from the generator.
    ///
    /// Chunk coordinates are bounded by the world size, so the base
    /// offsets and in-chunk index arithmetic cannot overflow.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn generate(r#gen: &Worldgen, cx: u32, cy: u32) -> Self {
        let base_x = cx * CHUNK_SIZE;
        let base_y = cy * CHUNK_SIZE;

        let mut terrain = Vec::with_capacity(CHUNK_CELLS);
        for iy in 0..CHUNK_SIZE {
            for ix in 0..CHUNK_SIZE {
                terrain.push(r#gen.cell_tags(base_x + ix, base_y + iy));
            }
        }

        let mut densities = Vec::with_capacity(Resource::COUNT);
        for resource in Resource::ALL {
            let mut plane = Vec::with_capacity(CHUNK_CELLS);
            for iy in 0..CHUNK_SIZE {
                for ix in 0..CHUNK_SIZE {
                    let x = base_x + ix;
                    let y = base_y + iy;
                    let idx = (iy * CHUNK_SIZE + ix) as usize;
                    let tags = terrain.get(idx).copied().unwrap_or_default();
                    plane.push(r#gen.cell_initial_density(x, y, resource, tags));
                }
            }
            densities.push(plane);
        }

        Self {
            cx,
            cy,
            terrain,
            densities,
        }
    }

    /// Chunk x coordinate (world cell x divided by 64).
    pub const fn cx(&self) -> u32 {
        self.cx
    }

    /// Chunk y coordinate.
    pub const fn cy(&self) -> u32 {
        self.cy
    }

    /// Terrain tags at an in-chunk cell index.
    pub fn terrain_at(&self, idx: usize) -> TerrainTags {
        self.terrain.get(idx).copied().unwrap_or_default()
    }

    /// Density of a resource at an in-chunk cell index.
    pub fn density_at(&self, resource: Resource, idx: usize) -> u8 {
        self.densities
            .get(resource.index())
            .and_then(|plane| plane.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Apply one day of seasonal regeneration to every producing cell.
    ///
    /// Each resource plane gains `rate * multiplier * 255` (truncated)
    /// on the cells whose tags produce that resource, clamped to 255.
    /// Non-producing cells stay at zero.
    pub fn regenerate(&mut self, model: &RenewModel, season: Season) {
        for resource in Resource::ALL {
            let gain = truncate_gain(model.rate(resource) * season_multiplier(resource, season));
            if gain == 0 {
                continue;
            }
            let Some(plane) = self.densities.get_mut(resource.index()) else {
                continue;
            };
            for (idx, cell) in plane.iter_mut().enumerate() {
                let tags = self.terrain.get(idx).copied().unwrap_or_default();
                if produces(tags, resource) {
                    *cell = cell.saturating_add(gain);
                }
            }
        }
    }
}

/// True when a cell with these tags produces the resource.
const fn produces(tags: TerrainTags, resource: Resource) -> bool {
    match resource {
        Resource::Fish => tags.contains(TerrainTags::COAST),
        Resource::Grain | Resource::Cattle | Resource::Sheep | Resource::Pig => {
            tags.contains(TerrainTags::FIELD)
        }
        Resource::Wood | Resource::Charcoal => tags.contains(TerrainTags::FOREST),
        Resource::Clay => tags.intersects(TerrainTags::RIVER) || tags.intersects(TerrainTags::MARSH),
        Resource::Copper | Resource::Tin => tags.contains(TerrainTags::HILL),
        Resource::Fire | Resource::Religion | Resource::Tribalism => {
            tags.contains(TerrainTags::SETTLE)
        }
        Resource::PlantFiber => {
            tags.intersects(TerrainTags::MARSH) || tags.intersects(TerrainTags::FIELD)
        }
    }
}

/// Truncate a fractional daily gain to density points, clamped to a u8.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn truncate_gain(rate: f32) -> u8 {
    let points = rate * 255.0;
    if points <= 0.0 {
        0
    } else if points >= 255.0 {
        255
    } else {
        points as u8
    }
}

/// Fixed-capacity LRU cache of materialized chunks, keyed by `(cx, cy)`.
#[derive(Debug, Clone)]
pub struct ChunkCache {
    capacity: usize,
    r#gen: Worldgen,
    chunks: IndexMap<(u32, u32), Chunk>,
}

impl ChunkCache {
    /// Create a cache holding at most `capacity` chunks (minimum 1).
    pub fn new(capacity: usize, r#gen: Worldgen) -> Self {
        Self {
            capacity: capacity.max(1),
            r#gen,
            chunks: IndexMap::new(),
        }
    }

    /// Number of chunks currently resident.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when no chunk is resident.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Maximum number of resident chunks.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when the chunk is resident, without touching LRU order.
    pub fn contains(&self, cx: u32, cy: u32) -> bool {
        self.chunks.contains_key(&(cx, cy))
    }

    /// Look up a chunk, materializing it on a miss.
    ///
    /// A hit moves the entry to the MRU end; a miss generates, inserts
    /// at the MRU end, and evicts from the LRU end while over capacity.
    pub fn chunk(&mut self, cx: u32, cy: u32) -> &Chunk {
        let key = (cx, cy);
        if let Some(index) = self.chunks.get_index_of(&key) {
            let mru = self.chunks.len().saturating_sub(1);
            self.chunks.move_index(index, mru);
        } else {
            trace!(cx, cy, resident = self.chunks.len(), "materializing chunk");
            let chunk = Chunk::generate(&self.r#gen, cx, cy);
            self.chunks.insert(key, chunk);
            while self.chunks.len() > self.capacity {
                self.chunks.shift_remove_index(0);
            }
        }
        // The entry is now guaranteed resident at the MRU end.
        self.chunks
            .entry(key)
            .or_insert_with(|| Chunk::generate(&self.r#gen, cx, cy))
    }

    /// Terrain tags of a world cell, loading its chunk if needed.
    pub fn cell_tags(&mut self, x: u32, y: u32) -> TerrainTags {
        let (cx, cy, idx) = split_coords(x, y);
        self.chunk(cx, cy).terrain_at(idx)
    }

    /// Density of a resource on a world cell, loading its chunk if needed.
    pub fn cell_density(&mut self, x: u32, y: u32, resource: Resource) -> u8 {
        let (cx, cy, idx) = split_coords(x, y);
        self.chunk(cx, cy).density_at(resource, idx)
    }

    /// Run the daily seasonal regeneration pass over every loaded chunk.
    pub fn regenerate_loaded(&mut self, model: &RenewModel, season: Season) {
        for chunk in self.chunks.values_mut() {
            chunk.regenerate(model, season);
        }
    }
}

/// Split world-cell coordinates into chunk coordinates and in-chunk index.
/// The index stays below `CHUNK_CELLS` by construction.
#[allow(clippy::arithmetic_side_effects)]
const fn split_coords(x: u32, y: u32) -> (u32, u32, usize) {
    let cx = x >> 6;
    let cy = y >> 6;
    let idx = ((y % CHUNK_SIZE) * CHUNK_SIZE + (x % CHUNK_SIZE)) as usize;
    (cx, cy, idx)
}
