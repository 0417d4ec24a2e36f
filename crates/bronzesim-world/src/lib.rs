//! The procedural world for the Bronzesim simulation.
//!
//! Terrain tags and initial resource densities are pure functions of
//! `(seed, x, y)`; chunks of 64x64 cells are materialized on first touch
//! and held in a fixed-capacity LRU cache. Because cell contents are
//! reproducible from the seed, eviction is invisible to the rest of the
//! simulation.
//!
//! # Modules
//!
//! - [`gen`] -- Pure terrain-tag and initial-density functions.
//! - [`model`] -- Per-day renewal rates and seasonal multipliers.
//! - [`chunk`] -- Chunk materialization and the LRU [`ChunkCache`],
//!   including the per-cell seasonal regeneration pass.
//! - [`map`] -- ASCII overview map rendering.
//!
//! [`ChunkCache`]: chunk::ChunkCache

pub mod chunk;
pub mod r#gen;
pub mod map;
pub mod model;

// Re-export primary types at crate root.
pub use chunk::{Chunk, ChunkCache};
pub use r#gen::Worldgen;
pub use map::render_centered;
pub use model::{RenewModel, season_multiplier};
