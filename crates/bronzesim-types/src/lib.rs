//! Shared type definitions for the Bronzesim simulation.
//!
//! This crate is the single source of truth for the enumerations, world
//! constants, and deterministic hashing primitives used across the
//! Bronzesim workspace. Everything here is pure data or pure functions;
//! no I/O, no allocation beyond `&'static str` names.
//!
//! # Modules
//!
//! - [`constants`] -- World dimensions and chunk geometry
//! - [`enums`] -- Terrain tags, resources, inventory items, seasons, comparators
//! - [`hash`] -- The splitmix64-based deterministic hash and RNG streams

pub mod constants;
pub mod enums;
pub mod hash;

// Re-export all public types at crate root for convenience.
pub use constants::{CHUNK_CELLS, CHUNK_SIZE, WORLD_CELLS_X, WORLD_CELLS_Y};
pub use enums::{Cmp, Item, Resource, Season, TerrainTags};
pub use hash::{hash_u32, rng_f01, rng_u32, splitmix64};
