//! ASCII overview map rendering.
//!
//! Renders a window of cells centered on the world midpoint, one
//! character per cell, with a fixed priority when multiple tags overlap:
//! settlement, coast, river, marsh, hill, forest, field, beach.

use bronzesim_types::{TerrainTags, WORLD_CELLS_X, WORLD_CELLS_Y};

use crate::chunk::ChunkCache;

/// Map an overlapping tag set to its display character.
pub const fn cell_char(tags: TerrainTags) -> char {
    if tags.contains(TerrainTags::SETTLE) {
        'S'
    } else if tags.contains(TerrainTags::COAST) {
        '~'
    } else if tags.contains(TerrainTags::RIVER) {
        'r'
    } else if tags.contains(TerrainTags::MARSH) {
        'm'
    } else if tags.contains(TerrainTags::HILL) {
        '^'
    } else if tags.contains(TerrainTags::FOREST) {
        'f'
    } else if tags.contains(TerrainTags::FIELD) {
        '.'
    } else if tags.contains(TerrainTags::BEACH) {
        'b'
    } else {
        ' '
    }
}

/// Render a `width` x `height` character window centered on the world
/// midpoint. Rows are newline-terminated; cells outside the world render
/// as spaces. Window coordinates fit comfortably in i64, so the offset
/// arithmetic cannot overflow.
#[allow(clippy::arithmetic_side_effects)]
pub fn render_centered(cache: &mut ChunkCache, width: u32, height: u32) -> String {
    let cx = i64::from(WORLD_CELLS_X / 2);
    let cy = i64::from(WORLD_CELLS_Y / 2);
    let sx = cx - i64::from(width / 2);
    let sy = cy - i64::from(height / 2);

    let mut out = String::with_capacity(((width + 1) * height) as usize);
    for row in 0..i64::from(height) {
        for col in 0..i64::from(width) {
            let x = sx + col;
            let y = sy + row;
            if x < 0 || y < 0 || x >= i64::from(WORLD_CELLS_X) || y >= i64::from(WORLD_CELLS_Y) {
                out.push(' ');
                continue;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let tags = cache.cell_tags(x as u32, y as u32);
            out.push(cell_char(tags));
        }
        out.push('\n');
    }
    out
}
