//! Colors for alive cells.
//!
//! Alive cells get a pseudo-random color from a fixed palette, chosen from
//! the cell position and generation so the grid shimmers between
//! generations but stays stable within one.

use macroquad::prelude::Color;

pub const DEAD_COLOR: Color = Color::new(0.933, 0.933, 0.933, 1.0);

pub const PALETTE: [u32; 50] = [
    0xFF6633, 0xFFB399, 0xFF33FF, 0xFFFF99, 0x00B3E6, 0xE6B333, 0x3366E6, 0x999966, 0x99FF99,
    0xB34D4D, 0x80B300, 0x809900, 0xE6B3B3, 0x6680B3, 0x66991A, 0xFF99E6, 0xCCFF1A, 0xFF1A66,
    0xE6331A, 0x33FFCC, 0x66994D, 0xB366CC, 0x4D8000, 0xB33300, 0xCC80CC, 0x66664D, 0x991AFF,
    0xE666FF, 0x4DB3FF, 0x1AB399, 0xE666B3, 0x33991A, 0xCC9999, 0xB3B31A, 0x00E680, 0x4D8066,
    0x809980, 0xE6FF80, 0x1AFF33, 0x999933, 0xFF3380, 0xCCCC00, 0x66E64D, 0x4D80CC, 0x9900B3,
    0xE64D66, 0x4DB380, 0xFF4D4D, 0x99E6E6, 0x6666FF,
];

/// SplitMix64 finalizer
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Palette slot for a cell at a given generation
pub fn palette_index(row: usize, col: usize, generation: u64) -> usize {
    let key = ((row as u64) << 48) ^ ((col as u64) << 32) ^ generation;
    (mix(key) % PALETTE.len() as u64) as usize
}

pub fn rgb(hex: u32) -> Color {
    Color::from_rgba(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
        255,
    )
}

/// Color of an alive cell
pub fn alive_color(row: usize, col: usize, generation: u64) -> Color {
    rgb(PALETTE[palette_index(row, col, generation)])
}
