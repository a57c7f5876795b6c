//! Compass octant arithmetic.
//!
//! Headings are octants `0..8`: 0 = north, increasing clockwise in 45°
//! steps. Screen coordinates grow downward, so north is `y - 1`.
//!
//! ```text
//!   7  0  1        q  w  e
//!    \ | /
//!   6-- --2        a     d
//!    / | \
//!   5  4  3        z  x  c
//! ```

use std::f64::consts::PI;

use glam::IVec2;

use crate::constants::OCTANTS;

/// Single-key direction tokens, indexed by octant.
pub const DIRECTION_KEYS: [char; 8] = ['w', 'e', 'd', 'c', 'x', 'z', 'a', 'q'];

const DISPLACEMENT: [IVec2; 8] = [
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
    IVec2::new(0, 1),
    IVec2::new(-1, 1),
    IVec2::new(-1, 0),
    IVec2::new(-1, -1),
];

/// Octant for a direction key. Case-insensitive.
pub fn from_key(key: char) -> Option<u8> {
    let key = key.to_ascii_lowercase();
    DIRECTION_KEYS
        .iter()
        .position(|&k| k == key)
        .map(|i| i as u8)
}

/// Direction key for an octant.
pub fn key(dir: u8) -> Option<char> {
    DIRECTION_KEYS.get(dir as usize).copied()
}

/// Unit grid step for a heading. Zero for anything outside `0..8`.
pub fn displacement(dir: u8) -> IVec2 {
    DISPLACEMENT
        .get(dir as usize)
        .copied()
        .unwrap_or(IVec2::ZERO)
}

/// Compass degrees of an octant.
pub fn degrees(dir: u8) -> u32 {
    u32::from(dir) * 45
}

/// Rotate by `delta` octants (positive = clockwise), wrapping into `0..8`.
pub fn rotate(dir: u8, delta: i32) -> u8 {
    (i32::from(dir) + delta).rem_euclid(OCTANTS) as u8
}

/// Octant that best matches the direction of the vector `(dx, dy)`.
pub fn bearing(dx: i32, dy: i32) -> u8 {
    let angle = f64::from(dy).atan2(f64::from(dx));
    ((angle * 4.0 / PI + 10.0).round() as i32).rem_euclid(OCTANTS) as u8
}
