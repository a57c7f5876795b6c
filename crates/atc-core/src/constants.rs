//! Game rules and tuning constants.

/// Number of aircraft identity slots (one per letter).
pub const MAX_PLANES: u8 = 26;

/// Number of compass octants.
pub const OCTANTS: i32 = 8;

// --- Altitude (thousands of feet) ---

/// Highest legal altitude. Exits must be crossed at exactly this altitude.
pub const CEILING: i32 = 9;

/// Altitude an aircraft entering through an exit starts at.
pub const ENTRY_ALTITUDE: i32 = 7;

// --- Motion ---

/// Maximum heading change per movement step, in octants.
pub const MAX_TURN_PER_TICK: i32 = 2;

// --- Separation ---

/// Two aircraft within this distance on every axis have collided.
pub const COLLISION_DISTANCE: i32 = 1;

/// New aircraft are not spawned at an exit with traffic this close on every axis.
pub const SPAWN_CLEARANCE: i32 = 4;

// --- Fuel ---

/// Fuel level at which a display should flag an aircraft as running low.
pub const LOW_FUEL: i32 = 15;

// --- Level limits ---

/// Smallest legal arena dimension.
pub const MIN_ARENA_SIZE: u32 = 3;

/// Largest legal arena dimension. Keeps fuel and grid arithmetic in range.
pub const MAX_ARENA_SIZE: u32 = 1000;

/// Smallest legal `update` and `newplane` values.
pub const MIN_PERIOD: u32 = 1;

/// A playable level needs at least this many exits and airports combined.
pub const MIN_DESTINATIONS: usize = 2;
