/// Number of entrants seeded into the bracket
pub const ENTRANT_COUNT: usize = 64;

/// Number of games in a 64-entrant single-elimination bracket
pub const GAME_COUNT: usize = 63;

/// Number of first-round (leaf) games
pub const LEAF_COUNT: usize = 32;

/// Number of elimination rounds
pub const ROUND_COUNT: usize = 6;

/// Flat index where each round starts; the last entry is the exclusive end
pub const ROUND_BOUNDARIES: [usize; ROUND_COUNT + 1] = [0, 32, 48, 56, 60, 62, 63];

/// Number of ranked picks each participant makes
pub const PICK_SLOTS: usize = 20;

/// Display names for each round
pub const ROUND_NAMES: [&str; ROUND_COUNT] =
    ["Round 1", "Round 2", "Sweet 16", "Elite 8", "Final 4", "Champ."];

/// Default display names for the four bracket quarters, in bracket order
pub const REGION_NAMES: [&str; 4] = ["Midwest", "West", "East", "South"];

/// Points awarded for a pick in the given slot (slot 0 is worth the most)
pub fn slot_points(slot: usize) -> u32 {
    if slot < PICK_SLOTS {
        (PICK_SLOTS - slot) as u32
    } else {
        0
    }
}

/// Highest possible total: every game won by a 20-point pick
pub fn max_total_points() -> u32 {
    GAME_COUNT as u32 * slot_points(0)
}
