use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bracket::{child_indices, round_of, Bracket};
use crate::constants::{GAME_COUNT, ROUND_COUNT};
use crate::entrant::EntrantId;
use crate::picks::Picks;
use crate::ranking::{Participant, Standing};

/// Realized and best-case scores for one participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Points earned in each round from decided games
    pub round_scores: [u32; ROUND_COUNT],

    /// Sum of `round_scores`
    pub total_score: u32,

    /// Highest total still reachable
    pub potential_score: u32,
}

impl ScoreResult {
    pub fn score(&self, round: usize) -> u32 {
        self.round_scores.get(round).copied().unwrap_or(0)
    }

    /// Points still available beyond what has been earned.
    pub fn remaining(&self) -> u32 {
        self.potential_score.saturating_sub(self.total_score)
    }
}

/// Best value obtainable from each game, computed bottom-up.
///
/// A decided game is worth what its winner is worth. An undecided game is
/// worth the better of its two sides, where an unknown side is worth the
/// best its feeding game can still produce.
pub fn potentials(bracket: &Bracket, picks: &Picks) -> [u32; GAME_COUNT] {
    let mut potential = [0u32; GAME_COUNT];

    for (index, game) in bracket.games().iter().enumerate() {
        let value = match game.winner {
            Some(winner) => picks.points_for(winner),
            None => {
                let children = child_indices(index).ok();
                let side = |slot: Option<EntrantId>, child: Option<usize>| match (slot, child) {
                    (Some(entrant), _) => picks.points_for(entrant),
                    (None, Some(child)) => potential[child],
                    (None, None) => 0,
                };
                let a = side(game.slot_a, children.map(|(a, _)| a));
                let b = side(game.slot_b, children.map(|(_, b)| b));
                a.max(b)
            }
        };
        potential[index] = value;
    }

    potential
}

/// Score one participant's picks against the current bracket.
pub fn score(bracket: &Bracket, picks: &Picks) -> ScoreResult {
    let potential = potentials(bracket, picks);
    let mut result = ScoreResult::default();

    for (index, game) in bracket.games().iter().enumerate() {
        if game.is_decided() {
            let round = round_of(index).unwrap_or(ROUND_COUNT - 1);
            result.round_scores[round] += potential[index];
        }
        result.potential_score += potential[index];
    }
    result.total_score = result.round_scores.iter().sum();

    result
}

/// Score every participant in parallel against one bracket snapshot.
///
/// Output order matches `participants`.
pub fn score_all(bracket: &Bracket, participants: &[Participant]) -> Vec<Standing> {
    let standings: Vec<Standing> = participants
        .par_iter()
        .map(|p| Standing::new(p, score(bracket, &p.picks)))
        .collect();

    debug!(
        participants = standings.len(),
        decided = bracket.decided_count(),
        "scored participants"
    );
    standings
}
