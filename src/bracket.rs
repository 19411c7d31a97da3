//! Bracket tree model.
//!
//! The 63 games live in one flat sequence ordered by round, then position.
//! Parent/child links are never stored: for any non-leaf index `i`, the
//! games feeding its two slots are `2 * (i % 32)` and `2 * (i % 32) + 1`.
//! Reducing modulo 32 folds every round back onto the address range of the
//! round before it, because each round is half the size of the previous one.
//! Children therefore always precede their parent, and a single increasing
//! sweep over the indices visits every subtree before its root.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;

use crate::constants::{ENTRANT_COUNT, GAME_COUNT, LEAF_COUNT, ROUND_BOUNDARIES, ROUND_COUNT};
use crate::entrant::{Entrant, EntrantId};
use crate::error::{BracketError, Result};

/// Indices of the two games whose winners fill the slots of game `index`.
///
/// Only non-leaf games have children.
pub fn child_indices(index: usize) -> Result<(usize, usize)> {
    if index >= GAME_COUNT {
        return Err(BracketError::IndexOutOfRange(index));
    }
    if index < LEAF_COUNT {
        return Err(BracketError::NotAParent(index));
    }
    let local = index % LEAF_COUNT;
    Ok((2 * local, 2 * local + 1))
}

/// Index of the game that the winner of `index` advances to, or `None` for
/// the championship.
pub fn parent_index(index: usize) -> Option<usize> {
    if index >= GAME_COUNT - 1 {
        None
    } else {
        Some(LEAF_COUNT + index / 2)
    }
}

/// Round (0..6) containing game `index`.
pub fn round_of(index: usize) -> Result<usize> {
    if index >= GAME_COUNT {
        return Err(BracketError::IndexOutOfRange(index));
    }
    Ok(ROUND_BOUNDARIES[1..]
        .iter()
        .position(|&end| index < end)
        .unwrap_or(ROUND_COUNT - 1))
}

/// Flat index range covered by `round`.
pub fn round_range(round: usize) -> Range<usize> {
    if round >= ROUND_COUNT {
        return GAME_COUNT..GAME_COUNT;
    }
    ROUND_BOUNDARIES[round]..ROUND_BOUNDARIES[round + 1]
}

pub fn games_in_round(round: usize) -> usize {
    round_range(round).len()
}

/// Flat index of the game at `position` within `round`.
pub fn index_of(round: usize, position: usize) -> Option<usize> {
    let range = round_range(round);
    let index = range.start + position;
    range.contains(&index).then_some(index)
}

/// Bracket quarter (region) of game `index`, for rounds played inside a
/// single quarter. The Final 4 and championship span quarters.
pub fn quarter_of(index: usize) -> Option<usize> {
    let round = round_of(index).ok()?;
    if round > 3 {
        return None;
    }
    let per_quarter = games_in_round(round) / 4;
    Some((index - ROUND_BOUNDARIES[round]) / per_quarter)
}

/// One matchup node in the bracket.
///
/// `None` marks a slot or winner that is not yet known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub round: usize,
    pub position: usize,
    pub slot_a: Option<EntrantId>,
    pub slot_b: Option<EntrantId>,
    pub winner: Option<EntrantId>,
}

impl Game {
    /// An undecided game with both slots unknown.
    pub fn open(id: u32, round: usize, position: usize) -> Self {
        Game {
            id,
            round,
            position,
            slot_a: None,
            slot_b: None,
            winner: None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether `entrant` occupies one of this game's slots.
    pub fn has_slot(&self, entrant: EntrantId) -> bool {
        self.slot_a == Some(entrant) || self.slot_b == Some(entrant)
    }

    /// True when the winner is unknown, or both slots are known and the
    /// winner is one of them.
    pub fn winner_is_valid(&self) -> bool {
        match self.winner {
            None => true,
            Some(w) => self.slot_a.is_some() && self.slot_b.is_some() && self.has_slot(w),
        }
    }

    /// The entrant eliminated by this game, if decided.
    pub fn loser(&self) -> Option<EntrantId> {
        let winner = self.winner?;
        if self.slot_a == Some(winner) {
            self.slot_b
        } else {
            self.slot_a
        }
    }
}

/// The complete 63-game bracket in flat index order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Game>", into = "Vec<Game>")]
pub struct Bracket {
    games: Vec<Game>,
}

impl Bracket {
    /// Set up a fresh tournament from 64 entrants listed in bracket order.
    ///
    /// Leaf `i` receives entrants `2i` and `2i + 1`; every later slot and
    /// all winners start unknown. Game ids are `index + 1`.
    pub fn seeded(entrants: &[Entrant]) -> Result<Self> {
        if entrants.len() != ENTRANT_COUNT {
            return Err(BracketError::WrongEntrantCount {
                expected: ENTRANT_COUNT,
                actual: entrants.len(),
            });
        }
        let mut seen = HashSet::with_capacity(ENTRANT_COUNT);
        if let Some(dup) = entrants.iter().find(|e| !seen.insert(e.id)) {
            return Err(BracketError::DuplicateEntrant(dup.id));
        }

        let mut games = Vec::with_capacity(GAME_COUNT);
        for round in 0..ROUND_COUNT {
            for (position, index) in round_range(round).enumerate() {
                let mut game = Game::open(index as u32 + 1, round, position);
                if round == 0 {
                    game.slot_a = Some(entrants[2 * index].id);
                    game.slot_b = Some(entrants[2 * index + 1].id);
                }
                games.push(game);
            }
        }

        Ok(Bracket { games })
    }

    /// Build a bracket from loaded games, in any order.
    ///
    /// Rejects anything other than exactly one game per (round, position),
    /// and repeated game ids.
    pub fn from_games(mut games: Vec<Game>) -> Result<Self> {
        if games.len() != GAME_COUNT {
            return Err(BracketError::WrongGameCount {
                expected: GAME_COUNT,
                actual: games.len(),
            });
        }
        let mut ids = HashSet::with_capacity(GAME_COUNT);
        if let Some(dup) = games.iter().find(|g| !ids.insert(g.id)) {
            return Err(BracketError::DuplicateGame(dup.id));
        }

        games.sort_by_key(|g| (g.round, g.position));
        for (index, game) in games.iter().enumerate() {
            if index_of(game.round, game.position) != Some(index) {
                return Err(BracketError::GameOutOfPlace {
                    index,
                    round: game.round,
                    position: game.position,
                });
            }
        }

        Ok(Bracket { games })
    }

    /// Check that every slot and winner refers to one of `entrants`.
    pub fn check_entrants(&self, entrants: &[Entrant]) -> Result<()> {
        let known: HashSet<EntrantId> = entrants.iter().map(|e| e.id).collect();
        for game in &self.games {
            for id in [game.slot_a, game.slot_b, game.winner].into_iter().flatten() {
                if !known.contains(&id) {
                    return Err(BracketError::UnknownEntrant(id));
                }
            }
        }
        Ok(())
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn into_games(self) -> Vec<Game> {
        self.games
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub(crate) fn games_mut(&mut self) -> &mut [Game] {
        &mut self.games
    }

    /// Flat index of the game with the given persistence id.
    pub fn index_of_id(&self, id: u32) -> Option<usize> {
        self.games.iter().position(|g| g.id == id)
    }

    /// Winner of the championship game.
    pub fn champion(&self) -> Option<EntrantId> {
        self.games[GAME_COUNT - 1].winner
    }

    pub fn decided_count(&self) -> usize {
        self.games.iter().filter(|g| g.is_decided()).count()
    }

    /// Games on the path from `index` up to the championship, excluding
    /// `index` itself.
    pub fn ancestors(index: usize) -> impl Iterator<Item = usize> {
        std::iter::successors(parent_index(index), |&i| parent_index(i))
    }

    /// Whether every game's winner matches one of its slots and every
    /// non-leaf game's slots match its children's winners.
    pub fn is_consistent(&self) -> bool {
        self.games.iter().enumerate().all(|(index, game)| {
            if !game.winner_is_valid() {
                return false;
            }
            match child_indices(index) {
                Ok((a, b)) => game.slot_a == self.games[a].winner && game.slot_b == self.games[b].winner,
                Err(_) => true,
            }
        })
    }
}

impl TryFrom<Vec<Game>> for Bracket {
    type Error = BracketError;

    fn try_from(games: Vec<Game>) -> Result<Self> {
        Bracket::from_games(games)
    }
}

impl From<Bracket> for Vec<Game> {
    fn from(bracket: Bracket) -> Self {
        bracket.games
    }
}
