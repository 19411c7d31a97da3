//! Winner reconciliation.
//!
//! Administrators may submit winners for several rounds at once, including
//! a change to an earlier round that makes a later recorded winner stale.
//! One increasing sweep rebuilds every non-leaf game's slots from its
//! children and drops any winner that no longer matches a slot, so the
//! result is always a consistent tree.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::bracket::{child_indices, Bracket};
use crate::entrant::{Entrant, EntrantId};
use crate::error::{BracketError, Result};

/// A winner submitted by an administrator for one game.
///
/// `winner: None` clears a previously recorded result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerUpdate {
    pub game_id: u32,
    pub winner: Option<EntrantId>,
}

impl WinnerUpdate {
    pub fn new(game_id: u32, winner: Option<EntrantId>) -> Self {
        WinnerUpdate { game_id, winner }
    }
}

/// Outcome of a reconciliation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Flat indices whose assigned winner was reset to unknown, ascending
    pub reset: Vec<usize>,
}

impl ReconcileReport {
    pub fn reset_count(&self) -> usize {
        self.reset.len()
    }

    pub fn is_clean(&self) -> bool {
        self.reset.is_empty()
    }
}

/// Recompute every game's slots from its children and reset winners that
/// no longer match one of the slots.
///
/// Leaf slots come from seeding and are left alone. Never fails.
pub fn reconcile(bracket: &mut Bracket) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    let games = bracket.games_mut();

    for index in 0..games.len() {
        if let Ok((a, b)) = child_indices(index) {
            let slot_a = games[a].winner;
            let slot_b = games[b].winner;
            games[index].slot_a = slot_a;
            games[index].slot_b = slot_b;
        }

        let game = &mut games[index];
        if !game.winner_is_valid() {
            warn!(
                game_id = game.id,
                index,
                round = game.round,
                position = game.position,
                stale_winner = ?game.winner,
                "winner no longer matches either slot, resetting"
            );
            game.winner = None;
            report.reset.push(index);
        }
    }

    debug!(
        decided = bracket.decided_count(),
        reset = report.reset_count(),
        "reconciled bracket"
    );
    report
}

/// Consuming variant of [`reconcile`].
pub fn reconciled(mut bracket: Bracket) -> (Bracket, ReconcileReport) {
    let report = reconcile(&mut bracket);
    (bracket, report)
}

/// Apply an administrator's batch of winners, then reconcile.
///
/// Every update is validated before anything changes: an unknown game id
/// or entrant rejects the whole batch and leaves `bracket` untouched.
pub fn apply_winners(
    bracket: &mut Bracket,
    updates: &[WinnerUpdate],
    entrants: &[Entrant],
) -> Result<ReconcileReport> {
    let known: HashSet<EntrantId> = entrants.iter().map(|e| e.id).collect();

    let mut resolved = Vec::with_capacity(updates.len());
    for update in updates {
        let index = bracket
            .index_of_id(update.game_id)
            .ok_or(BracketError::UnknownGame(update.game_id))?;
        if let Some(winner) = update.winner {
            if !known.contains(&winner) {
                return Err(BracketError::UnknownEntrant(winner));
            }
        }
        resolved.push((index, update.winner));
    }

    let games = bracket.games_mut();
    for (index, winner) in resolved {
        games[index].winner = winner;
    }

    Ok(reconcile(bracket))
}
