use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::{slot_points, PICK_SLOTS};
use crate::entrant::{Entrant, EntrantId};
use crate::error::{BracketError, Result};

/// A participant's ranked picks.
///
/// Slot 0 is worth 20 points, slot 19 is worth 1. Empty slots are `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<EntrantId>>", into = "Vec<Option<EntrantId>>")]
pub struct Picks {
    slots: [Option<EntrantId>; PICK_SLOTS],
}

impl Picks {
    /// Build picks from up to 20 slots. Missing trailing slots are empty.
    pub fn new(slots: Vec<Option<EntrantId>>) -> Result<Self> {
        if slots.len() > PICK_SLOTS {
            return Err(BracketError::TooManyPicks {
                max: PICK_SLOTS,
                actual: slots.len(),
            });
        }
        let mut picks = Picks::empty();
        for (slot, pick) in slots.into_iter().enumerate() {
            picks.slots[slot] = pick;
        }
        Ok(picks)
    }

    /// Picks in slot order, with no empty slots.
    pub fn ranked<I>(entrants: I) -> Result<Self>
    where
        I: IntoIterator<Item = EntrantId>,
    {
        Picks::new(entrants.into_iter().map(Some).collect())
    }

    pub fn empty() -> Self {
        Picks {
            slots: [None; PICK_SLOTS],
        }
    }

    pub fn slots(&self) -> &[Option<EntrantId>] {
        &self.slots
    }

    pub fn slot(&self, slot: usize) -> Option<EntrantId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Slot holding `entrant`, if picked.
    pub fn slot_of(&self, entrant: EntrantId) -> Option<usize> {
        self.slots.iter().position(|&p| p == Some(entrant))
    }

    /// Points this participant earns each time `entrant` wins a game.
    pub fn points_for(&self, entrant: EntrantId) -> u32 {
        self.slot_of(entrant).map(slot_points).unwrap_or(0)
    }

    pub fn has_picked(&self, entrant: EntrantId) -> bool {
        self.slot_of(entrant).is_some()
    }

    pub fn pick_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_some()).count()
    }

    /// Reject picks naming an unknown entrant or the same entrant twice.
    pub fn validate(&self, entrants: &[Entrant]) -> Result<()> {
        let known: HashSet<EntrantId> = entrants.iter().map(|e| e.id).collect();
        let mut seen = HashSet::new();
        for id in self.slots.iter().flatten() {
            if !known.contains(id) {
                return Err(BracketError::UnknownEntrant(*id));
            }
            if !seen.insert(*id) {
                return Err(BracketError::DuplicatePick(*id));
            }
        }
        Ok(())
    }
}

impl Default for Picks {
    fn default() -> Self {
        Picks::empty()
    }
}

impl TryFrom<Vec<Option<EntrantId>>> for Picks {
    type Error = BracketError;

    fn try_from(slots: Vec<Option<EntrantId>>) -> Result<Self> {
        Picks::new(slots)
    }
}

impl From<Picks> for Vec<Option<EntrantId>> {
    fn from(picks: Picks) -> Self {
        picks.slots.to_vec()
    }
}
