use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::picks::Picks;
use crate::scoring::ScoreResult;

/// A member of the prediction pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub name: String,

    /// Inactive participants are still scored but hidden from public views
    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default)]
    pub picks: Picks,
}

fn default_active() -> bool {
    true
}

impl Participant {
    pub fn new(id: u32, name: impl Into<String>, picks: Picks) -> Self {
        Participant {
            id,
            name: name.into(),
            active: true,
            picks,
        }
    }
}

/// One scoreboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub participant_id: u32,
    pub name: String,
    pub active: bool,
    pub result: ScoreResult,
}

impl Standing {
    pub fn new(participant: &Participant, result: ScoreResult) -> Self {
        Standing {
            participant_id: participant.id,
            name: participant.name.clone(),
            active: participant.active,
            result,
        }
    }
}

/// Order standings by total score, then potential score, both descending.
///
/// The sort is stable: standings tied on both keep their input order.
pub fn rank(mut standings: Vec<Standing>) -> Vec<Standing> {
    standings.sort_by_key(|s| (Reverse(s.result.total_score), Reverse(s.result.potential_score)));
    standings
}

/// Ranked standings for the whole pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub standings: Vec<Standing>,
}

impl Scoreboard {
    pub fn new(standings: Vec<Standing>) -> Self {
        Scoreboard {
            standings: rank(standings),
        }
    }

    /// Rows to display; inactive participants are only shown to admins.
    pub fn visible(&self, include_inactive: bool) -> impl Iterator<Item = &Standing> {
        self.standings
            .iter()
            .filter(move |s| include_inactive || s.active)
    }

    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }

    pub fn len(&self) -> usize {
        self.standings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}
