use chrono::{DateTime, Utc};
use tracing::info;

use crate::bracket::Bracket;
use crate::config::PoolConfig;
use crate::entrant::Entrant;
use crate::error::{BracketError, Result};
use crate::picks::Picks;
use crate::ranking::Scoreboard;
use crate::reconcile::{apply_winners, ReconcileReport, WinnerUpdate};
use crate::scoring::{score, score_all, ScoreResult};
use crate::store::BracketStore;

/// A prediction pool backed by a store.
///
/// Writes take `&mut self`, so winner batches are applied one at a time as
/// a single load, reconcile and save of the whole bracket.
pub struct Pool<S: BracketStore> {
    store: S,
    config: PoolConfig,
}

impl<S: BracketStore> Pool<S> {
    pub fn new(store: S, config: PoolConfig) -> Self {
        Pool { store, config }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Seed a fresh bracket from 64 entrants in bracket order.
    pub fn setup(&mut self, entrants: Vec<Entrant>) -> Result<Bracket> {
        let bracket = Bracket::seeded(&entrants)?;
        self.store.save_entrants(&entrants)?;
        self.store.save_games(bracket.games())?;
        info!(pool = %self.config.name, "bracket seeded");
        Ok(bracket)
    }

    /// Load and validate the current bracket.
    pub fn bracket(&self) -> Result<Bracket> {
        let bracket = Bracket::from_games(self.store.load_games()?)?;
        bracket.check_entrants(&self.store.load_entrants()?)?;
        Ok(bracket)
    }

    /// Apply an administrator's winners and persist the reconciled bracket.
    pub fn record_winners(&mut self, updates: &[WinnerUpdate]) -> Result<ReconcileReport> {
        let entrants = self.store.load_entrants()?;
        let mut bracket = self.bracket()?;
        let report = apply_winners(&mut bracket, updates, &entrants)?;
        self.store.save_games(bracket.games())?;

        info!(
            pool = %self.config.name,
            updates = updates.len(),
            reset = report.reset_count(),
            decided = bracket.decided_count(),
            "winners recorded"
        );
        Ok(report)
    }

    /// Replace a participant's picks.
    ///
    /// After the cutoff only an administrator may change picks.
    pub fn set_picks(&mut self, participant_id: u32, picks: Picks, now: DateTime<Utc>, admin: bool) -> Result<()> {
        if !admin && self.config.picks_locked(now) {
            return Err(BracketError::PicksLocked(self.config.cutoff));
        }
        picks.validate(&self.store.load_entrants()?)?;
        self.store.save_picks(participant_id, &picks)?;
        info!(pool = %self.config.name, participant_id, picks = picks.pick_count(), "picks saved");
        Ok(())
    }

    /// Score a single participant.
    pub fn score_participant(&self, participant_id: u32) -> Result<ScoreResult> {
        let participant = self
            .store
            .load_participants()?
            .into_iter()
            .find(|p| p.id == participant_id)
            .ok_or(BracketError::UnknownParticipant(participant_id))?;
        Ok(score(&self.bracket()?, &participant.picks))
    }

    /// Score every participant and rank them.
    pub fn scoreboard(&self) -> Result<Scoreboard> {
        let bracket = self.bracket()?;
        let participants = self.store.load_participants()?;
        let board = Scoreboard::new(score_all(&bracket, &participants));

        info!(
            pool = %self.config.name,
            participants = board.len(),
            leader = board.leader().map(|s| s.name.as_str()).unwrap_or("-"),
            "scoreboard built"
        );
        Ok(board)
    }
}
