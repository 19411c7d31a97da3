//! Integration tests for the pool service: setup, winners, picks, scoreboard.

use chrono::{Duration, TimeZone, Utc};

use madness_core::{
    BracketError, BracketStore, Entrant, EntrantId, Game, MemoryStore, Participant, Picks, Pool,
    PoolConfig, Result, WinnerUpdate, GAME_COUNT,
};

fn entrants() -> Vec<Entrant> {
    (1..=64u32)
        .map(|id| Entrant::new(id, ((id - 1) % 16) as u8, format!("Home{}", id), format!("Team{}", id)))
        .collect()
}

fn config() -> PoolConfig {
    PoolConfig::new("Test Pool", Utc.with_ymd_and_hms(2026, 3, 19, 16, 0, 0).unwrap())
}

fn pool_with(participants: Vec<Participant>) -> Pool<MemoryStore> {
    let mut pool = Pool::new(MemoryStore::with_participants(participants), config());
    pool.setup(entrants()).unwrap();
    pool
}

fn win(game_id: u32, entrant: u32) -> WinnerUpdate {
    WinnerUpdate::new(game_id, Some(EntrantId(entrant)))
}

#[test]
fn setup_saves_full_bracket() {
    let pool = pool_with(vec![]);
    assert_eq!(pool.store().load_games().unwrap().len(), GAME_COUNT);
    assert_eq!(pool.store().load_entrants().unwrap().len(), 64);
    assert_eq!(pool.bracket().unwrap().decided_count(), 0);
}

#[test]
fn setup_rejects_short_field() {
    let mut pool = Pool::new(MemoryStore::new(), config());
    let err = pool.setup(entrants()[..60].to_vec()).unwrap_err();
    assert!(matches!(err, BracketError::WrongEntrantCount { actual: 60, .. }));
    assert!(pool.store().load_games().unwrap().is_empty());
}

#[test]
fn setup_rejects_repeated_entrant() {
    let mut pool = Pool::new(MemoryStore::new(), config());
    let mut field = entrants();
    field[63] = Entrant::new(1, 15, "Again", "Again");
    let err = pool.setup(field).unwrap_err();
    assert!(matches!(err, BracketError::DuplicateEntrant(EntrantId(1))));
    assert!(pool.store().load_entrants().unwrap().is_empty());
    assert!(pool.store().load_games().unwrap().is_empty());
}

/// Store whose game writes fail once it is frozen.
struct FrozenStore {
    inner: MemoryStore,
    frozen: bool,
}

impl BracketStore for FrozenStore {
    fn load_entrants(&self) -> Result<Vec<Entrant>> {
        self.inner.load_entrants()
    }

    fn load_games(&self) -> Result<Vec<Game>> {
        self.inner.load_games()
    }

    fn load_participants(&self) -> Result<Vec<Participant>> {
        self.inner.load_participants()
    }

    fn save_entrants(&mut self, entrants: &[Entrant]) -> Result<()> {
        self.inner.save_entrants(entrants)
    }

    fn save_games(&mut self, games: &[Game]) -> Result<()> {
        if self.frozen {
            return Err(BracketError::Store("games table is read-only".to_string()));
        }
        self.inner.save_games(games)
    }

    fn save_picks(&mut self, participant_id: u32, picks: &Picks) -> Result<()> {
        self.inner.save_picks(participant_id, picks)
    }
}

#[test]
fn record_winners_surfaces_store_failure() {
    let store = FrozenStore {
        inner: MemoryStore::new(),
        frozen: false,
    };
    let mut pool = Pool::new(store, config());
    pool.setup(entrants()).unwrap();

    let mut store = pool.into_store();
    store.frozen = true;
    let mut pool = Pool::new(store, config());

    let err = pool.record_winners(&[win(1, 1)]).unwrap_err();
    assert!(matches!(err, BracketError::Store(_)));
    assert_eq!(pool.bracket().unwrap().decided_count(), 0);
}

#[test]
fn record_winners_across_rounds() {
    let mut pool = pool_with(vec![]);

    // Game ids are flat index + 1; game 33 is index 32, fed by games 1 and 2
    let report = pool.record_winners(&[win(1, 1), win(2, 3), win(33, 3)]).unwrap();
    assert!(report.is_clean());

    let bracket = pool.bracket().unwrap();
    assert_eq!(bracket.game(32).unwrap().winner, Some(EntrantId(3)));

    // Changing an earlier round drops the stale later winner
    let report = pool.record_winners(&[win(2, 4)]).unwrap();
    assert_eq!(report.reset, vec![32]);
    let bracket = pool.bracket().unwrap();
    assert_eq!(bracket.game(32).unwrap().slot_b, Some(EntrantId(4)));
    assert_eq!(bracket.game(32).unwrap().winner, None);
}

#[test]
fn invalid_batch_leaves_store_untouched() {
    let mut pool = pool_with(vec![]);
    pool.record_winners(&[win(1, 1)]).unwrap();
    let before = pool.store().load_games().unwrap();

    let err = pool.record_winners(&[win(2, 3), win(500, 3)]).unwrap_err();
    assert!(matches!(err, BracketError::UnknownGame(500)));
    assert_eq!(pool.store().load_games().unwrap(), before);
}

#[test]
fn picks_locked_after_cutoff() {
    let mut pool = pool_with(vec![Participant::new(1, "Ann", Picks::empty())]);
    let cutoff = pool.config().cutoff;
    let picks = Picks::ranked([EntrantId(1), EntrantId(2)]).unwrap();

    pool.set_picks(1, picks.clone(), cutoff - Duration::hours(1), false).unwrap();

    let err = pool.set_picks(1, picks.clone(), cutoff, false).unwrap_err();
    assert!(matches!(err, BracketError::PicksLocked(_)));

    // Administrators may still edit
    pool.set_picks(1, picks, cutoff + Duration::days(1), true).unwrap();
}

#[test]
fn duplicate_picks_rejected() {
    let mut pool = pool_with(vec![Participant::new(1, "Ann", Picks::empty())]);
    let cutoff = pool.config().cutoff;
    let picks = Picks::ranked([EntrantId(7), EntrantId(7)]).unwrap();
    let err = pool.set_picks(1, picks, cutoff - Duration::hours(1), false).unwrap_err();
    assert!(matches!(err, BracketError::DuplicatePick(EntrantId(7))));
}

#[test]
fn scoreboard_ranks_by_total_then_potential() {
    let participants = vec![
        // Picked the loser of game 1: nothing earned, 19 from entrant 3
        Participant::new(1, "Ann", Picks::ranked([EntrantId(2), EntrantId(3)]).unwrap()),
        // Picked the winner of game 1 in the top slot
        Participant::new(2, "Bob", Picks::ranked([EntrantId(1)]).unwrap()),
        // Same realized score as Ann but more still alive
        Participant::new(3, "Cy", Picks::ranked([EntrantId(5), EntrantId(9)]).unwrap()),
        // No picks loaded
        Participant::new(4, "Dee", Picks::empty()),
    ];
    let mut pool = pool_with(participants);
    pool.record_winners(&[win(1, 1)]).unwrap();

    let board = pool.scoreboard().unwrap();
    let order: Vec<u32> = board.standings.iter().map(|s| s.participant_id).collect();
    assert_eq!(order, vec![2, 3, 1, 4]);

    let bob = &board.standings[0].result;
    assert_eq!(bob.round_scores[0], 20);
    assert_eq!(bob.total_score, 20);
    assert_eq!(bob.potential_score, 120);

    let dee = &board.standings[3].result;
    assert_eq!((dee.total_score, dee.potential_score), (0, 0));
}

#[test]
fn score_single_participant() {
    let mut pool = pool_with(vec![Participant::new(1, "Ann", Picks::ranked([EntrantId(1)]).unwrap())]);
    pool.record_winners(&[win(1, 1)]).unwrap();

    let result = pool.score_participant(1).unwrap();
    assert_eq!(result.total_score, 20);
    assert!(matches!(pool.score_participant(9), Err(BracketError::UnknownParticipant(9))));
}

#[test]
fn champion_pick_earns_final_round() {
    let mut pool = pool_with(vec![Participant::new(1, "Ann", Picks::ranked([EntrantId(1)]).unwrap())]);

    // Entrant 1 wins out; every other game goes to slot A, filled round by round
    for index in 0..GAME_COUNT {
        let game = pool.bracket().unwrap().game(index).unwrap().clone();
        let winner = game.slot_a.unwrap();
        pool.record_winners(&[WinnerUpdate::new(game.id, Some(winner))]).unwrap();
    }

    let bracket = pool.bracket().unwrap();
    assert_eq!(bracket.champion(), Some(EntrantId(1)));

    let result = pool.score_participant(1).unwrap();
    assert_eq!(result.round_scores[5], 20);
    assert_eq!(result.total_score, 120);
    assert_eq!(result.potential_score, 120);
}
