use crate::bracket::Game;
use crate::entrant::Entrant;
use crate::error::{BracketError, Result};
use crate::picks::Picks;
use crate::ranking::Participant;

/// Persistence collaborator for a pool.
///
/// `save_games` must store all 63 games as one unit: either every game is
/// written or none is.
pub trait BracketStore {
    fn load_entrants(&self) -> Result<Vec<Entrant>>;

    fn load_games(&self) -> Result<Vec<Game>>;

    fn load_participants(&self) -> Result<Vec<Participant>>;

    fn save_entrants(&mut self, entrants: &[Entrant]) -> Result<()>;

    fn save_games(&mut self, games: &[Game]) -> Result<()>;

    fn save_picks(&mut self, participant_id: u32, picks: &Picks) -> Result<()>;
}

/// In-memory store, replaced wholesale on every save.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entrants: Vec<Entrant>,
    games: Vec<Game>,
    participants: Vec<Participant>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_participants(participants: Vec<Participant>) -> Self {
        MemoryStore {
            participants,
            ..MemoryStore::default()
        }
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
    }
}

impl BracketStore for MemoryStore {
    fn load_entrants(&self) -> Result<Vec<Entrant>> {
        Ok(self.entrants.clone())
    }

    fn load_games(&self) -> Result<Vec<Game>> {
        Ok(self.games.clone())
    }

    fn load_participants(&self) -> Result<Vec<Participant>> {
        Ok(self.participants.clone())
    }

    fn save_entrants(&mut self, entrants: &[Entrant]) -> Result<()> {
        self.entrants = entrants.to_vec();
        Ok(())
    }

    fn save_games(&mut self, games: &[Game]) -> Result<()> {
        self.games = games.to_vec();
        Ok(())
    }

    fn save_picks(&mut self, participant_id: u32, picks: &Picks) -> Result<()> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == participant_id)
            .ok_or(BracketError::UnknownParticipant(participant_id))?;
        participant.picks = picks.clone();
        Ok(())
    }
}
