use thiserror::Error;

use crate::entrant::EntrantId;

/// Errors raised at the validation boundaries of the crate.
///
/// Reconciliation and scoring never fail; anything that reaches them has
/// already been checked here.
#[derive(Debug, Error)]
pub enum BracketError {
    #[error("expected {expected} games, got {actual}")]
    WrongGameCount { expected: usize, actual: usize },

    #[error("game at index {index} is round {round}, position {position}")]
    GameOutOfPlace {
        index: usize,
        round: usize,
        position: usize,
    },

    #[error("game id {0} appears more than once")]
    DuplicateGame(u32),

    #[error("game index {0} is a first-round game and has no children")]
    NotAParent(usize),

    #[error("game index {0} is outside the bracket")]
    IndexOutOfRange(usize),

    #[error("expected {expected} entrants, got {actual}")]
    WrongEntrantCount { expected: usize, actual: usize },

    #[error("entrant {0} is seeded more than once")]
    DuplicateEntrant(EntrantId),

    #[error("unknown entrant {0}")]
    UnknownEntrant(EntrantId),

    #[error("unknown game id {0}")]
    UnknownGame(u32),

    #[error("at most {max} picks allowed, got {actual}")]
    TooManyPicks { max: usize, actual: usize },

    #[error("entrant {0} is picked more than once")]
    DuplicatePick(EntrantId),

    #[error("unknown participant {0}")]
    UnknownParticipant(u32),

    #[error("picks are locked since {0}")]
    PicksLocked(chrono::DateTime<chrono::Utc>),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// For `BracketStore` implementations backed by real storage.
    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BracketError>;
