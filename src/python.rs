//! Python bindings.
//!
//! Games cross the boundary as plain records with entrant ids as integers
//! and `None` for unknown.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bracket::{self, Bracket, Game};
use crate::entrant::EntrantId;
use crate::error::BracketError;
use crate::picks::Picks;
use crate::ranking::{rank, Standing};
use crate::scoring::{self, ScoreResult};

impl From<BracketError> for PyErr {
    fn from(err: BracketError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// One bracket game as seen from Python.
#[pyclass(name = "Game")]
#[derive(Clone, Debug)]
pub struct PyGame {
    #[pyo3(get, set)]
    pub id: u32,

    #[pyo3(get, set)]
    pub round: usize,

    #[pyo3(get, set)]
    pub position: usize,

    #[pyo3(get, set)]
    pub slot_a: Option<u32>,

    #[pyo3(get, set)]
    pub slot_b: Option<u32>,

    #[pyo3(get, set)]
    pub winner: Option<u32>,
}

#[pymethods]
impl PyGame {
    #[new]
    #[pyo3(signature = (id, round, position, slot_a = None, slot_b = None, winner = None))]
    pub fn new(
        id: u32,
        round: usize,
        position: usize,
        slot_a: Option<u32>,
        slot_b: Option<u32>,
        winner: Option<u32>,
    ) -> Self {
        PyGame {
            id,
            round,
            position,
            slot_a,
            slot_b,
            winner,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(id={}, round={}, position={}, slot_a={:?}, slot_b={:?}, winner={:?})",
            self.id, self.round, self.position, self.slot_a, self.slot_b, self.winner
        )
    }
}

impl From<&Game> for PyGame {
    fn from(game: &Game) -> Self {
        PyGame {
            id: game.id,
            round: game.round,
            position: game.position,
            slot_a: game.slot_a.map(|e| e.0),
            slot_b: game.slot_b.map(|e| e.0),
            winner: game.winner.map(|e| e.0),
        }
    }
}

impl From<PyGame> for Game {
    fn from(game: PyGame) -> Self {
        Game {
            id: game.id,
            round: game.round,
            position: game.position,
            slot_a: game.slot_a.map(EntrantId),
            slot_b: game.slot_b.map(EntrantId),
            winner: game.winner.map(EntrantId),
        }
    }
}

/// Scores for one participant.
#[pyclass(name = "ScoreResult")]
#[derive(Clone, Debug)]
pub struct PyScoreResult {
    #[pyo3(get)]
    pub round_scores: Vec<u32>,

    #[pyo3(get)]
    pub total_score: u32,

    #[pyo3(get)]
    pub potential_score: u32,
}

#[pymethods]
impl PyScoreResult {
    fn __repr__(&self) -> String {
        format!(
            "ScoreResult(round_scores={:?}, total_score={}, potential_score={})",
            self.round_scores, self.total_score, self.potential_score
        )
    }
}

impl From<ScoreResult> for PyScoreResult {
    fn from(result: ScoreResult) -> Self {
        PyScoreResult {
            round_scores: result.round_scores.to_vec(),
            total_score: result.total_score,
            potential_score: result.potential_score,
        }
    }
}

fn to_bracket(games: Vec<PyGame>) -> Result<Bracket, BracketError> {
    Bracket::from_games(games.into_iter().map(Game::from).collect())
}

#[pyfunction]
#[pyo3(name = "child_indices")]
pub fn py_child_indices(index: usize) -> PyResult<(usize, usize)> {
    Ok(bracket::child_indices(index)?)
}

#[pyfunction]
#[pyo3(name = "round_of")]
pub fn py_round_of(index: usize) -> PyResult<usize> {
    Ok(bracket::round_of(index)?)
}

/// Reconcile a full set of 63 games.
///
/// Returns the reconciled games in bracket order and the number of winners
/// that were reset.
#[pyfunction]
#[pyo3(name = "reconcile")]
pub fn py_reconcile(games: Vec<PyGame>) -> PyResult<(Vec<PyGame>, usize)> {
    let (bracket, report) = crate::reconcile::reconciled(to_bracket(games)?);
    let games = bracket.games().iter().map(PyGame::from).collect();
    Ok((games, report.reset_count()))
}

/// Score a participant's ranked picks (entrant ids, `None` for no pick).
#[pyfunction]
#[pyo3(name = "score")]
pub fn py_score(games: Vec<PyGame>, picks: Vec<Option<u32>>) -> PyResult<PyScoreResult> {
    let bracket = to_bracket(games)?;
    let picks = Picks::new(picks.into_iter().map(|p| p.map(EntrantId)).collect())?;
    Ok(scoring::score(&bracket, &picks).into())
}

/// Rank `(participant_id, result)` pairs, returning participant ids in
/// scoreboard order.
#[pyfunction]
#[pyo3(name = "rank")]
pub fn py_rank(results: Vec<(u32, PyScoreResult)>) -> Vec<u32> {
    let standings = results
        .into_iter()
        .map(|(id, result)| Standing {
            participant_id: id,
            name: String::new(),
            active: true,
            result: ScoreResult {
                round_scores: Default::default(),
                total_score: result.total_score,
                potential_score: result.potential_score,
            },
        })
        .collect();
    rank(standings).into_iter().map(|s| s.participant_id).collect()
}
