//! Madness Core - bracket reconciliation and pick-pool scoring.
//!
//! Models a 64-team single-elimination bracket as a flat array of 63 games,
//! keeps it consistent as results are entered, and scores each pool
//! participant's ranked picks with current and best-possible totals.
//! Optional Python bindings via PyO3 behind the `python` feature.

pub mod bracket;
pub mod config;
pub mod constants;
pub mod entrant;
pub mod error;
pub mod picks;
pub mod pool;
pub mod ranking;
pub mod reconcile;
pub mod scoring;
pub mod store;

#[cfg(feature = "python")]
pub mod python;

pub use bracket::{child_indices, parent_index, quarter_of, round_of, round_range, Bracket, Game};
pub use config::PoolConfig;
pub use constants::{GAME_COUNT, LEAF_COUNT, PICK_SLOTS, REGION_NAMES, ROUND_COUNT, ROUND_NAMES};
pub use entrant::{Entrant, EntrantId};
pub use error::{BracketError, Result};
pub use picks::Picks;
pub use pool::Pool;
pub use ranking::{rank, Participant, Scoreboard, Standing};
pub use reconcile::{apply_winners, reconcile, reconciled, ReconcileReport, WinnerUpdate};
pub use scoring::{potentials, score, score_all, ScoreResult};
pub use store::{BracketStore, MemoryStore};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn madness_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PyGame>()?;
    m.add_class::<python::PyScoreResult>()?;

    // Functions
    m.add_function(wrap_pyfunction!(python::py_child_indices, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_round_of, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_reconcile, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_score, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_rank, m)?)?;

    // Constants
    m.add("GAME_COUNT", GAME_COUNT)?;
    m.add("PICK_SLOTS", PICK_SLOTS)?;
    m.add("ROUND_NAMES", ROUND_NAMES.to_vec())?;
    m.add("REGION_NAMES", REGION_NAMES.to_vec())?;

    Ok(())
}
