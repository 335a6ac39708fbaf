//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{Card, SpiderConfig, SuitCount};
use crate::engine::Solitaire;

/// Cards cross the boundary as `(suit, rank)` with suit in `0..4`.
fn card_tuple(card: Card) -> (u8, u8) {
    (card.suit as u8, card.rank.value())
}

/// Python wrapper for the engine.
#[pyclass(name = "Spider")]
pub struct PySpider {
    game: Solitaire,
}

#[pymethods]
impl PySpider {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - suits: 1, 2 or 4
    /// - seed: RNG seed; random when omitted
    /// - scoring: track score and movement count
    #[new]
    #[pyo3(signature = (suits = 1, seed = None, scoring = true))]
    fn new(suits: u8, seed: Option<u64>, scoring: bool) -> PyResult<Self> {
        let suits = SuitCount::try_from(suits).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let mut config = SpiderConfig::new(suits);
        config.seed = seed;
        config.scoring = scoring;
        Ok(Self {
            game: Solitaire::new(config),
        })
    }

    fn hold(&mut self, pile: usize, index: usize) -> bool {
        self.game.hold(pile, index)
    }

    fn put(&mut self, dest: usize, src: usize) -> bool {
        self.game.put(dest, src)
    }

    fn deal(&mut self) -> bool {
        self.game.deal()
    }

    fn undo(&mut self) -> bool {
        self.game.undo()
    }

    /// Deal a fresh game with the same variant.
    fn restart(&mut self) {
        self.game.restart();
    }

    fn remaining_heaps(&self) -> usize {
        self.game.remaining_heaps()
    }

    fn has_vacancies(&self) -> bool {
        self.game.has_vacancies()
    }

    fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// Cards of one pile, bottom first.
    fn pile(&self, index: usize) -> PyResult<Vec<(u8, u8)>> {
        let pile = self
            .game
            .pile(index)
            .ok_or_else(|| PyValueError::new_err(format!("no pile {}", index)))?;
        Ok(pile.cards().iter().copied().map(card_tuple).collect())
    }

    /// Index of the topmost face-down card of one pile (-1 if none).
    fn visible_index(&self, index: usize) -> PyResult<isize> {
        self.game
            .pile(index)
            .map(|pile| pile.visible_index())
            .ok_or_else(|| PyValueError::new_err(format!("no pile {}", index)))
    }

    /// The held run, empty when nothing is held.
    fn held(&self) -> Vec<(u8, u8)> {
        self.game
            .held()
            .map(|held| held.cards().iter().copied().map(card_tuple).collect())
            .unwrap_or_default()
    }

    #[getter]
    fn stock_size(&self) -> usize {
        self.game.stock_len()
    }

    #[getter]
    fn completed_count(&self) -> u8 {
        self.game.completed_count()
    }

    #[getter]
    fn score(&self) -> i32 {
        self.game.score()
    }

    #[getter]
    fn movement_count(&self) -> i32 {
        self.game.movement_count()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.game.seed()
    }

    /// Current undoable state, bincode-encoded.
    fn snapshot_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .game
            .snapshot()
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __repr__(&self) -> String {
        format!(
            "Spider(suits={}, completed={}, score={}, heaps={})",
            self.game.config().suits.count(),
            self.game.completed_count(),
            self.game.score(),
            self.game.remaining_heaps()
        )
    }
}
