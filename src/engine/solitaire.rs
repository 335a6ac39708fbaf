//! The game engine: state, transitions and undo.
//!
//! `Solitaire` is a two-state machine. It is *Idle* when nothing is held
//! and *Holding* after a successful `hold`. `put` always returns it to
//! Idle, whether or not the drop was legal.
//!
//! Every successful `put` and `deal` appends a snapshot; `undo` pops back
//! to the previous one. The genesis snapshot taken at construction is the
//! floor and is never itself undone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionRecord};
use crate::core::card::{build_deck, Card};
use crate::core::config::{
    SpiderConfig, COMPLETION_BONUS, DEAL_PENALTY, INITIAL_PILE_SIZES, INITIAL_SCORE, PILE_COUNT,
};
use crate::core::error::SpiderResult;
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::GameStatus;
use crate::tableau::{Run, Sequence};

use super::snapshot::{History, Snapshot};

/// A run lifted from a pile and not yet dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Held {
    source: usize,
    cards: Run,
}

impl Held {
    /// Pile the run was lifted from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// The lifted cards, lowest position (highest rank) first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// How a `put` resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PutOutcome {
    /// Nothing was held.
    NothingHeld,
    /// The drop was illegal; the run went back to its source.
    Returned,
    /// The run was placed on the destination.
    Placed,
    /// The run was placed and completed a sequence.
    Completed,
}

impl PutOutcome {
    /// True if the run landed on the destination pile.
    #[must_use]
    pub fn is_placed(self) -> bool {
        matches!(self, PutOutcome::Placed | PutOutcome::Completed)
    }
}

/// Spider Solitaire engine.
///
/// ## Usage
///
/// ```
/// use spider_solitaire::core::{SpiderConfig, SuitCount};
/// use spider_solitaire::engine::Solitaire;
///
/// let mut game = Solitaire::new(SpiderConfig::new(SuitCount::One).with_seed(42));
/// assert_eq!(game.remaining_heaps(), 5);
///
/// assert!(game.deal());
/// assert_eq!(game.remaining_heaps(), 4);
///
/// assert!(game.undo());
/// assert_eq!(game.remaining_heaps(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Solitaire {
    config: SpiderConfig,
    rng: GameRng,
    deal_state: GameRngState,
    piles: Vec<Sequence>,
    stock: Vector<Card>,
    held: Option<Held>,
    completed: u8,
    score: i32,
    movement_count: i32,
    history: History,
    journal: Vector<ActionRecord>,
}

impl Solitaire {
    /// Shuffle and deal a new game.
    ///
    /// Piles 0-3 receive six cards and piles 4-9 five; the remaining
    /// fifty cards form the stock.
    #[must_use]
    pub fn new(config: SpiderConfig) -> Self {
        let rng = GameRng::new(config.resolve_seed());
        Self::dealt(config, rng)
    }

    /// Deal the game `state` would shuffle next.
    ///
    /// Feeding it the `deal_state` of another engine reproduces that
    /// engine's current deal, even after restarts.
    #[must_use]
    pub fn from_deal_state(config: SpiderConfig, state: &GameRngState) -> Self {
        Self::dealt(config, GameRng::from_state(state))
    }

    fn dealt(config: SpiderConfig, rng: GameRng) -> Self {
        let deal_state = rng.state();
        let mut game = Self {
            history: History::default(),
            config,
            rng,
            deal_state,
            piles: Vec::new(),
            stock: Vector::new(),
            held: None,
            completed: 0,
            score: 0,
            movement_count: 0,
            journal: Vector::new(),
        };
        game.deal_fresh();
        game
    }

    /// Build an engine whose genesis state is `snapshot`.
    ///
    /// The configured seed only affects later `restart`s.
    pub fn from_snapshot(config: SpiderConfig, snapshot: Snapshot) -> SpiderResult<Self> {
        snapshot.validate()?;
        let rng = GameRng::new(config.resolve_seed());
        let deal_state = rng.state();
        let history = History::new(snapshot.clone(), config.history_limit);
        Ok(Self {
            config,
            rng,
            deal_state,
            piles: snapshot.piles,
            stock: snapshot.stock,
            held: None,
            completed: snapshot.completed,
            score: snapshot.score,
            movement_count: 0,
            history,
            journal: Vector::new(),
        })
    }

    /// Discard the current game and deal a new one from the same RNG stream.
    ///
    /// Journaled like any other action, so replaying the journal from the
    /// seed redeals the same games.
    pub fn restart(&mut self) {
        self.apply(Action::Restart);
    }

    fn deal_fresh(&mut self) {
        let mut deck = build_deck(self.config.suits);
        self.deal_state = self.rng.state();
        self.rng.shuffle(&mut deck);

        // Cards come off the end of the shuffled deck; the first one drawn
        // for a pile lands at its bottom.
        self.piles = INITIAL_PILE_SIZES
            .iter()
            .map(|&size| {
                let mut chunk = deck.split_off(deck.len() - size);
                chunk.reverse();
                Sequence::new(chunk)
            })
            .collect();
        self.stock = deck.into_iter().collect();
        self.held = None;
        self.completed = 0;
        self.score = if self.config.scoring { INITIAL_SCORE } else { 0 };
        self.movement_count = 0;
        let genesis = self.snapshot();
        self.history = History::new(genesis, self.config.history_limit);
    }

    // === Operations ===

    /// Dispatch an action, journal it and return its boolean outcome.
    pub fn apply(&mut self, action: Action) -> bool {
        let accepted = match action {
            Action::Hold { pile, index } => self.hold_run(pile, index),
            Action::Put { dest, src } => self.put_run(dest, src) == PutOutcome::Completed,
            Action::Deal => self.deal_row(),
            Action::Undo => self.rewind(),
            Action::Restart => {
                self.deal_fresh();
                true
            }
        };
        self.record(action, accepted);
        accepted
    }

    /// Lift the run starting at `index` from `pile`.
    ///
    /// Returns false, changing nothing, if a run is already held, `pile`
    /// is out of range, or the cards from `index` are not a liftable run.
    pub fn hold(&mut self, pile: usize, index: usize) -> bool {
        self.apply(Action::Hold { pile, index })
    }

    /// Drop the held run on `dest`.
    ///
    /// Always clears the held run. If `dest` differs from `src`, `src` is
    /// where the run came from, and `dest` accepts the run's first card,
    /// the run is placed; otherwise it returns to its source unchanged.
    /// Returns true only if the placement completed a sequence.
    pub fn put(&mut self, dest: usize, src: usize) -> bool {
        self.apply(Action::Put { dest, src })
    }

    /// Like `put`, but reports exactly how the drop resolved.
    pub fn put_with_outcome(&mut self, dest: usize, src: usize) -> PutOutcome {
        let outcome = self.put_run(dest, src);
        self.record(Action::Put { dest, src }, outcome == PutOutcome::Completed);
        outcome
    }

    /// Deal one stock card onto every pile, 0 through 9.
    ///
    /// Returns false, changing nothing, while a run is held, while any
    /// pile is empty, or when the stock cannot fill a whole row.
    pub fn deal(&mut self) -> bool {
        self.apply(Action::Deal)
    }

    /// Revert to the previous snapshot and drop any held run.
    ///
    /// Returns false, changing nothing, if only the genesis snapshot
    /// remains.
    pub fn undo(&mut self) -> bool {
        self.apply(Action::Undo)
    }

    fn hold_run(&mut self, pile: usize, index: usize) -> bool {
        if self.held.is_some() {
            return false;
        }
        let Some(source) = self.piles.get_mut(pile) else {
            return false;
        };
        if !source.can_pick(index) {
            return false;
        }
        let cards = source.take_from(index);
        self.held = Some(Held { source: pile, cards });
        true
    }

    fn put_run(&mut self, dest: usize, src: usize) -> PutOutcome {
        let Some(held) = self.held.take() else {
            return PutOutcome::NothingHeld;
        };

        let accepts = held.cards.first().is_some_and(|&bottom| {
            self.piles.get(dest).is_some_and(|pile| pile.can_put(bottom))
        });
        if dest == src || src != held.source || !accepts {
            self.piles[held.source].extend(held.cards);
            return PutOutcome::Returned;
        }

        self.piles[dest].extend(held.cards);

        let completed = self.piles[dest].check_done();
        if completed {
            self.completed += 1;
            if self.config.scoring {
                self.score += COMPLETION_BONUS;
            }
        }

        for pile in &mut self.piles {
            pile.update_visibility();
        }

        if self.config.scoring {
            self.movement_count += 1;
        }
        let snapshot = self.snapshot();
        self.history.push(snapshot);

        if completed {
            PutOutcome::Completed
        } else {
            PutOutcome::Placed
        }
    }

    fn deal_row(&mut self) -> bool {
        if !self.can_deal() {
            return false;
        }
        for pile in &mut self.piles {
            if let Some(card) = self.stock.pop_back() {
                pile.push(card);
            }
        }
        if self.config.scoring {
            self.score -= DEAL_PENALTY;
            self.movement_count += 1;
        }
        let snapshot = self.snapshot();
        self.history.push(snapshot);
        true
    }

    fn rewind(&mut self) -> bool {
        let Some(snapshot) = self.history.rewind() else {
            return false;
        };
        self.piles = snapshot.piles;
        self.stock = snapshot.stock;
        self.completed = snapshot.completed;
        self.score = snapshot.score;
        self.held = None;
        if self.config.scoring {
            self.movement_count += 1;
        }
        true
    }

    fn record(&mut self, action: Action, accepted: bool) {
        let sequence = self.journal.len() as u64;
        self.journal.push_back(ActionRecord::new(action, accepted, sequence));
    }

    // === Queries ===

    /// Number of full deals left in the stock.
    #[must_use]
    pub fn remaining_heaps(&self) -> usize {
        self.stock.len() / PILE_COUNT
    }

    /// True iff any pile is empty.
    #[must_use]
    pub fn has_vacancies(&self) -> bool {
        self.piles.iter().any(Sequence::is_empty)
    }

    /// True if `deal` would succeed.
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.held.is_none() && !self.has_vacancies() && self.stock.len() >= PILE_COUNT
    }

    /// True once all eight sequences are complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status().is_won()
    }

    /// Win status derived from the completed count.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::from_completed(self.completed)
    }

    /// Capture the current undoable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            piles: self.piles.clone(),
            stock: self.stock.clone(),
            completed: self.completed,
            score: self.score,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    /// Seed of the RNG that dealt this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// All ten piles, slot order.
    #[must_use]
    pub fn piles(&self) -> &[Sequence] {
        &self.piles
    }

    /// One pile, or `None` if out of range.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Sequence> {
        self.piles.get(index)
    }

    /// Undealt cards; the next deal takes from the end.
    #[must_use]
    pub fn stock(&self) -> &Vector<Card> {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// The held run, if Holding.
    #[must_use]
    pub fn held(&self) -> Option<&Held> {
        self.held.as_ref()
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Completed sequences removed so far.
    #[must_use]
    pub fn completed_count(&self) -> u8 {
        self.completed
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Successful puts, deals and undos (scored games only).
    #[must_use]
    pub fn movement_count(&self) -> i32 {
        self.movement_count
    }

    /// Snapshots currently available to undo through.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// RNG position the current game was shuffled from.
    #[must_use]
    pub fn deal_state(&self) -> GameRngState {
        self.deal_state
    }

    /// Every action dispatched since construction, rejected ones included.
    ///
    /// Restarts are journaled rather than clearing it. The journal is not
    /// bounded by `history_limit`; it grows with every call.
    #[must_use]
    pub fn journal(&self) -> &Vector<ActionRecord> {
        &self.journal
    }
}
