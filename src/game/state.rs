use super::{card::Card, format_time, PAIR_COUNT};

/// Where the board is in a round of two selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pending selection
    Idle,
    /// One card face-up, waiting for its partner
    FirstSelected,
    /// Two cards compared, outcome not applied yet (input locked)
    Resolving,
    /// Every pair found
    AllMatched,
}

/// Everything the board controller tracks for the current game.
///
/// Invariant: at most two cards are pending (`first`, `second`), and
/// `locked` is set exactly while a resolution is in flight.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) cards: Vec<Card>,
    pub(crate) first: Option<usize>,
    pub(crate) second: Option<usize>,
    pub(crate) locked: bool,
    pub(crate) moves: u32,
    pub(crate) pairs: usize,
    pub(crate) seconds: u64,
    pub(crate) generation: u64,
    pub(crate) won: bool,
    pub(crate) message: String,
}

impl GameState {
    pub(crate) fn new(cards: Vec<Card>, generation: u64, message: impl Into<String>) -> Self {
        Self {
            cards,
            first: None,
            second: None,
            locked: false,
            moves: 0,
            pairs: 0,
            seconds: 0,
            generation,
            won: false,
            message: message.into(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The pending first selection, if any.
    pub fn first(&self) -> Option<usize> {
        self.first
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Completed two-card attempts.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Pairs found so far.
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Elapsed time as `M:SS`.
    pub fn elapsed(&self) -> String {
        format_time(self.seconds)
    }

    /// Identifier of the current board; bumps on every rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::AllMatched
        } else if self.locked {
            Phase::Resolving
        } else if self.first.is_some() {
            Phase::FirstSelected
        } else {
            Phase::Idle
        }
    }

    pub(crate) fn all_pairs_found(&self) -> bool {
        self.pairs == PAIR_COUNT
    }

    pub(crate) fn clear_selection(&mut self) {
        self.first = None;
        self.second = None;
        self.locked = false;
    }
}
