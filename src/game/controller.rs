//! Board controller - selection handling and match resolution
//!
//! A round is two selections:
//!
//! ```text
//!   Idle ──select──▶ FirstSelected ──select──▶ Resolving ──delay──▶ Idle
//!                                                   │
//!                                      6th pair ────┴──▶ AllMatched
//! ```
//!
//! Selecting while `Resolving`, or selecting a card that is already face-up,
//! does nothing. Resolutions are deadlines, not sleeps: the second selection
//! queues one and [`BoardController::advance`] applies it once due. Each queued
//! resolution remembers the board generation it belongs to, so a restart in the
//! middle of a resolution cannot reach into the new board.

use std::time::Instant;

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    card::{Card, Symbol},
    format_time,
    shuffle::shuffle,
    state::GameState,
};
use crate::{config::GameConfig, timing::Interval};

const WELCOME_MESSAGE: &str = "Good luck - pick any two cards to begin.";
const RETRY_MESSAGE: &str = "Not a match - try again.";

/// Why a selection was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A resolution is in flight
    Locked,
    /// The card is already showing (pending or matched)
    FaceUp,
    /// Repeat selection of the pending first card
    SameCard,
    /// Index is not on the board
    OutOfRange,
}

/// What a call to [`BoardController::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Ignored(IgnoreReason),
    /// Card flipped and recorded as the first of the round
    First,
    /// Second card matched the first
    Matched(Symbol),
    /// Second card did not match; both flip back after the delay
    Mismatched,
}

impl Selection {
    /// True when the selection turned a card face-up.
    pub fn flipped(self) -> bool {
        !matches!(self, Selection::Ignored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Match,
    Mismatch,
}

/// A delayed outcome waiting to be applied.
#[derive(Debug, Clone, Copy)]
struct Resolution {
    due: Instant,
    generation: u64,
    outcome: Outcome,
}

/// Owns the board, its counters, and the timers that drive them.
pub struct BoardController {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    /// Elapsed-time clock
    clock: Interval,
    /// Pending resolutions ordered by due time
    resolutions: Vec<Resolution>,
}

impl BoardController {
    /// Create a controller with a freshly shuffled board.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let clock = Interval::new(config.clock_period);

        let mut controller = Self {
            config,
            rng,
            state: GameState::new(Vec::new(), 0, WELCOME_MESSAGE),
            clock,
            resolutions: Vec::new(),
        };
        controller.build_board();
        controller
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Deal a new shuffled board and zero every counter.
    ///
    /// Resolutions already queued are left in place; they belong to the old
    /// generation and are discarded when they come due.
    pub fn build_board(&mut self) {
        let mut cards: Vec<Card> = Symbol::ALL
            .iter()
            .chain(Symbol::ALL.iter())
            .map(|&symbol| Card::new(symbol))
            .collect();
        shuffle(&mut cards, &mut self.rng);

        self.clock.stop();
        let generation = self.state.generation.wrapping_add(1);
        self.state = GameState::new(cards, generation, WELCOME_MESSAGE);

        info!("dealt board generation {generation}");
    }

    /// Start over with a new board.
    pub fn restart(&mut self) {
        self.build_board();
    }

    /// Handle a player selecting the card at `index`.
    pub fn select(&mut self, index: usize, now: Instant) -> Selection {
        let Some(card) = self.state.cards.get(index) else {
            warn!("ignoring selection of card {index}: not on the board");
            return Selection::Ignored(IgnoreReason::OutOfRange);
        };
        if self.state.locked {
            return Selection::Ignored(IgnoreReason::Locked);
        }
        if card.is_flipped() {
            return Selection::Ignored(IgnoreReason::FaceUp);
        }

        self.clock.start(now);
        self.state.cards[index].flip();

        let Some(first) = self.state.first else {
            self.state.first = Some(index);
            return Selection::First;
        };
        if first == index {
            return Selection::Ignored(IgnoreReason::SameCard);
        }

        self.state.second = Some(index);
        self.state.moves += 1;
        self.state.locked = true;

        let symbol = self.state.cards[first].symbol();
        if symbol == self.state.cards[index].symbol() {
            self.state.cards[first].mark_matched();
            self.state.cards[index].mark_matched();
            self.state.pairs += 1;
            self.state.message = format!("Nice! You found a match ({symbol}).");
            self.schedule(Outcome::Match, now + self.config.match_delay);
            debug!("pair {} of {}: {symbol}", self.state.pairs, super::PAIR_COUNT);
            Selection::Matched(symbol)
        } else {
            self.state.message = RETRY_MESSAGE.to_string();
            self.schedule(Outcome::Mismatch, now + self.config.mismatch_delay);
            Selection::Mismatched
        }
    }

    /// Apply every clock tick and resolution due by `now`, in time order.
    pub fn advance(&mut self, now: Instant) {
        loop {
            let tick_due = self.clock.next_due().filter(|&due| due <= now);
            let resolution_due = self
                .resolutions
                .first()
                .map(|r| r.due)
                .filter(|&due| due <= now);

            match (tick_due, resolution_due) {
                (None, None) => break,
                (Some(tick), Some(resolution)) if resolution <= tick => self.resolve_next(),
                (Some(tick), _) => {
                    self.clock.poll(tick);
                    self.state.seconds += 1;
                }
                (None, Some(_)) => self.resolve_next(),
            }
        }
    }

    /// The next instant at which [`advance`](Self::advance) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        crate::timing::earliest(self.clock.next_due(), self.resolutions.first().map(|r| r.due))
    }

    /// Whether the elapsed-time clock is running.
    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Queue the outcome for the pending pair. The board stays locked until
    /// it fires, so the pair is still pending then unless a restart dropped it.
    fn schedule(&mut self, outcome: Outcome, due: Instant) {
        let resolution = Resolution {
            due,
            generation: self.state.generation,
            outcome,
        };
        let at = self.resolutions.partition_point(|r| r.due <= due);
        self.resolutions.insert(at, resolution);
    }

    fn resolve_next(&mut self) {
        if self.resolutions.is_empty() {
            return;
        }
        let resolution = self.resolutions.remove(0);

        if resolution.generation != self.state.generation {
            debug!(
                "dropping resolution from board generation {} (now {})",
                resolution.generation, self.state.generation
            );
            return;
        }

        match resolution.outcome {
            Outcome::Match => {
                self.state.clear_selection();
                if self.state.all_pairs_found() {
                    self.on_win();
                }
            }
            Outcome::Mismatch => {
                let pending = [self.state.first, self.state.second];
                for index in pending.into_iter().flatten() {
                    self.state.cards[index].hide();
                }
                self.state.clear_selection();
            }
        }
    }

    fn on_win(&mut self) {
        self.clock.stop();
        self.state.won = true;
        let elapsed = format_time(self.state.seconds);
        self.state.message = format!(
            "You matched all pairs in {} moves and {elapsed} - well done!",
            self.state.moves
        );
        info!("board won in {} moves, {elapsed}", self.state.moves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Phase, CARD_COUNT, PAIR_COUNT};
    use std::collections::HashMap;
    use std::time::Duration;

    fn controller() -> BoardController {
        BoardController::new(GameConfig::new().seed(42))
    }

    /// Indices of both cards for every symbol.
    fn pairs_of(state: &GameState) -> Vec<(usize, usize)> {
        let mut seen: HashMap<Symbol, usize> = HashMap::new();
        let mut pairs = Vec::new();
        for (i, card) in state.cards().iter().enumerate() {
            if let Some(j) = seen.insert(card.symbol(), i) {
                pairs.push((j, i));
            }
        }
        pairs
    }

    fn mismatched_pair(state: &GameState) -> (usize, usize) {
        let first = state.cards()[0].symbol();
        let other = state
            .cards()
            .iter()
            .position(|c| c.symbol() != first)
            .expect("board holds more than one symbol");
        (0, other)
    }

    #[test]
    fn board_holds_every_symbol_twice() {
        let board = controller();
        let state = board.state();
        assert_eq!(state.cards().len(), CARD_COUNT);
        for symbol in Symbol::ALL {
            let count = state.cards().iter().filter(|c| c.symbol() == symbol).count();
            assert_eq!(count, 2, "{symbol:?} should appear twice");
        }
        assert_eq!(state.moves(), 0);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.message(), WELCOME_MESSAGE);
    }

    #[test]
    fn first_selection_starts_clock_without_counting_a_move() {
        let mut board = controller();
        let now = Instant::now();

        assert_eq!(board.select(3, now), Selection::First);
        assert!(board.clock_running());
        assert_eq!(board.state().moves(), 0);
        assert_eq!(board.state().phase(), Phase::FirstSelected);
    }

    #[test]
    fn reselecting_first_card_is_ignored() {
        let mut board = controller();
        let now = Instant::now();

        board.select(3, now);
        assert_eq!(board.select(3, now), Selection::Ignored(IgnoreReason::FaceUp));
        assert_eq!(board.state().moves(), 0);
        assert!(!board.state().is_locked());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut board = controller();
        assert_eq!(
            board.select(CARD_COUNT, Instant::now()),
            Selection::Ignored(IgnoreReason::OutOfRange)
        );
        assert!(!board.clock_running());
    }

    #[test]
    fn match_unlocks_after_match_delay() {
        let mut board = controller();
        let (a, b) = pairs_of(board.state())[0];
        let now = Instant::now();

        board.select(a, now);
        let selection = board.select(b, now);
        assert!(matches!(selection, Selection::Matched(_)));
        assert!(board.state().is_locked());
        assert_eq!(board.state().moves(), 1);
        assert_eq!(board.state().pairs(), 1);
        assert!(board.state().message().starts_with("Nice!"));

        board.advance(now + Duration::from_millis(499));
        assert!(board.state().is_locked());

        board.advance(now + Duration::from_millis(500));
        assert!(!board.state().is_locked());
        assert!(board.state().card(a).is_some_and(Card::is_matched));
        assert!(board.state().card(b).is_some_and(Card::is_matched));
        assert_eq!(board.state().card(a).map(Card::label), Some("Matched card"));
    }

    #[test]
    fn mismatch_flips_cards_back() {
        let mut board = controller();
        let (a, b) = mismatched_pair(board.state());
        let now = Instant::now();

        board.select(a, now);
        assert_eq!(board.select(b, now), Selection::Mismatched);
        assert_eq!(board.state().message(), RETRY_MESSAGE);

        // input stays locked for the whole delay
        let other = (0..CARD_COUNT).find(|&i| i != a && i != b).unwrap_or(0);
        assert_eq!(
            board.select(other, now + Duration::from_millis(100)),
            Selection::Ignored(IgnoreReason::Locked)
        );

        board.advance(now + Duration::from_millis(700));
        let state = board.state();
        assert!(!state.is_locked());
        assert!(!state.cards()[a].is_flipped());
        assert!(!state.cards()[b].is_flipped());
        assert_eq!(state.moves(), 1);
        assert_eq!(state.pairs(), 0);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn clock_counts_seconds_until_win() {
        let mut board = controller();
        let start = Instant::now();
        let mut now = start;

        for (a, b) in pairs_of(board.state()) {
            board.select(a, now);
            board.select(b, now);
            now += Duration::from_secs(5);
            board.advance(now);
        }

        let state = board.state();
        assert!(state.is_won());
        assert_eq!(state.phase(), Phase::AllMatched);
        assert_eq!(state.pairs(), PAIR_COUNT);
        assert!(!board.clock_running());
        // last pair resolves at 25.5s, before the 26th tick
        assert_eq!(state.seconds(), 25);
        assert_eq!(
            state.message(),
            "You matched all pairs in 6 moves and 0:25 - well done!"
        );

        // the stopped clock does not move any more
        board.advance(now + Duration::from_secs(60));
        assert_eq!(board.state().seconds(), 25);
    }

    #[test]
    fn ticks_before_the_winning_resolution_still_count() {
        let mut board = controller();
        let start = Instant::now();
        let pairs = pairs_of(board.state());

        for &(a, b) in &pairs[..PAIR_COUNT - 1] {
            board.select(a, start);
            board.select(b, start);
            board.advance(start + Duration::from_millis(500));
        }
        let (a, b) = pairs[PAIR_COUNT - 1];
        let last = start + Duration::from_millis(2_800);
        board.select(a, last);
        board.select(b, last);

        // one advance spanning the win: ticks at 1s, 2s, 3s; win at 3.3s
        board.advance(start + Duration::from_secs(10));
        assert!(board.state().is_won());
        assert_eq!(board.state().seconds(), 3);
    }

    #[test]
    fn restart_mid_resolution_leaves_new_board_alone() {
        let mut board = controller();
        let (a, b) = mismatched_pair(board.state());
        let now = Instant::now();

        board.select(a, now);
        board.select(b, now);
        board.restart();
        assert_eq!(board.state().generation(), 2);
        assert!(!board.state().is_locked());
        assert!(!board.clock_running());

        let later = now + Duration::from_millis(100);
        assert_eq!(board.select(a, later), Selection::First);

        // the stale mismatch fires here and must not hide the new first card
        board.advance(now + Duration::from_millis(700));
        assert!(board.state().cards()[a].is_flipped());
        assert_eq!(board.state().first(), Some(a));
    }

    #[test]
    fn restart_zeroes_counters() {
        let mut board = controller();
        let (a, b) = pairs_of(board.state())[0];
        let now = Instant::now();
        board.select(a, now);
        board.select(b, now);
        board.advance(now + Duration::from_secs(3));
        assert_eq!(board.state().seconds(), 3);

        board.restart();
        let state = board.state();
        assert_eq!(state.moves(), 0);
        assert_eq!(state.pairs(), 0);
        assert_eq!(state.seconds(), 0);
        assert_eq!(state.elapsed(), "0:00");
        assert!(state.cards().iter().all(|c| !c.is_flipped() && !c.is_matched()));
        assert_eq!(state.cards().len(), CARD_COUNT);
    }

    #[test]
    fn next_deadline_tracks_clock_and_resolutions() {
        let mut board = controller();
        assert_eq!(board.next_deadline(), None);

        let (a, b) = mismatched_pair(board.state());
        let now = Instant::now();
        board.select(a, now);
        assert_eq!(board.next_deadline(), Some(now + Duration::from_secs(1)));

        board.select(b, now);
        assert_eq!(board.next_deadline(), Some(now + Duration::from_millis(700)));
    }
}
