//! Memory-matching board: cards, shuffling, and the controller that turns
//! card selections into moves, matches, and a win.
//!
//! The controller owns all game state. Delays (match resolution, the elapsed
//! clock) are deadlines driven by [`BoardController::advance`], so the whole
//! module runs on the caller's thread without sleeping.

/// Symbols and the per-card face/match state.
pub mod card;
/// Selection handling, resolution timers, and win detection.
pub mod controller;
/// Fisher-Yates shuffle over any slice.
pub mod shuffle;
/// Read-only snapshot of the board exposed to the UI.
pub mod state;

pub use card::{Card, Symbol};
pub use controller::{BoardController, IgnoreReason, Selection};
pub use state::{GameState, Phase};

/// Distinct symbols on a board.
pub const PAIR_COUNT: usize = Symbol::ALL.len();
/// Cards on a board (every symbol twice).
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// Format whole seconds as `M:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(599), "9:59");
        assert_eq!(format_time(3_600), "60:00");
    }
}
