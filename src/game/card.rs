use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label for any card that has not been matched yet (face-up or not).
pub const HIDDEN_LABEL: &str = "Hidden card";
/// Label for a card whose pair has been found.
pub const MATCHED_LABEL: &str = "Matched card";

/// The fixed card alphabet. Every board holds each symbol exactly twice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Graduate,
    Music,
    Tennis,
    Camera,
    Trophy,
    Wave,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Graduate,
        Symbol::Music,
        Symbol::Tennis,
        Symbol::Camera,
        Symbol::Trophy,
        Symbol::Wave,
    ];

    /// Glyph drawn on the card face.
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Graduate => "🎓",
            Symbol::Music => "🎵",
            Symbol::Tennis => "🎾",
            Symbol::Camera => "📷",
            Symbol::Trophy => "🏆",
            Symbol::Wave => "🌊",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One tile on the board.
///
/// A matched card stays face-up for the rest of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    symbol: Symbol,
    flipped: bool,
    matched: bool,
}

impl Card {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// The card's value, the thing pairs are compared on.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Accessible label: "Hidden card" until matched, then "Matched card".
    pub fn label(&self) -> &'static str {
        if self.matched {
            MATCHED_LABEL
        } else {
            HIDDEN_LABEL
        }
    }

    pub(crate) fn flip(&mut self) {
        self.flipped = true;
    }

    pub(crate) fn hide(&mut self) {
        self.flipped = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}
