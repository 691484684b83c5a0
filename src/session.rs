//! Session - one board and one melody loop driven by the same input stream
//!
//! The front end forwards key presses here. Every gesture first gives a
//! suspended audio context a chance to resume; a flip that turned a card
//! face-up also starts music that was requested before a context existed.

use std::time::Instant;

use log::debug;

use crate::{
    audio::{AudioContext, AudioError},
    config::{GameConfig, MusicConfig},
    game::{BoardController, Selection},
    music::ToneSequencer,
    timing::earliest,
};

pub struct Session<C: AudioContext> {
    board: BoardController,
    music: ToneSequencer<C>,
}

impl<C: AudioContext> Session<C> {
    pub fn new<F>(game: GameConfig, music: MusicConfig, factory: F) -> Self
    where
        F: FnMut() -> Result<C, AudioError> + 'static,
    {
        Self {
            board: BoardController::new(game),
            music: ToneSequencer::new(music, factory),
        }
    }

    pub fn board(&self) -> &BoardController {
        &self.board
    }

    pub fn music(&self) -> &ToneSequencer<C> {
        &self.music
    }

    pub fn music_mut(&mut self) -> &mut ToneSequencer<C> {
        &mut self.music
    }

    /// Select a card. A card that actually flips also kicks deferred music.
    pub fn select(&mut self, index: usize, now: Instant) -> Selection {
        self.music.on_gesture();
        let selection = self.board.select(index, now);
        debug!("card {index} selected: {selection:?}");
        if selection.flipped() {
            self.music.on_card_flip(now);
        }
        selection
    }

    pub fn toggle_music(&mut self, now: Instant) {
        self.music.on_gesture();
        self.music.toggle_music(now);
    }

    pub fn restart(&mut self) {
        self.board.restart();
    }

    /// Apply board timers and the melody tick due by `now`.
    pub fn advance(&mut self, now: Instant) {
        self.board.advance(now);
        self.music.advance(now);
    }

    /// The next instant at which [`advance`](Self::advance) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(self.board.next_deadline(), self.music.next_deadline())
    }
}
