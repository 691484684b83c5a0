//! App - owns the game session and runs the event loop
//!
//! Everything happens on this thread. Each pass applies the timers that have
//! come due, redraws, then waits for input no longer than the next deadline.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use pairs::{audio::DeviceContext, game::CARD_COUNT, session::Session, GameConfig, MusicConfig};

use super::ui::{self, View};

/// Cards per row on screen
pub const GRID_COLUMNS: usize = 4;
/// Longest wait for input, so the screen stays fresh without deadlines
const UI_REFRESH: Duration = Duration::from_millis(250);

pub struct App {
    session: Session<DeviceContext>,
    /// Index of the highlighted card
    cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new(game: GameConfig, music: MusicConfig) -> Self {
        Self {
            session: Session::new(game, music, DeviceContext::open),
            cursor: 0,
            should_quit: false,
        }
    }

    /// Turn the music on as soon as the first card is flipped.
    pub fn request_music(&mut self) {
        self.session.music_mut().request_music();
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.session.advance(now);

            terminal.draw(|frame| ui::render(frame, &self.view()))?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    fn view(&self) -> View<'_> {
        View {
            state: self.session.board().state(),
            cursor: self.cursor,
            music_label: self.session.music().label(),
            music_pressed: self.session.music().pressed(),
        }
    }

    /// Time until the next timer needs servicing, capped at [`UI_REFRESH`].
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .next_deadline()
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(UI_REFRESH)
            .min(UI_REFRESH)
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.select(self.cursor, now);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.session.restart(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.session.toggle_music(now),
            _ => {}
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let rows = (CARD_COUNT / GRID_COLUMNS) as isize;
        let cols = GRID_COLUMNS as isize;
        let row = (self.cursor / GRID_COLUMNS) as isize;
        let col = (self.cursor % GRID_COLUMNS) as isize;

        let row = (row + dy).rem_euclid(rows);
        let col = (col + dx).rem_euclid(cols);
        self.cursor = (row * cols + col) as usize;
    }
}
