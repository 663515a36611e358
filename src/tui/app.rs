//! Application state and logic.

use super::input;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{CellSelector, GameSession, GameStatus, Mark, Position, RandomSelector};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Main application state.
pub struct App<S = RandomSelector> {
    session: GameSession<S>,
    cursor: Position,
    think_delay: Duration,
    opponent_due: Option<Instant>,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl<S: CellSelector> App<S> {
    /// Creates a new application around a fresh session.
    pub fn new(session: GameSession<S>, think_delay: Duration) -> Self {
        Self {
            session,
            cursor: Position::Center,
            think_delay,
            opponent_due: None,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Current keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// When the pending opponent reply is due, if one is pending.
    pub fn opponent_due(&self) -> Option<Instant> {
        self.opponent_due
    }

    /// Records where the cells were drawn so clicks can be mapped back.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        match self.session.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.session.current_turn()),
            GameStatus::Won(mark) => format!("Player {} wins!", mark),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_human(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(pos) = input::digit_position(c) {
                    self.cursor = pos;
                    self.play_human(pos, now);
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some(pos) = input::cell_at(&self.cell_areas, mouse.column, mouse.row)
        {
            self.cursor = pos;
            self.play_human(pos, now);
        }
    }

    /// Plays the human's mark at `pos`.
    ///
    /// Stray input (occupied square, finished game, opponent's turn) is
    /// ignored. If the game goes on, the opponent's reply is scheduled.
    #[instrument(skip(self, now))]
    pub fn play_human(&mut self, pos: Position, now: Instant) {
        let human = self.session.human();
        match self.session.apply_move(pos.to_index(), human) {
            Ok(outcome) => {
                debug!(?pos, status = ?outcome.status(), "Human move applied");
                if self.session.is_opponent_turn() {
                    self.opponent_due = Some(now + self.think_delay);
                }
            }
            Err(e) if e.is_invalid_move() => debug!(error = %e, "Ignoring move"),
            Err(e) => warn!(error = %e, "Move failed"),
        }
    }

    /// Plays the opponent's reply once its delay has passed.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.opponent_due else {
            return;
        };
        if now < due {
            return;
        }
        self.opponent_due = None;

        match self.session.play_opponent() {
            Ok((decision, outcome)) => {
                debug!(
                    index = decision.index(),
                    rule = %decision.rule(),
                    status = ?outcome.status(),
                    "Opponent replied"
                );
            }
            Err(e) => warn!(error = %e, "Opponent could not move"),
        }
    }

    /// Restarts the game. A pending opponent reply is dropped.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.opponent_due = None;
    }

    /// True if `pos` lies on the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        let line = self.session.win_line();
        line.is_some_and(|line| line.contains(pos))
    }

    /// Mark shown at `pos`, if any.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.session.board()[pos.to_index()].mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use noughts_core::FirstCandidate;

    fn app(delay_ms: u64) -> App<FirstCandidate> {
        App::new(
            GameSession::with_selector(FirstCandidate),
            Duration::from_millis(delay_ms),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_opponent_waits_for_delay() {
        let mut app = app(500);
        let start = Instant::now();

        app.handle_key(key(KeyCode::Char('1')), start);
        assert_eq!(app.mark_at(Position::TopLeft), Some(Mark::X));
        assert_eq!(app.opponent_due(), Some(start + Duration::from_millis(500)));

        app.tick(start + Duration::from_millis(100));
        assert_eq!(app.mark_at(Position::Center), None);

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.mark_at(Position::Center), Some(Mark::O));
        assert_eq!(app.opponent_due(), None);
        assert_eq!(app.status_text(), "Player X's turn");
    }

    #[test]
    fn test_input_ignored_while_opponent_thinks() {
        let mut app = app(500);
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char('1')), now);
        app.handle_key(key(KeyCode::Char('2')), now);
        assert_eq!(app.mark_at(Position::TopCenter), None);
        assert_eq!(app.status_text(), "Player O's turn");
    }

    #[test]
    fn test_occupied_click_is_ignored() {
        let mut app = app(0);
        let now = Instant::now();
        let mut areas = [Rect::default(); 9];
        areas[4] = Rect::new(0, 0, 5, 3);
        app.set_cell_areas(areas);

        app.handle_mouse(click(1, 1), now);
        app.tick(now);
        let before = app.session().board();

        app.handle_mouse(click(1, 1), now);
        assert_eq!(app.session().board(), before);
    }

    #[test]
    fn test_keyboard_cursor_plays() {
        let mut app = app(0);
        let now = Instant::now();
        app.handle_key(key(KeyCode::Up), now);
        app.handle_key(key(KeyCode::Left), now);
        assert_eq!(app.cursor(), Position::TopLeft);

        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.mark_at(Position::TopLeft), Some(Mark::X));
    }

    #[test]
    fn test_win_is_reported_and_highlighted() {
        let mut app = app(0);
        let now = Instant::now();
        // O answers center, corner 2, then blocks 3; X completes the bottom row.
        for digit in ['1', '9', '7', '8'] {
            app.handle_key(key(KeyCode::Char(digit)), now);
            app.tick(now);
        }

        assert_eq!(app.session().status(), GameStatus::Won(Mark::X));
        assert_eq!(app.status_text(), "Player X wins!");
        let bottom = [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ];
        for pos in bottom {
            assert!(app.is_winning_cell(pos));
        }
        assert!(!app.is_winning_cell(Position::Center));
    }

    #[test]
    fn test_restart_drops_pending_reply() {
        let mut app = app(500);
        let now = Instant::now();
        app.handle_key(key(KeyCode::Char('5')), now);
        app.handle_key(key(KeyCode::Char('r')), now);

        assert_eq!(app.opponent_due(), None);
        assert_eq!(app.session().board(), [noughts_core::Square::Empty; 9]);
        assert_eq!(app.status_text(), "Player X's turn");
    }

    #[test]
    fn test_quit() {
        let mut app = app(0);
        app.handle_key(key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit());
    }
}
