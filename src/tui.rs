//! TUI (Terminal User Interface) module for the Wordle game
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # Architecture
//! - `BoardView`: what is on screen, built only from game events
//! - `TuiInterface`: owns the terminal, draws the view, and turns key presses
//!   into `UserAction`s
//!
//! The view never reads the game session; the controller pushes every change.

use crate::evaluator::Verdict;
use crate::game_state::{GameInterface, UserAction};
use crate::session::{Hint, HintDenial, MAX_GUESSES};
use crate::stats::Statistics;
use crate::word::{WORD_LENGTH, Word};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::collections::HashMap;
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum LetterState {
    Empty,
    Entered,
    Correct,
    Present,
    Absent,
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Correct => (Color::Green, Color::Black),
            Self::Present => (Color::Yellow, Color::Black),
            Self::Absent => (Color::Gray, Color::White),
        }
    }

    fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Correct,
            Verdict::Present => Self::Present,
            Verdict::Absent => Self::Absent,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Tile {
    letter: char,
    state: LetterState,
}

impl Tile {
    const EMPTY: Self = Self {
        letter: ' ',
        state: LetterState::Empty,
    };
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum MessageKind {
    Info,
    Win,
    Lose,
    Error,
}

impl MessageKind {
    fn style(self) -> Style {
        match self {
            Self::Info => MESSAGE_STYLE,
            Self::Win => SUCCESS_STYLE,
            Self::Lose => LOSE_STYLE,
            Self::Error => ERROR_STYLE,
        }
    }
}

/// Keyboard colouring only moves up: Absent, then Present, then Correct.
fn verdict_rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Absent => 0,
        Verdict::Present => 1,
        Verdict::Correct => 2,
    }
}

/// Screen model for the game, updated from controller events.
#[derive(Debug)]
pub struct BoardView {
    tiles: [[Tile; WORD_LENGTH]; MAX_GUESSES],
    keyboard: HashMap<char, Verdict>,
    message: String,
    message_kind: MessageKind,
    status: String,
    stats: Statistics,
    game_over: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: [[Tile::EMPTY; WORD_LENGTH]; MAX_GUESSES],
            keyboard: HashMap::new(),
            message: String::new(),
            message_kind: MessageKind::Info,
            status: "Ready".to_string(),
            stats: Statistics::default(),
            game_over: false,
        }
    }

    fn reset(&mut self) {
        self.tiles = [[Tile::EMPTY; WORD_LENGTH]; MAX_GUESSES];
        self.keyboard.clear();
        self.message.clear();
        self.game_over = false;
        self.status = "New game - type your first guess".to_string();
    }

    fn set_message(&mut self, kind: MessageKind, message: String) {
        self.message_kind = kind;
        self.message = message;
    }

    fn set_cell(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.tiles[row][col] = match letter {
            Some(c) => Tile {
                letter: c,
                state: LetterState::Entered,
            },
            None => Tile::EMPTY,
        };
        self.message.clear();
    }

    fn apply_verdicts(&mut self, row: usize, verdicts: &[Verdict; WORD_LENGTH]) {
        for (tile, verdict) in self.tiles[row].iter_mut().zip(verdicts) {
            tile.state = LetterState::from_verdict(*verdict);
            let entry = self.keyboard.entry(tile.letter).or_insert(*verdict);
            if verdict_rank(*verdict) > verdict_rank(*entry) {
                *entry = *verdict;
            }
        }
        self.status = format!("Row {} of {} scored", row + 1, MAX_GUESSES);
    }

    fn key_state(&self, letter: char) -> Option<Verdict> {
        self.keyboard.get(&letter).copied()
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Board
                Constraint::Length(5),  // Keyboard
                Constraint::Min(3),     // Messages
                Constraint::Length(3),  // Statistics
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        self.render_board(f, chunks[1]);
        self.render_keyboard(f, chunks[2]);
        self.render_message(f, chunks[3]);
        self.render_stats(f, chunks[4]);
        self.render_instructions(f, chunks[5]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for (row_index, row) in self.tiles.iter().enumerate() {
            let y = inner.y + (row_index as u16 * ROW_SPACING);
            if y >= inner.y + inner.height {
                break;
            }
            let mut spans = vec![Span::raw("  ")];
            for tile in row {
                let (bg_color, fg_color) = tile.state.colors();
                spans.push(Span::styled(
                    format!(" {} ", tile.letter),
                    Style::default().fg(fg_color).bg(bg_color),
                ));
                spans.push(Span::raw(" "));
            }
            render_line(f, inner, y, spans);
        }
    }

    fn render_keyboard(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|keys| {
                let spans: Vec<Span> = keys
                    .chars()
                    .map(|c| {
                        let (bg_color, fg_color) = self
                            .key_state(c)
                            .map_or(LetterState::Empty, LetterState::from_verdict)
                            .colors();
                        Span::styled(format!(" {c} "), Style::default().fg(fg_color).bg(bg_color))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_message(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if !self.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.message.as_str(),
                self.message_kind.style(),
            )]));
        }
        lines.push(Line::from(Span::styled(
            self.status.as_str(),
            Style::default().fg(Color::Gray),
        )));
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let text = format!(
            "Played: {}   Win %: {}   Streak: {}   Best: {}",
            self.stats.games_played,
            self.stats.win_percentage(),
            self.stats.current_streak,
            self.stats.max_streak
        );
        let paragraph = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Statistics"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let text = if self.game_over {
            "SPACE: New Game | ESC: Quit"
        } else {
            "Type letters | ENTER: Submit | BACKSPACE: Delete | ?: Hint | SPACE: New Game | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(
        paragraph,
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        },
    );
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key press to a game action.
fn key_to_action(key: KeyEvent) -> Option<UserAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UserAction::Exit);
    }
    if has_modifier_keys(&key) {
        debug_log!("key_to_action() - Ignoring key with modifier: {:?}", key.modifiers);
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(UserAction::Exit),
        KeyCode::Enter => Some(UserAction::Submit),
        KeyCode::Backspace => Some(UserAction::Backspace),
        KeyCode::Char(' ') => Some(UserAction::NewGame),
        KeyCode::Char('?') => Some(UserAction::Hint),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(UserAction::Letter(c.to_ascii_uppercase()))
        }
        KeyCode::Char(c) => {
            // Replacement and control characters can arrive from escape
            // sequences when the terminal loses focus
            if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD {
                debug_log!("key_to_action() - Ignoring control character: {:?}", c);
            }
            None
        }
        _ => None,
    }
}

/// Main TUI interface component.
///
/// Manages terminal setup, rendering, and key input.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: BoardView,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: BoardView::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let view = &self.view;
        self.terminal.draw(|f| view.render(f))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::warn!("Draw error: {e}");
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(key_to_action(key))
            }
            Event::Resize(_, _) => {
                self.draw_or_log();
                Ok(None)
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        if self.draw().is_err() {
            info_log!("read_action() - Draw failed, returning Exit");
            return Some(UserAction::Exit);
        }
        match self.handle_input() {
            Ok(action) => action,
            Err(e) => {
                log::error!("Input error: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn on_new_game(&mut self) {
        self.view.reset();
        self.draw_or_log();
    }

    fn on_cell_changed(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.view.set_cell(row, col, letter);
        self.draw_or_log();
    }

    fn on_row_evaluated(&mut self, row: usize, verdicts: &[Verdict; WORD_LENGTH]) {
        self.view.apply_verdicts(row, verdicts);
        self.draw_or_log();
    }

    fn on_game_won(&mut self) {
        self.view.game_over = true;
        self.view
            .set_message(MessageKind::Win, "Congratulations! You guessed it!".to_string());
        self.draw_or_log();
    }

    fn on_game_lost(&mut self, secret: &Word) {
        self.view.game_over = true;
        self.view
            .set_message(MessageKind::Lose, format!("Game Over! The word was: {secret}"));
        self.draw_or_log();
    }

    fn on_hint_granted(&mut self, hint: &Hint) {
        self.view.set_message(MessageKind::Info, hint.to_string());
        self.draw_or_log();
    }

    fn on_hint_denied(&mut self, reason: HintDenial) {
        self.view
            .set_message(MessageKind::Error, format!("No hint: {reason}"));
        self.draw_or_log();
    }

    fn on_stats_updated(&mut self, stats: &Statistics) {
        self.view.stats = *stats;
        self.draw_or_log();
    }

    fn on_definition(&mut self, word: &Word, definition: &str) {
        self.view.status = format!("{word}: {definition}");
        self.draw_or_log();
    }

    fn on_secret_revealed(&mut self, secret: &Word) {
        self.view
            .set_message(MessageKind::Info, format!("Current word is: {secret}"));
        self.draw_or_log();
    }

    fn on_exit(&mut self) {
        self.view.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Verdict::{Absent, Correct, Present};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_to_action(press(KeyCode::Char('a'))), Some(UserAction::Letter('A')));
        assert_eq!(key_to_action(press(KeyCode::Char('Z'))), Some(UserAction::Letter('Z')));
        assert_eq!(key_to_action(press(KeyCode::Enter)), Some(UserAction::Submit));
        assert_eq!(key_to_action(press(KeyCode::Backspace)), Some(UserAction::Backspace));
        assert_eq!(key_to_action(press(KeyCode::Char(' '))), Some(UserAction::NewGame));
        assert_eq!(key_to_action(press(KeyCode::Char('?'))), Some(UserAction::Hint));
        assert_eq!(key_to_action(press(KeyCode::Esc)), Some(UserAction::Exit));
        assert_eq!(key_to_action(press(KeyCode::Char('1'))), None);
        assert_eq!(key_to_action(press(KeyCode::Char('\u{FFFD}'))), None);
        assert_eq!(key_to_action(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_key_mapping_modifiers() {
        let alt = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(key_to_action(alt), None);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Some(UserAction::Exit));
        let shift = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(shift), Some(UserAction::Letter('A')));
    }

    #[test]
    fn test_view_tracks_cells() {
        let mut view = BoardView::new();
        view.set_cell(0, 0, Some('C'));
        view.set_cell(0, 1, Some('R'));
        assert_eq!(view.tiles[0][1].letter, 'R');
        assert_eq!(view.tiles[0][1].state, LetterState::Entered);
        view.set_cell(0, 1, None);
        assert_eq!(view.tiles[0][1], Tile::EMPTY);
    }

    #[test]
    fn test_view_applies_verdicts() {
        let mut view = BoardView::new();
        for (i, c) in "SLATE".chars().enumerate() {
            view.set_cell(0, i, Some(c));
        }
        view.apply_verdicts(0, &[Absent, Absent, Correct, Absent, Correct]);
        assert_eq!(view.tiles[0][2].state, LetterState::Correct);
        assert_eq!(view.tiles[0][0].state, LetterState::Absent);
        assert_eq!(view.key_state('A'), Some(Correct));
        assert_eq!(view.key_state('S'), Some(Absent));
        assert_eq!(view.key_state('Q'), None);
    }

    #[test]
    fn test_keyboard_state_only_upgrades() {
        let mut view = BoardView::new();
        for (i, c) in "EARLS".chars().enumerate() {
            view.set_cell(0, i, Some(c));
        }
        view.apply_verdicts(0, &[Present, Present, Present, Absent, Absent]);
        for (i, c) in "CRANE".chars().enumerate() {
            view.set_cell(1, i, Some(c));
        }
        view.apply_verdicts(1, &[Correct; 5]);
        assert_eq!(view.key_state('E'), Some(Correct));

        // A later weaker verdict does not downgrade the key
        for (i, c) in "EERIE".chars().enumerate() {
            view.set_cell(2, i, Some(c));
        }
        view.apply_verdicts(2, &[Absent, Absent, Present, Absent, Correct]);
        assert_eq!(view.key_state('E'), Some(Correct));
        assert_eq!(view.key_state('R'), Some(Correct));
        assert_eq!(view.key_state('I'), Some(Absent));
    }

    #[test]
    fn test_view_reset() {
        let mut view = BoardView::new();
        view.set_cell(0, 0, Some('C'));
        view.apply_verdicts(0, &[Absent; 5]);
        view.game_over = true;
        view.set_message(MessageKind::Lose, "lost".to_string());
        view.reset();
        assert_eq!(view.tiles[0][0], Tile::EMPTY);
        assert!(view.keyboard.is_empty());
        assert!(view.message.is_empty());
        assert!(!view.game_over);
    }

    #[test]
    fn test_render_to_test_backend() {
        use ratatui::backend::TestBackend;

        let mut view = BoardView::new();
        for (i, c) in "CRANE".chars().enumerate() {
            view.set_cell(0, i, Some(c));
        }
        view.apply_verdicts(0, &[Correct; 5]);
        view.set_message(MessageKind::Win, "Congratulations! You guessed it!".to_string());

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| view.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("WORDLE"));
        assert!(text.contains("Congratulations"));
        assert!(text.contains(" C "));
    }
}
