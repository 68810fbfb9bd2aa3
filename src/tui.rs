//! TUI (Terminal User Interface) module for Hangman
//!
//! Full-screen interface using Ratatui: gallows drawing, reveal pattern,
//! wrong-letter list, and a letter grid that dims letters already guessed.
//!
//! # State Machine
//! - `AwaitingGuess`: letter keys submit guesses
//! - `GameOver`: terminal; only `N` (new game) and `ESC` (quit) are accepted

use crate::alphabet::Alphabet;
use crate::gallows;
use crate::game_loop::{GameInterface, PlayerAction};
use crate::session::{GameStatus, GuessError, Snapshot};
use crate::wordbank::Word;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const GRID_COLUMNS: usize = 8;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const GUESSED_STYLE: Style = Style::new().fg(Color::DarkGray);
const WRONG_LETTER_STYLE: Style = Style::new().fg(Color::Yellow);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    AwaitingGuess,
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many
/// function arguments.
struct RenderContext<'a> {
    alphabet: &'a Alphabet,
    snapshot: Option<&'a Snapshot>,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    alphabet: Alphabet,
    snapshot: Option<Snapshot>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new(alphabet: Alphabet) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            alphabet,
            snapshot: None,
            state: TuiState::AwaitingGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Pick a letter".to_string(),
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
        let ctx = RenderContext {
            alphabet: &self.alphabet,
            snapshot: self.snapshot.as_ref(),
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(10), // Gallows
                Constraint::Length(3),  // Reveal pattern
                Constraint::Min(5),     // Wrong letters + messages
                Constraint::Length(6),  // Letter grid
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, chunks[1], ctx.snapshot);
        Self::render_word(f, chunks[2], ctx.snapshot);
        Self::render_info(f, chunks[3], ctx);
        Self::render_letter_grid(f, chunks[4], ctx.alphabet, ctx.snapshot);
        Self::render_instructions(f, chunks[5], ctx.state, ctx.status);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
        let attempts = snapshot.map_or(crate::session::ATTEMPTS_BUDGET, |s| s.attempts_remaining);
        let lines: Vec<Line> = gallows::stage_for(attempts)
            .lines()
            .map(Line::from)
            .collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
        let text = snapshot.map_or_else(String::new, |s| s.pattern_string('_'));
        let paragraph = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(snapshot) = ctx.snapshot {
            let wrong: Vec<String> = snapshot.incorrect.iter().map(char::to_string).collect();
            lines.push(Line::from(vec![
                Span::raw("Wrong letters: "),
                Span::styled(wrong.join(", "), WRONG_LETTER_STYLE),
            ]));
            lines.push(Line::from(format!(
                "Attempts remaining: {}",
                snapshot.attempts_remaining
            )));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            let style = match ctx.snapshot.map(|s| s.status) {
                Some(GameStatus::Won) => WIN_STYLE,
                Some(GameStatus::Lost) => LOSS_STYLE,
                _ => HEADER_STYLE,
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Game").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    /// The selectable-letter grid. Already-guessed letters are dimmed by
    /// querying the snapshot's guessed set.
    fn render_letter_grid(
        f: &mut Frame,
        area: Rect,
        alphabet: &Alphabet,
        snapshot: Option<&Snapshot>,
    ) {
        let mut lines = Vec::new();
        let mut spans = Vec::new();

        for (i, letter) in alphabet.letters().enumerate() {
            if i > 0 && i % GRID_COLUMNS == 0 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            let guessed = snapshot.is_some_and(|s| s.guessed.contains(&letter));
            let style = if guessed {
                GUESSED_STYLE
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {letter} "), style));
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Letters").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState, status: &str) {
        let text = match state {
            TuiState::AwaitingGuess => {
                format!("{status} | Type a letter | N: New Game | ESC: Quit")
            }
            TuiState::GameOver => format!("{status} | N: New Game | ESC: Quit"),
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<PlayerAction>, io::Error> {
        // Poll with a timeout so resizes keep redrawing.
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        match event {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to
                // avoid double input.
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                if Self::has_modifier_keys(&key) {
                    debug_log!(
                        "handle_input() - Ignoring input with modifier: {:?}",
                        key.modifiers
                    );
                    return Ok(None);
                }
                match self.state {
                    TuiState::AwaitingGuess => Ok(self.handle_guess_input(key)),
                    TuiState::GameOver => Ok(Self::handle_game_over_input(key)),
                }
            }
            // Mouse, focus, paste and resize events carry no player action.
            _ => Ok(None),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<PlayerAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                Some(PlayerAction::Exit)
            }
            KeyCode::Char('n' | 'N') => Some(PlayerAction::NewGame),
            KeyCode::Char(c) => {
                let letter = c.to_uppercase().next().unwrap_or(c);
                if self.alphabet.contains(letter) {
                    info_log!("handle_guess_input() - Submitting '{}'", letter);
                    Some(PlayerAction::Letter(letter))
                } else {
                    self.error_message = format!("'{c}' is not a letter of the alphabet");
                    debug_log!("handle_guess_input() - Rejecting '{}'", c);
                    None
                }
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<PlayerAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(PlayerAction::NewGame),
            KeyCode::Esc => Some(PlayerAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

impl GameInterface for TuiInterface {
    fn display_snapshot(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<PlayerAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(PlayerAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {
                    // No action yet, keep polling.
                }
                Err(_e) => {
                    info_log!("read_action() - Input error, returning Exit");
                    return Some(PlayerAction::Exit);
                }
            }
        }
    }

    fn display_rejected(&mut self, error: &GuessError) {
        self.error_message = format!("Guess not accepted: {error}");
        self.draw_or_log();
    }

    fn display_win(&mut self) {
        self.state = TuiState::GameOver;
        self.message = "You won! The word is guessed.".to_string();
        self.status = "Game over".to_string();
        self.draw_or_log();
    }

    fn display_loss(&mut self, word: &Word) {
        self.state = TuiState::GameOver;
        self.message = format!("You lost! The word was: {word}");
        self.status = "Game over".to_string();
        self.draw_or_log();
    }

    fn display_new_game(&mut self) {
        self.state = TuiState::AwaitingGuess;
        self.snapshot = None;
        self.message.clear();
        self.error_message.clear();
        self.status = "Pick a letter".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
