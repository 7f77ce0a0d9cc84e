//! TUI application state and logic

use crate::game::{GameEngine, SessionStats};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
///
/// Holds the engine plus presentation-only state (message log, session counters).
pub struct App<'a, R: Rng = StdRng> {
    pub engine: GameEngine<'a, R>,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(engine: GameEngine<'a, R>) -> Self {
        Self {
            engine,
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the word above.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type your guess and press Enter to check it.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: SessionStats::new(),
            should_quit: false,
        }
    }

    /// Route one key press to the matching action
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.next_word(),
            KeyCode::Char('u') if ctrl => self.edit_guess(String::clear),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.edit_guess(|guess| guess.push(c));
            }
            KeyCode::Backspace => {
                self.edit_guess(|guess| {
                    guess.pop();
                });
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    /// Apply an edit to the guess text and dispatch the result
    ///
    /// The input field is bound to the engine's guess, so every change goes through `SetGuess`.
    pub fn edit_guess(&mut self, edit: impl FnOnce(&mut String)) {
        let mut guess = self.engine.state().user_guess.clone();
        edit(&mut guess);
        self.engine.set_guess(guess);
    }

    pub fn submit_guess(&mut self) {
        let state = self.engine.check_answer();
        self.stats.record_check(state);

        if state.is_solved() {
            let text = format!(
                "Solved {} in {} attempt(s)! Press Ctrl+N for the next word.",
                state.word_pair.correct().to_uppercase(),
                state.attempts
            );
            self.add_message(&text, MessageStyle::Success);
        } else {
            let text = format!("'{}' is not it.", state.user_guess);
            self.add_message(&text, MessageStyle::Error);
        }
    }

    /// Start a new round, only offered once the current word is solved
    pub fn next_word(&mut self) {
        if !self.engine.state().is_solved() {
            debug!("Next word requested before solving");
            self.add_message("Solve this word first!", MessageStyle::Error);
            return;
        }

        self.engine.reset();
        self.stats.record_reset();
        self.messages.clear();
        self.add_message("New word! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WordList, WordPair};

    fn example_only() -> WordList {
        WordList::new(vec![WordPair::new("ELAPXPME", "example")]).unwrap()
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<'_>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_updates_guess() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));

        type_text(&mut app, "Exa");
        assert_eq!(app.engine.state().user_guess, "Exa");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.engine.state().user_guess, "Ex");
        assert_eq!(app.engine.state().attempts, 0);
    }

    #[test]
    fn ctrl_u_clears_guess() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));
        type_text(&mut app, "abc");
        ctrl(&mut app, 'u');
        assert_eq!(app.engine.state().user_guess, "");
    }

    #[test]
    fn enter_checks_guess() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));

        type_text(&mut app, "Example");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.state().is_correct, Some(true));
        assert_eq!(app.engine.state().attempts, 1);
        assert_eq!(app.stats.words_solved, 1);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn wrong_guess_reports_error() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));

        type_text(&mut app, "wrong");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine.state().is_correct, Some(false));
        assert_eq!(app.engine.state().attempts, 2);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn next_word_only_after_solve() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));

        type_text(&mut app, "wrong");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'n');
        assert_eq!(app.engine.state().attempts, 1);
        assert_eq!(app.stats.rounds_played, 1);

        ctrl(&mut app, 'u');
        type_text(&mut app, "example");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'n');

        let state = app.engine.state();
        assert_eq!(state.attempts, 0);
        assert_eq!(state.is_correct, None);
        assert_eq!(state.user_guess, "");
        assert_eq!(app.stats.rounds_played, 2);
    }

    #[test]
    fn letters_n_and_q_are_typed() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));
        type_text(&mut app, "nq");
        assert_eq!(app.engine.state().user_guess, "nq");
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(GameEngine::seeded(&words, 0));
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_capped() {
        let words = example_only();
        let mut app = App::new(GameEngine::seeded(&words, 0));
        for _ in 0..10 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
