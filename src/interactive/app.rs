//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GuessError, Round, SessionStatus};
use crate::interrupt::InterruptFlag;
use crate::stats::StatsError;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the loop wakes up to check for SIGINT
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub cancelled: bool,
    /// Save failure from giving up, reported once the terminal is restored
    pub save_error: Option<StatsError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl App {
    #[must_use]
    pub fn new(round: Round) -> Self {
        let mut app = Self {
            round,
            input_buffer: String::with_capacity(WORD_LENGTH),
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            cancelled: false,
            save_error: None,
        };

        if app.round.is_daily() {
            app.add_message("Daily Puzzle!", MessageStyle::Success);
        }
        if app.round.session().is_hard_mode() {
            app.add_message(
                "Hard Mode: located letters must stay put",
                MessageStyle::Info,
            );
        }
        app.add_message(
            "Green: right spot | Yellow: in the word | Gray: not in the word",
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter", MessageStyle::Info);
        app
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && self.input_buffer.len() < WORD_LENGTH
            && c.is_ascii_alphabetic()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let guess = self.input_buffer.clone();
        match self.round.submit(&guess) {
            Ok(submission) => {
                self.input_buffer.clear();

                if let Some(warning) = submission.warning {
                    self.add_message(
                        &format!("Problem saving stats: {warning}"),
                        MessageStyle::Error,
                    );
                }

                match submission.status {
                    SessionStatus::Won => {
                        let celebration = match self.round.session().attempt() {
                            0 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            1 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            2 => "✨ SPLENDID! Three guesses! ✨",
                            3 => "👏 GREAT JOB! Four guesses! 👏",
                            4 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.finish();
                    }
                    SessionStatus::Lost => {
                        let reveal =
                            format!("The word was {}", self.round.session().target().text());
                        self.add_message(&reveal, MessageStyle::Error);
                        self.finish();
                    }
                    SessionStatus::Active => {}
                }
            }
            Err(err) => {
                let text = match &err {
                    GuessError::NotADictionaryWord(_) => format!("{err} (must be a word)"),
                    GuessError::InvalidLength(_) => "Not enough letters".to_string(),
                    GuessError::HardModeViolation(_) | GuessError::GameOver => err.to_string(),
                };
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Give up: record the abandonment and leave
    pub fn cancel(&mut self) {
        if let Err(err) = self.round.abandon() {
            self.save_error = Some(err);
        }
        self.cancelled = true;
        self.should_quit = true;
    }

    /// SIGINT: give up a game in progress, just leave a finished one
    pub fn interrupted(&mut self) {
        match self.input_mode {
            InputMode::Guessing => self.cancel(),
            InputMode::GameOver => self.should_quit = true,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, interrupt: &InterruptFlag) {
        // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::GameOver => {
                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc)
                {
                    self.should_quit = true;
                }
            }
            InputMode::Guessing if ctrl_c => interrupt.raise(),
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.cancel(),
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => self.pop_letter(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    fn finish(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.add_message("Press Enter or 'q' to see your stats", MessageStyle::Info);
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

/// Run the TUI application until the round ends or is cancelled
///
/// The terminal is restored before returning, also when the loop fails.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App, interrupt: &InterruptFlag) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app;
    let res = run_app(&mut terminal, &mut app, interrupt);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map(|()| app)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    interrupt: &InterruptFlag,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if interrupt.is_raised() {
            app.interrupted();
            break;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key, interrupt);
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
    use crate::core::Word;
    use crate::game::{GameConfig, WordSelector};
    use crate::stats::store::STATS_FILE_NAME;
    use crate::stats::{GameStats, Recorder, StatsStore};
    use crate::wordlists::{Dictionary, loader::words_from_slice};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    fn app(dir: &TempDir, hard_mode: bool) -> App {
        app_with_store(StatsStore::at(dir.path().join(STATS_FILE_NAME)), hard_mode)
    }

    fn app_with_store(store: StatsStore, hard_mode: bool) -> App {
        let answers = words_from_slice(&["cigar", "rebut"]);
        let selector = WordSelector::new(answers.clone()).unwrap();
        let dictionary = Dictionary::new(&answers, &words_from_slice(&["crane", "cloud"]));
        let recorder = Recorder::new(store, GameStats::default());
        let config = GameConfig {
            hard_mode,
            free_play: false,
        };
        let round = Round::start(
            config,
            &selector,
            dictionary,
            recorder,
            NaiveDate::from_ymd_opt(2021, 6, 19).unwrap(),
            &mut StdRng::seed_from_u64(0),
        );
        App::new(round)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_letter(c);
        }
        app.submit_guess();
    }

    #[test]
    fn buffer_only_takes_five_letters() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        for c in "cr4n!ees".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "CRNEE");
        app.pop_letter();
        assert_eq!(app.input_buffer, "CRNE");
    }

    #[test]
    fn rejected_word_keeps_buffer_and_reports() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        type_word(&mut app, "zzzzz");

        assert_eq!(app.input_buffer, "ZZZZZ");
        assert!(app.round.session().turns().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("must be a word"));
    }

    #[test]
    fn winning_switches_to_game_over() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        assert_eq!(app.round.session().target(), &Word::new("cigar").unwrap());

        type_word(&mut app, "crane");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "cigar");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.round.stats().streak, 1);

        // Typing after the game is over does nothing
        app.push_letter('a');
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn hard_mode_violation_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, true);
        type_word(&mut app, "crane");
        type_word(&mut app, "rebut");

        assert_eq!(app.round.session().guesses_used(), 1);
        let last = app.messages.last().unwrap();
        assert!(last.text.contains("letter 1 must be C"), "{}", last.text);
    }

    #[test]
    fn cancel_after_guess_resets_streak() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        type_word(&mut app, "crane");

        app.cancel();
        app.cancel();
        assert!(app.should_quit);
        assert!(app.cancelled);
        assert_eq!(app.round.stats().streak, 0);

        let (on_disk, _) = StatsStore::at(dir.path().join(STATS_FILE_NAME)).load();
        assert_eq!(on_disk.total_games, 1);
    }

    fn press(app: &mut App, interrupt: &InterruptFlag, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers), interrupt);
    }

    #[test]
    fn failed_save_on_give_up_is_kept_for_reporting() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::at(dir.path().join("missing").join(STATS_FILE_NAME));
        let mut app = app_with_store(store, false);
        type_word(&mut app, "crane");

        app.cancel();
        assert!(app.cancelled);
        assert!(matches!(app.save_error, Some(StatsError::Write { .. })));
    }

    #[test]
    fn give_up_before_guessing_has_nothing_to_report() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::at(dir.path().join("missing").join(STATS_FILE_NAME));
        let mut app = app_with_store(store, false);

        app.cancel();
        assert!(app.cancelled);
        assert!(app.save_error.is_none());
    }

    #[test]
    fn ctrl_c_while_guessing_raises_interrupt() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        let interrupt = InterruptFlag::new();

        press(&mut app, &interrupt, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(interrupt.is_raised());
        assert!(app.input_buffer.is_empty());

        app.interrupted();
        assert!(app.cancelled);
    }

    #[test]
    fn ctrl_c_after_game_over_quits_without_cancelling() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        let interrupt = InterruptFlag::new();
        type_word(&mut app, "cigar");
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, &interrupt, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
        assert!(!app.cancelled);
        assert!(!interrupt.is_raised());
    }

    #[test]
    fn interrupt_after_game_over_keeps_the_result() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        type_word(&mut app, "cigar");

        app.interrupted();
        assert!(app.should_quit);
        assert!(!app.cancelled);
        assert_eq!(app.round.stats().streak, 1);
    }

    #[test]
    fn keys_drive_guessing() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, false);
        let interrupt = InterruptFlag::new();

        for c in "crane".chars() {
            press(&mut app, &interrupt, KeyCode::Char(c), KeyModifiers::NONE);
        }
        press(&mut app, &interrupt, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.round.session().guesses_used(), 1);

        press(&mut app, &interrupt, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.cancelled);
    }
}
