//! Wordle Daily - CLI
//!
//! Terminal Wordle with TUI and line modes, a daily puzzle and persistent stats.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_daily::{
    commands::{PrefsUpdate, run_prefs, run_simple, run_stats},
    core::Word,
    game::{GameConfig, Round, SessionStatus, WordSelector},
    interactive::{App, run_tui},
    interrupt::InterruptFlag,
    output::{print_outcome, print_reveal, print_share, print_stats, print_warning},
    stats::{Recorder, StatsStore},
    wordlists::{ALLOWED, ANSWERS, Dictionary, loader},
};

const RULES: &str = "\
Each guess must be a valid word. Submit with Enter: red letters aren't in the answer,
yellow letters are in the answer, green letters are in the answer at that position.
Hard mode: once a letter is green, all future guesses must include those letters in
those positions.";

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Terminal Wordle with a daily puzzle, hard mode and streaks",
    long_about = RULES,
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play in hard mode
    #[arg(short = 'H', long, global = true)]
    hard: bool,

    /// Print stats and exit
    #[arg(short, long)]
    stats: bool,

    /// Skip today's daily puzzle and play a random word
    #[arg(long, global = true)]
    free: bool,

    /// Stats file (default: ~/.wordle)
    #[arg(long, global = true, env = "WORDLE_STATS_FILE")]
    stats_file: Option<PathBuf>,

    /// Answer list: path to a file with one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Change stored preferences
    Prefs {
        /// Print an emoji share grid after each game
        #[arg(long)]
        emoji: Option<bool>,

        /// Play in hard mode without passing --hard
        #[arg(long)]
        default_hard: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = StatsStore::locate(cli.stats_file.clone());
    if store.path().is_none() {
        print_warning("no home directory found, stats will not be saved");
    }

    if cli.stats {
        run_stats(&store, cli.hard);
        return Ok(());
    }

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, store),
        Commands::Simple => run_simple(start_round(&cli, store)?),
        Commands::Prefs {
            emoji,
            default_hard,
        } => run_prefs_command(&store, *emoji, *default_hard),
    }
}

/// Load the answer list: a custom file if given, the embedded list otherwise
///
/// This is the one failure that aborts before a game starts.
fn load_answers(wordlist: Option<&Path>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("could not read word list {}", path.display())),
        None => Ok(loader::words_from_slice(ANSWERS)),
    }
}

fn start_round(cli: &Cli, store: StatsStore) -> Result<Round> {
    let (stats, warning) = store.load();
    if let Some(warning) = warning {
        print_warning(&warning.to_string());
    }

    let answers = load_answers(cli.wordlist.as_deref())?;
    let selector = WordSelector::new(answers.clone()).context("the answer list has no words")?;

    // Custom answers are always guessable, as are all built-in words
    let mut guessable = answers;
    guessable.extend(loader::words_from_slice(ANSWERS));
    let dictionary = Dictionary::new(&guessable, &loader::words_from_slice(ALLOWED));

    let config = GameConfig::resolve(cli.hard, cli.free, &stats);
    let today = Utc::now().date_naive();

    Ok(Round::start(
        config,
        &selector,
        dictionary,
        Recorder::new(store, stats),
        today,
        &mut rand::rng(),
    ))
}

fn run_play_command(cli: &Cli, store: StatsStore) -> Result<()> {
    let round = start_round(cli, store)?;

    let interrupt = InterruptFlag::new();
    if let Err(err) = interrupt.install() {
        print_warning(&format!("Ctrl-C will not be recorded as a loss: {err}"));
    }

    let app = run_tui(App::new(round), &interrupt)?;
    if let Some(err) = &app.save_error {
        print_warning(&format!("problem saving stats: {err}"));
    }

    let round = &app.round;
    let session = round.session();

    if app.cancelled {
        if session.status() != SessionStatus::Won && session.guesses_used() > 0 {
            print_reveal(session.target());
        }
        return Ok(());
    }

    print_outcome(round);
    print_stats(round.stats(), session.is_hard_mode());
    print_share(round);
    Ok(())
}

fn run_prefs_command(
    store: &StatsStore,
    emoji: Option<bool>,
    default_hard: Option<bool>,
) -> Result<()> {
    let update = PrefsUpdate {
        emoji_sharing: emoji,
        default_hard_mode: default_hard,
    };
    let stats = run_prefs(store, update)?;

    println!("emoji sharing:     {}", stats.emoji_sharing);
    println!("default hard mode: {}", stats.default_hard_mode);
    Ok(())
}
