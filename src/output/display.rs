//! Colored terminal output for stats and game results

use super::formatters::{MAX_BAR_LENGTH, format_percentage, histogram_bar, share_grid, share_header};
use crate::core::{GuessResult, KEYBOARD_ROWS, KeyboardState, LetterHint, Word};
use crate::game::{Round, SessionStatus};
use crate::stats::GameStats;
use colored::{ColoredString, Colorize};

/// Color a single letter by its hint
#[must_use]
pub fn paint_letter(letter: char, hint: LetterHint) -> ColoredString {
    let text = letter.to_string();
    match hint {
        LetterHint::Located => text.green().bold(),
        LetterHint::Somewhere => text.yellow().bold(),
        LetterHint::NotInWord => text.red(),
        LetterHint::Unknown => text.normal(),
    }
}

/// A scored guess as space separated colored letters
#[must_use]
pub fn format_guess(guess: &Word, result: &GuessResult) -> String {
    guess
        .text()
        .chars()
        .zip(result.hints())
        .map(|(c, &hint)| paint_letter(c, hint).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows, indented like a physical keyboard
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|key| paint_letter(char::from(key), keyboard.hint(key)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

/// Print the stats report for one mode
pub fn print_stats(stats: &GameStats, hard_mode: bool) {
    let title = if hard_mode {
        "Game Stats (Hard Mode)"
    } else {
        "Game Stats"
    };
    println!("{}\n", title.bright_cyan().bold());

    let played = stats.games_played(hard_mode);
    println!("   Total Games: {played}");
    println!(
        "         Win %: {}",
        format_percentage(stats.win_percentage(hard_mode))
    );
    println!("Current Streak: {}", stats.streak);
    println!("   Best Streak: {}", stats.best_streak);

    println!("\n{}\n", "Guess Distribution:".bright_cyan());

    let wins = stats.win_histogram(hard_mode);
    let max_count = wins.iter().copied().max().unwrap_or(0);
    let padding = wins.iter().map(|w| w.to_string().len()).max().unwrap_or(1);

    for (i, &count) in wins.iter().enumerate() {
        println!(
            "{}: {count:>padding$} {}",
            i + 1,
            histogram_bar(count, max_count, MAX_BAR_LENGTH).green()
        );
    }
}

/// Announce how the round ended
pub fn print_outcome(round: &Round) {
    let session = round.session();
    match session.status() {
        SessionStatus::Won => println!("{}\n", "You win!".bright_green().bold()),
        SessionStatus::Lost | SessionStatus::Active => print_reveal(session.target()),
    }
}

/// Reveal the target word
pub fn print_reveal(target: &Word) {
    println!("\nThe word was {}\n", target.text().bright_yellow().bold());
}

/// Print the emoji share grid if the player opted in
pub fn print_share(round: &Round) {
    if !round.stats().emoji_sharing || round.session().turns().is_empty() {
        return;
    }

    println!();
    println!("{}\n", share_header(round.puzzle(), round.session()));
    for row in share_grid(round.session()) {
        println!("{row}");
    }
}

/// Print a warning without interrupting play
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
