//! Simple interactive CLI mode
//!
//! Line-based play for terminals without raw mode support

use crate::core::{TOTAL_GUESSES, WORD_LENGTH};
use crate::game::{Round, SessionStatus};
use crate::interrupt;
use crate::output::display::{format_guess, format_keyboard};
use crate::output::{print_outcome, print_reveal, print_share, print_stats, print_warning};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Run one round in line mode
///
/// SIGINT at the prompt finalizes the round as a loss (if it was started)
/// and exits the process.
///
/// # Errors
///
/// Returns an error if reading standard input or writing the prompt fails.
pub fn run_simple(round: Round) -> Result<()> {
    let round = Arc::new(Mutex::new(round));

    let for_handler = Arc::clone(&round);
    let installed = interrupt::on_interrupt(move || {
        println!();
        finish_abandoned(&mut lock(&for_handler));
        std::process::exit(130);
    });
    if let Err(err) = installed {
        print_warning(&format!("Ctrl-C will not be recorded as a loss: {err}"));
    }

    print_banner(&lock(&round));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prompt = {
            let round = lock(&round);
            if round.session().is_over() {
                break;
            }
            format!("Guess {}/{TOTAL_GUESSES}", round.session().guesses_used() + 1)
        };

        print!("{prompt}: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            // End of input abandons the round like an interrupt
            println!();
            finish_abandoned(&mut lock(&round));
            return Ok(());
        };

        let mut round = lock(&round);
        match round.submit(&line) {
            Ok(submission) => {
                println!(
                    "        {}",
                    format_guess(&submission.turn.guess, &submission.turn.result)
                );
                if let Some(warning) = submission.warning {
                    print_warning(&format!("problem saving stats: {warning}"));
                }
                if submission.status == SessionStatus::Active {
                    println!();
                    for row in format_keyboard(round.session().keyboard()) {
                        println!("    {row}");
                    }
                    println!();
                }
            }
            Err(err) => println!("  {}", err.to_string().red()),
        }
    }

    let round = lock(&round);
    println!();
    print_outcome(&round);
    print_stats(round.stats(), round.session().is_hard_mode());
    print_share(&round);
    Ok(())
}

fn print_banner(round: &Round) {
    if round.is_daily() {
        println!("{}", "   Daily Puzzle!".bright_cyan().bold());
    }
    if round.session().is_hard_mode() {
        println!("{}", "     Hard Mode".bright_magenta().bold());
    }
    println!(
        "Guess the {WORD_LENGTH}-letter word in {TOTAL_GUESSES} tries. Ctrl-D or Ctrl-C gives up.\n"
    );
}

/// Record an interrupted round and reveal the word if it was in play
fn finish_abandoned(round: &mut Round) {
    if let Err(err) = round.abandon() {
        print_warning(&format!("problem saving stats: {err}"));
    }

    let session = round.session();
    if session.status() != SessionStatus::Won && session.guesses_used() > 0 {
        print_reveal(session.target());
    }
}

fn lock(round: &Mutex<Round>) -> MutexGuard<'_, Round> {
    round.lock().unwrap_or_else(PoisonError::into_inner)
}
