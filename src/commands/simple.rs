//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is a guess that gets checked immediately.

use crate::core::Phase;
use crate::game::{GameEngine, SessionStats};
use crate::output::formatters::{attempts_label, feedback_message, spaced_letters};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

const QUIT_COMMANDS: [&str; 3] = [":quit", ":q", ":exit"];
const NEXT_COMMANDS: [&str; 2] = [":next", ":n"];

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
enum LineInput<'a> {
    Quit,
    Next,
    Guess(&'a str),
}

/// Classify a line with its terminator already stripped
///
/// A leading `::` escapes a command word, so `::quit` is the guess `:quit`.
fn parse_line(line: &str) -> LineInput<'_> {
    if line.starts_with("::") {
        return LineInput::Guess(&line[1..]);
    }
    if QUIT_COMMANDS.contains(&line) {
        LineInput::Quit
    } else if NEXT_COMMANDS.contains(&line) {
        LineInput::Next
    } else {
        LineInput::Guess(line)
    }
}

/// Run the line-based game until `:quit` or end of input
///
/// Input bytes that are not valid UTF-8 are replaced, never rejected.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng, I: BufRead, W: Write>(
    engine: &mut GameEngine<'_, R>,
    mut input: I,
    out: &mut W,
) -> io::Result<SessionStats> {
    let mut stats = SessionStats::new();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Unscramble the word and press Enter to check your guess.")?;
    writeln!(out, "Commands: ':next' for a new word once solved, ':quit' to exit")?;
    writeln!(out, "To guess a command word literally, prefix it with another ':' (e.g. '::next')\n")?;

    print_scrambled(engine, out)?;

    let mut buf = Vec::new();
    loop {
        write!(out, "Your guess: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&buf);
        // Only the line terminator is stripped; the guess itself is taken verbatim
        let line = raw.strip_suffix('\n').unwrap_or(&raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let guess = match parse_line(line) {
            LineInput::Quit => break,
            LineInput::Next => {
                if engine.phase() == (Phase::Checked { correct: true }) {
                    engine.reset();
                    stats.record_reset();
                    writeln!(out, "\n🔄 Next word!\n")?;
                    print_scrambled(engine, out)?;
                } else {
                    writeln!(out, "{}\n", "Solve this word first!".yellow())?;
                }
                continue;
            }
            LineInput::Guess(guess) => guess,
        };

        engine.set_guess(guess);
        let state = engine.check_answer();
        stats.record_check(state);

        let message = feedback_message(state.is_correct).unwrap_or_default();
        let message = if state.is_solved() {
            message.green().bold()
        } else {
            message.red()
        };
        writeln!(out, "{message}")?;
        writeln!(out, "{}\n", attempts_label(state.attempts))?;

        if state.is_solved() {
            writeln!(out, "Type ':next' for another word or ':quit' to exit.\n")?;
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Solved {} of {} word(s).\n",
        stats.words_solved, stats.rounds_played
    )?;
    Ok(stats)
}

fn print_scrambled<R: Rng, W: Write>(engine: &GameEngine<'_, R>, out: &mut W) -> io::Result<()> {
    let scrambled = spaced_letters(engine.state().word_pair.scrambled());
    writeln!(out, "  {}\n", scrambled.bright_yellow().bold())
}
