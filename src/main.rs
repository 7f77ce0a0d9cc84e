//! Word Scramble - CLI
//!
//! Unscramble words in a TUI (default) or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use word_scramble::{
    commands::run_simple,
    core::WordList,
    game::GameEngine,
    logging,
    output::print_word_list,
    wordlists::{self, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Unscramble words, one round at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file with one 'SCRAMBLED,correct' pair per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for word selection, for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Print the active word list
    Words,
}

/// Load the word list selected by the -w flag
fn load_words(path: Option<&PathBuf>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display())),
        None => Ok(wordlists::builtin()),
    }
}

fn build_engine(words: &WordList, seed: Option<u64>) -> GameEngine<'_> {
    match seed {
        Some(seed) => GameEngine::seeded(words, seed),
        None => GameEngine::from_os_rng(words),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let words = load_words(cli.words.as_ref())?;

    match command {
        Commands::Play => run_play_command(&words, cli.seed),
        Commands::Simple => run_simple_command(&words, cli.seed),
        Commands::Words => {
            print_word_list(&words, &mut io::stdout()).context("Failed to print word list")
        }
    }
}

fn run_play_command(words: &WordList, seed: Option<u64>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(build_engine(words, seed));
    run_tui(app)
}

fn run_simple_command(words: &WordList, seed: Option<u64>) -> Result<()> {
    let mut engine = build_engine(words, seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut engine, stdin.lock(), &mut stdout).context("Simple mode failed")?;
    Ok(())
}
