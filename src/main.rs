//! Wordle Narrower - CLI
//!
//! Solves, analyzes and benchmarks with the entropy narrower, or suggests
//! guesses for a game played elsewhere.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_narrower::{
    commands::{BenchmarkConfig, SolveConfig, analyze_word, run_benchmark, run_play, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{self, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_narrower",
    about = "Wordle solver narrowing candidates by letter frequency and entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word (default: a random dictionary word)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Seed for drawing the random target
        #[arg(long)]
        seed: Option<u64>,

        /// Show entropy and information gained for every guess
        #[arg(short, long)]
        detail: bool,
    },

    /// Analyze a word as a guess against the whole dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve every dictionary word and report statistics
    Benchmark {
        /// Number of dictionary words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Interactive assistant: suggests guesses and reads the feedback
    Play,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the dictionary from `path`, or the built-in one
fn load_dictionary(path: Option<&Path>) -> Result<Vec<Word>> {
    let dictionary = match path {
        Some(path) => load_from_file(path)?,
        None => wordlists::builtin(),
    };
    if dictionary.is_empty() {
        anyhow::bail!("Word list contains no valid five-letter words");
    }
    log::info!("dictionary holds {} words", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    // Default to a random demonstration solve if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        word: None,
        seed: None,
        detail: false,
    });

    match command {
        Commands::Solve { word, seed, detail } => {
            let config = word.map_or(SolveConfig::random(seed), SolveConfig::new);
            run_solve_command(config, detail, &dictionary)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary),
        Commands::Benchmark { count } => run_benchmark_command(count, &dictionary),
        Commands::Play => run_play_command(&dictionary),
    }
}

fn run_solve_command(config: SolveConfig, detail: bool, dictionary: &[Word]) -> Result<()> {
    let result = solve_word(config, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, detail);
    Ok(())
}

fn run_analyze_command(word: &str, dictionary: &[Word]) -> Result<()> {
    let result = analyze_word(word, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: Option<usize>, dictionary: &[Word]) -> Result<()> {
    let config = BenchmarkConfig {
        count,
        show_progress: true,
    };
    println!(
        "Running benchmark on {} words...",
        count.unwrap_or(dictionary.len()).min(dictionary.len())
    );

    let result = run_benchmark(&config, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &[Word]) -> Result<()> {
    let summary = run_play(dictionary).map_err(|e| anyhow::anyhow!(e))?;
    log::info!("assistant session ended after {} solved games", summary.games_solved);
    Ok(())
}
