//! Wordle Solver - CLI
//!
//! Letter-frequency Wordle solver with interactive, single-word, benchmark,
//! and opener-analysis modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_frequency::{
    commands::{Console, SolveConfig, analyze_openers, run_benchmarks, run_play, solve_word},
    core::Word,
    output::{print_benchmark_results, print_openers, print_round, print_solve_result},
    solver::StrategyType,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_frequency",
    about = "Wordle solver using positional constraints and letter-frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: standard (default), two-guess
    #[arg(short, long, global = true, default_value = "standard")]
    strategy: String,

    /// Dictionary file: one five-letter word per line
    #[arg(short, long, global = true, default_value = "sgb-words.txt")]
    dictionary: String,

    /// Seed for openers and tie-breaks (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggest guesses, type in the feedback
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Print each round as it is played
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every dictionary word and report guess statistics
    Benchmark {
        /// Only use the first N dictionary words as answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Strategies to compare (default: all)
        #[arg(long, value_delimiter = ',')]
        strategies: Vec<String>,
    },

    /// Recompute the best opening words for the dictionary
    Openers {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn parse_strategy(name: &str) -> Result<StrategyType> {
    match StrategyType::from_name(name) {
        Some(strategy) => Ok(strategy),
        None => bail!(
            "Unknown strategy '{name}' (expected one of: {})",
            StrategyType::NAMES.join(", ")
        ),
    }
}

fn load_dictionary(path: &str) -> Result<Vec<Word>> {
    let dictionary =
        load_from_file(path).with_context(|| format!("Failed to load dictionary '{path}'"))?;

    if dictionary.is_empty() {
        bail!("Dictionary '{path}' contains no valid five-letter words");
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let strategy = parse_strategy(&cli.strategy)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, strategy, seed),
        Commands::Solve { word, verbose } => {
            run_solve_command(&dictionary, strategy, seed, word, verbose)
        }
        Commands::Benchmark { limit, strategies } => {
            run_benchmark_command(&dictionary, &strategies, limit, seed)
        }
        Commands::Openers { count } => {
            print_openers(&analyze_openers(&dictionary, count));
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &[Word], strategy: StrategyType, seed: u64) -> Result<()> {
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run_play(dictionary, strategy, seed, &mut console)?;
    Ok(())
}

fn run_solve_command(
    dictionary: &[Word],
    strategy: StrategyType,
    seed: u64,
    word: String,
    verbose: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(word, seed);
    config.strategy = strategy;

    let result = solve_word(&config, dictionary, |round| {
        if verbose {
            print_round(round);
        }
    })?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &[Word],
    names: &[String],
    limit: Option<usize>,
    seed: u64,
) -> Result<()> {
    let strategies = if names.is_empty() {
        StrategyType::NAMES
            .iter()
            .map(|name| parse_strategy(name))
            .collect::<Result<Vec<_>>>()?
    } else {
        names
            .iter()
            .map(|name| parse_strategy(name))
            .collect::<Result<Vec<_>>>()?
    };

    let answers = limit.unwrap_or(dictionary.len()).min(dictionary.len());
    println!(
        "Running benchmark on {answers} words with {} strategies (seed {seed})...",
        strategies.len()
    );

    let results = run_benchmarks(dictionary, &strategies, limit, seed, true)?;
    print_benchmark_results(&results);
    Ok(())
}
