//! Mastermind - CLI
//!
//! Code-breaking game with TUI and line-oriented modes, plus one-shot
//! scoring and code generation commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_generate, run_simple, score_codes},
    core::{CodeLength, DuplicatePolicy, SessionSettings},
    game::{DEFAULT_BUCKET_COUNT, DEFAULT_TURNS, Engine, GameConfig},
    output::{print_generate_report, print_score_result},
};
use std::io;
use std::num::NonZeroUsize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with outcome ranking and issued-code tracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for reproducible secret codes (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game (at least 1)
    #[arg(short, long, global = true, default_value_t = DEFAULT_TURNS)]
    turns: NonZeroUsize,

    /// Buckets in the issued-code table
    #[arg(short, long, global = true, default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: NonZeroUsize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line prompts without TUI)
    Simple,

    /// Score one guess against a secret
    Score {
        /// The secret code, e.g. 1234
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Generate a batch of secret codes and show the issued-code table
    Generate {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Code length: 4, 6 or 8
        #[arg(short, long, default_value = "4")]
        length: CodeLength,

        /// Allow repeated symbols within a code
        #[arg(short, long)]
        duplicates: bool,
    },
}

/// Log to stderr, filtered by `RUST_LOG` or the given default directive
fn init_tracing(default_directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would tear the alternate screen, so the TUI stays quiet by default
    init_tracing(if matches!(command, Commands::Play) {
        "off"
    } else {
        "warn"
    });

    let config = GameConfig {
        max_turns: cli.turns,
        bucket_count: cli.buckets,
        seed: cli.seed,
    };
    debug!(?config, "starting");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Generate {
            count,
            length,
            duplicates,
        } => {
            let settings =
                SessionSettings::new(length, DuplicatePolicy::from_allowed(duplicates));
            run_generate_command(&config, count, settings);
            Ok(())
        }
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(secret, guess)?;
    print_score_result(&result);
    Ok(())
}

fn run_generate_command(config: &GameConfig, count: usize, settings: SessionSettings) {
    let mut engine = Engine::new(config);
    let report = run_generate(&mut engine, count, settings);
    print_generate_report(&report);
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut engine = Engine::new(config);
    run_simple(&mut engine, io::stdin().lock(), io::stdout())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(Engine::new(config));
    run_tui(app)
}
