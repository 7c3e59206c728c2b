//! Wordrace - CLI
//!
//! Terminal host for the multiplayer word-guessing engine: hotseat play,
//! statistics reporting and a one-off scorer.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordrace::{
    commands::{run_games_stats, run_play, run_player_stats, run_score},
    stats::StatsStore,
    wordlists::WordStore,
};

#[derive(Parser)]
#[command(
    name = "wordrace",
    about = "Multiplayer word-guessing race with ranked finishes and persistent statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a dictionary file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Secrets file (defaults to the wordlist file when -w is a path)
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    /// Directory holding the persisted statistics records
    #[arg(long, global = true, default_value = "stats")]
    stats_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a hotseat session with the given participants
    Play {
        /// Participant names, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        players: Vec<String>,
    },

    /// Show a player's cumulative statistics
    Stats {
        /// Player to report on (omit with --games for the global view)
        player: Option<String>,

        /// Show the global game statistics instead
        #[arg(long)]
        games: bool,
    },

    /// Score a guess against a secret and print the verdicts
    Score {
        /// The guessed word
        guess: String,

        /// The secret to score against
        secret: String,
    },
}

/// Build the word store from the -w / --secrets flags
fn load_wordstore(wordlist: &str, secrets: Option<&PathBuf>) -> Result<WordStore> {
    match wordlist {
        "embedded" => Ok(WordStore::embedded()),
        path => {
            let secrets = secrets.map_or_else(|| PathBuf::from(path), Clone::clone);
            Ok(WordStore::from_files(PathBuf::from(path), secrets)?)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { players } => {
            let store = load_wordstore(&cli.wordlist, cli.secrets.as_ref())?;
            let mut stats = StatsStore::open(cli.stats_dir)?;
            run_play(&store, &mut stats, &players)
        }
        Commands::Stats { player, games } => {
            let mut stats = StatsStore::open(cli.stats_dir)?;
            match (player, games) {
                (Some(player), false) => run_player_stats(&mut stats, &player),
                (None, true) => {
                    run_games_stats(&stats);
                    Ok(())
                }
                _ => {
                    anyhow::bail!("pass a player name, or --games for the global view")
                }
            }
        }
        Commands::Score { guess, secret } => run_score(&guess, &secret),
    }
}
