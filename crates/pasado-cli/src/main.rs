//! pasado CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pasado", version, about = "Spanish past-tense drills and daily vocabulary")]
struct Cli {
    /// Directory holding stats and history blobs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive practice drill
    Drill {
        /// Path to an exercise pool file or directory
        #[arg(long)]
        pool: PathBuf,

        /// Number of exercises to drill
        #[arg(long, default_value = "10")]
        exercises: usize,

        /// Accept answers without accent marks
        #[arg(long)]
        lenient: bool,
    },

    /// Run an interactive paired-sentence contrast drill
    Contrast {
        /// Path to an exercise pool file or directory
        #[arg(long)]
        pool: PathBuf,

        /// Number of contrast pairs to drill
        #[arg(long, default_value = "5")]
        exercises: usize,

        /// Accept answers without accent marks
        #[arg(long)]
        lenient: bool,
    },

    /// Show mastery statistics
    Stats,

    /// Delete all recorded mastery statistics
    Reset,

    /// Validate exercise pool files
    Validate {
        /// Path to a pool file or directory
        #[arg(long)]
        pool: PathBuf,
    },

    /// Pick today's vocabulary words
    Daily {
        /// Path to verbs.json
        #[arg(long)]
        verbs: PathBuf,

        /// Path to adjectives.json
        #[arg(long)]
        adjectives: PathBuf,

        /// Select words without recording them as used
        #[arg(long)]
        dry_run: bool,
    },

    /// Apply difficulty feedback ("too easy", "hard", "perfect", ...)
    Feedback {
        /// Free-text feedback
        text: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pasado=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = commands::resolve_data_dir(cli.data_dir);

    let result = match cli.command {
        Commands::Drill {
            pool,
            exercises,
            lenient,
        } => commands::drill::execute(pool, exercises, lenient, data_dir),
        Commands::Contrast {
            pool,
            exercises,
            lenient,
        } => commands::contrast::execute(pool, exercises, lenient, data_dir),
        Commands::Stats => commands::stats::execute(data_dir),
        Commands::Reset => commands::reset::execute(data_dir),
        Commands::Validate { pool } => commands::validate::execute(pool),
        Commands::Daily {
            verbs,
            adjectives,
            dry_run,
        } => commands::daily::execute(verbs, adjectives, dry_run, data_dir),
        Commands::Feedback { text } => commands::feedback::execute(text, data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
