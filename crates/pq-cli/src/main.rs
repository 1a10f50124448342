//! CLI driver for the Progress Quest engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pq",
    about = "Progress Quest: a role-playing game that plays itself",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a new character and write its save file
    New {
        /// Character name (default: a generated one)
        name: Option<String>,

        /// Race, as listed in the content tables (default: random)
        #[arg(long)]
        race: Option<String>,

        /// Class, as listed in the content tables (default: random)
        #[arg(long)]
        class: Option<String>,

        /// RNG seed for deterministic rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Save file to write
        #[arg(short, long, default_value = "character.pq.json")]
        output: PathBuf,

        /// Content tables JSON file (default: built-in tables)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Overwrite an existing save file
        #[arg(short, long)]
        force: bool,
    },

    /// Let the character play for a number of ticks and save the result
    Run {
        /// Save file to advance
        save: PathBuf,

        /// Number of clock ticks to run
        #[arg(short, long, default_value = "100")]
        ticks: u64,

        /// Milliseconds of game time per tick
        #[arg(long, default_value = "1000")]
        tick_ms: u64,

        /// RNG seed, mixed with the completed task count
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Content tables JSON file (default: built-in tables)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Print every recorded event
        #[arg(short, long)]
        events: bool,
    },

    /// Print the character sheet of a save file
    Show {
        /// Save file to read
        save: PathBuf,
    },

    /// Print the built-in content tables as JSON
    Tables {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Engine diagnostics go to stderr. `RUST_LOG` wins unless `--verbose` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::New {
            name,
            race,
            class,
            seed,
            output,
            content,
            force,
        } => commands::new::run(&commands::new::NewOptions {
            name,
            race,
            class,
            seed,
            output,
            content,
            force,
        }),
        Commands::Run {
            save,
            ticks,
            tick_ms,
            seed,
            content,
            events,
        } => commands::run::run(&save, ticks, tick_ms, seed, content.as_deref(), events),
        Commands::Show { save } => commands::show::run(&save),
        Commands::Tables { output } => commands::tables::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
