//! `moonfuel`: command-line front end for the moon simulator and the
//! reaction solver.
//!
//! # Commands
//!
//! - `moonfuel moons` - total energy after N steps and the orbital period
//! - `moonfuel reactions` - ORE cost of FUEL and max FUEL for an ORE budget
//!
//! Settings come from built-in defaults, then the optional `--config` file
//! (RON, TOML, or JSON), then command-line flags.

mod commands;
mod logging;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moonfuel_data::{RunConfig, load_config};

use commands::moons::MoonsArgs;
use commands::reactions::ReactionsArgs;

#[derive(Parser)]
#[command(
    name = "moonfuel",
    version,
    about = "Moon orbit simulator and ORE-to-FUEL reaction solver"
)]
struct Cli {
    /// Run configuration file (.ron, .toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate moons and report energy and orbital period.
    Moons(MoonsArgs),
    /// Resolve reactions and report ORE cost and max FUEL.
    Reactions(ReactionsArgs),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => RunConfig::default(),
    };

    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Moons(args) => commands::moons::run(&args.merge(config.moons), cli.json, &mut out),
        Command::Reactions(args) => {
            commands::reactions::run(&args.merge(config.reactions), cli.json, &mut out)
        }
    }
}
