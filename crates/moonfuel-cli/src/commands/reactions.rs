//! `moonfuel reactions`: ORE cost of FUEL and the most FUEL a budget buys.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use moonfuel_data::{ReactionsConfig, read_input};
use moonfuel_reactions::{MaxFuelStrategy, ReactionBook};
use serde::Serialize;

/// Command-line spelling of [`MaxFuelStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Exponential probe then bisection; fast on any input
    BinarySearch,
    /// Iterative refinement; slow when bulk FUEL is far cheaper than one unit
    Refine,
}

impl From<StrategyArg> for MaxFuelStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::BinarySearch => MaxFuelStrategy::BinarySearch,
            StrategyArg::Refine => MaxFuelStrategy::Refine,
        }
    }
}

#[derive(Debug, Default, clap::Args)]
pub struct ReactionsArgs {
    /// Reaction listing, one `N CHEM, .. => N CHEM` per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// FUEL to price in ORE
    #[arg(short, long)]
    pub fuel: Option<u64>,

    /// ORE available for the max-FUEL search
    #[arg(short, long)]
    pub ore: Option<u64>,

    /// Search used for the max-FUEL answer. `refine` can take seconds when
    /// batching makes bulk FUEL much cheaper than a single unit
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

impl ReactionsArgs {
    pub fn merge(&self, mut config: ReactionsConfig) -> ReactionsConfig {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(fuel) = self.fuel {
            config.fuel = fuel;
        }
        if let Some(ore) = self.ore {
            config.ore_budget = ore;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionsOutput {
    pub fuel: u64,
    pub ore: u64,
    pub ore_budget: u64,
    pub strategy: MaxFuelStrategy,
    pub max_fuel: u64,
}

pub fn solve(text: &str, config: &ReactionsConfig) -> Result<ReactionsOutput> {
    let book: ReactionBook = text.parse().context("load reaction book")?;
    tracing::debug!(
        chemicals = book.chemical_count(),
        reactions = book.reaction_count(),
        "reaction book loaded"
    );

    let ore = book
        .ore_for_fuel(config.fuel)
        .with_context(|| format!("price {} FUEL", config.fuel))?;
    let max_fuel = book
        .max_fuel(config.ore_budget, config.strategy)
        .with_context(|| format!("search max FUEL for {} ORE", config.ore_budget))?;

    Ok(ReactionsOutput {
        fuel: config.fuel,
        ore,
        ore_budget: config.ore_budget,
        strategy: config.strategy,
        max_fuel,
    })
}

pub fn render(output: &ReactionsOutput, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output).context("serialize reactions output")?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(
        out,
        "Amount of ORE required to create {} FUEL: {}",
        output.fuel, output.ore
    )?;
    writeln!(
        out,
        "Maximal amount of FUEL, which can be produced from {} ORE: {}",
        output.ore_budget, output.max_fuel
    )?;
    Ok(())
}

pub fn run(config: &ReactionsConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let text = read_input(&config.input).context("read reaction input")?;
    let output = solve(&text, config)?;
    render(&output, json, out)
}
