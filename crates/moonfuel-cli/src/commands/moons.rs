//! `moonfuel moons`: energy after N steps and the orbital period.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use moonfuel_data::{MoonsConfig, read_input};
use moonfuel_moons::{EnergyReport, MoonSystem, PeriodReport};
use serde::Serialize;

#[derive(Debug, Default, clap::Args)]
pub struct MoonsArgs {
    /// Moon listing, one `<x=.., y=.., z=..>` per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Steps to simulate before measuring energy
    #[arg(short, long)]
    pub steps: Option<u64>,

    /// Skip the energy report
    #[arg(long)]
    pub no_energy: bool,

    /// Skip the period search
    #[arg(long)]
    pub no_period: bool,

    /// Give up on an axis after this many steps
    #[arg(long)]
    pub period_limit: Option<u64>,
}

impl MoonsArgs {
    /// Apply the flags that were given on top of `config`.
    pub fn merge(&self, mut config: MoonsConfig) -> MoonsConfig {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if self.no_energy {
            config.energy = false;
        }
        if self.no_period {
            config.period = false;
        }
        if self.period_limit.is_some() {
            config.period_limit = self.period_limit;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoonsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodReport>,
}

/// Answer both questions for the system in `text`.
///
/// The period is measured from the parsed starting state, not from the
/// state reached after the energy simulation.
pub fn solve(text: &str, config: &MoonsConfig) -> Result<MoonsOutput> {
    let initial: MoonSystem = text.parse().context("parse moon listing")?;
    tracing::debug!(moons = initial.len(), "moon system loaded");

    let energy = config.energy.then(|| {
        let mut system = initial.clone();
        system.simulate(config.steps);
        system.energy()
    });

    let period = if config.period {
        Some(
            initial
                .period(config.period_limit)
                .context("find orbital period")?,
        )
    } else {
        None
    };

    Ok(MoonsOutput { energy, period })
}

pub fn render(output: &MoonsOutput, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output).context("serialize moons output")?;
        writeln!(out)?;
        return Ok(());
    }
    if let Some(energy) = &output.energy {
        writeln!(out, "Total energy of the system is: {}", energy.total)?;
    }
    if let Some(period) = &output.period {
        writeln!(
            out,
            "Steps after every planet returns to its initial state: {}",
            period.steps
        )?;
    }
    Ok(())
}

pub fn run(config: &MoonsConfig, json: bool, out: &mut impl Write) -> Result<()> {
    let text = read_input(&config.input).context("read moon input")?;
    let output = solve(&text, config)?;
    render(&output, json, out)
}
