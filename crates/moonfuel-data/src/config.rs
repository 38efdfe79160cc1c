use std::path::{Path, PathBuf};

use moonfuel_reactions::{DEFAULT_ORE_BUDGET, MaxFuelStrategy};
use serde::{Deserialize, Serialize};

use crate::loader::{ConfigError, deserialize_file};

/// Settings for both solvers. Missing sections and fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub moons: MoonsConfig,
    pub reactions: ReactionsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoonsConfig {
    /// Moon listing, one `<x=.., y=.., z=..>` per line.
    pub input: PathBuf,
    /// Steps to simulate before reporting energy.
    pub steps: u64,
    /// Report total energy after `steps`.
    pub energy: bool,
    /// Report the orbital period.
    pub period: bool,
    /// Per-axis cap on the period search. Unbounded when absent.
    pub period_limit: Option<u64>,
}

impl Default for MoonsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input_day12.txt"),
            steps: 1000,
            energy: true,
            period: true,
            period_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReactionsConfig {
    /// Reaction listing, one `N CHEM, .. => N CHEM` per line.
    pub input: PathBuf,
    /// FUEL to price in ORE.
    pub fuel: u64,
    /// ORE available for the max-FUEL search.
    pub ore_budget: u64,
    pub strategy: MaxFuelStrategy,
}

impl Default for ReactionsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input_day14.txt"),
            fuel: 1,
            ore_budget: DEFAULT_ORE_BUDGET,
            strategy: MaxFuelStrategy::BinarySearch,
        }
    }
}

/// Load a run config from a RON, TOML, or JSON file.
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let config: RunConfig = deserialize_file(path)?;
    tracing::debug!(path = %path.display(), ?config, "loaded run config");
    Ok(config)
}
