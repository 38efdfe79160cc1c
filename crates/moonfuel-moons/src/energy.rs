//! Per-moon and system energy breakdown.

use serde::Serialize;

use crate::system::MoonSystem;

/// Energy of a single moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonEnergy {
    pub potential: i64,
    pub kinetic: i64,
    /// `potential * kinetic`.
    pub total: i64,
}

/// Energy table for a whole system at a given tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyReport {
    pub tick: u64,
    pub moons: Vec<MoonEnergy>,
    pub total: i64,
}

impl MoonSystem {
    pub fn energy(&self) -> EnergyReport {
        let moons: Vec<MoonEnergy> = self
            .moons()
            .iter()
            .map(|m| MoonEnergy {
                potential: m.potential_energy(),
                kinetic: m.kinetic_energy(),
                total: m.total_energy(),
            })
            .collect();
        let total = moons.iter().map(|e| e.total).fold(0, i64::saturating_add);
        EnergyReport {
            tick: self.tick(),
            moons,
            total,
        }
    }
}
