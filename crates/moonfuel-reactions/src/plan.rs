//! Resolving FUEL demand down to ORE.
//!
//! Chemicals are visited in the book's topological order, so by the time a
//! chemical is reached every consumer has already added its demand. Each
//! chemical's reaction then runs just often enough to cover that demand,
//! and whatever a run makes beyond it is surplus.

use serde::Serialize;

use crate::error::ReactionError;
use crate::id::ChemicalId;
use crate::registry::ReactionBook;

/// How a given amount of FUEL gets made.
///
/// `demand`, `runs`, and `surplus` are indexed by [`ChemicalId::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionPlan {
    pub fuel: u64,
    pub ore: u64,
    /// Units of each chemical consumed (FUEL counts the requested amount).
    pub demand: Vec<u64>,
    /// Times each chemical's reaction runs. Zero for ORE.
    pub runs: Vec<u64>,
    /// Units produced but never consumed.
    pub surplus: Vec<u64>,
}

impl ProductionPlan {
    pub fn demand_of(&self, chemical: ChemicalId) -> u64 {
        self.demand.get(chemical.index()).copied().unwrap_or(0)
    }

    pub fn runs_of(&self, chemical: ChemicalId) -> u64 {
        self.runs.get(chemical.index()).copied().unwrap_or(0)
    }

    pub fn surplus_of(&self, chemical: ChemicalId) -> u64 {
        self.surplus.get(chemical.index()).copied().unwrap_or(0)
    }
}

impl ReactionBook {
    /// Work out every reaction run needed to make `fuel` FUEL.
    pub fn plan(&self, fuel: u64) -> Result<ProductionPlan, ReactionError> {
        let overflow = || ReactionError::Overflow { fuel };
        let n = self.chemical_count();
        let mut demand = vec![0u64; n];
        let mut runs = vec![0u64; n];
        let mut surplus = vec![0u64; n];
        demand[ChemicalId::FUEL.index()] = fuel;

        for &chemical in self.order() {
            let need = demand[chemical.index()];
            if need == 0 {
                continue;
            }
            let Some(reaction) = self.producer(chemical) else {
                // ORE
                continue;
            };

            let per_run = reaction.output.quantity;
            let times = need.div_ceil(per_run);
            runs[chemical.index()] = times;
            surplus[chemical.index()] = times.checked_mul(per_run).ok_or_else(overflow)? - need;

            for input in &reaction.inputs {
                let extra = times.checked_mul(input.quantity).ok_or_else(overflow)?;
                let slot = &mut demand[input.chemical.index()];
                *slot = slot.checked_add(extra).ok_or_else(overflow)?;
            }
        }

        Ok(ProductionPlan {
            fuel,
            ore: demand[ChemicalId::ORE.index()],
            demand,
            runs,
            surplus,
        })
    }

    /// ORE needed to produce `fuel` FUEL.
    pub fn ore_for_fuel(&self, fuel: u64) -> Result<u64, ReactionError> {
        self.plan(fuel).map(|p| p.ore)
    }
}
