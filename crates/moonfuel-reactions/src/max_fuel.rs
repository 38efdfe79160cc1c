//! Largest FUEL output for a fixed ORE budget.
//!
//! `ore_for_fuel` is monotone in the FUEL amount, so the answer is the last
//! feasible point of a sorted predicate. Making `n` FUEL in one plan never
//! costs more than `n` separate single-FUEL plans, so
//! `budget / ore_for_fuel(1)` is always feasible and serves as a lower bound.

use serde::{Deserialize, Serialize};

use crate::error::ReactionError;
use crate::registry::ReactionBook;

/// ORE available when no budget is given.
pub const DEFAULT_ORE_BUDGET: u64 = 1_000_000_000_000;

/// Search used by [`ReactionBook::max_fuel`]. Both return the same answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFuelStrategy {
    /// Exponential probe for an infeasible bound, then bisection.
    #[default]
    BinarySearch,
    /// Grow the FUEL amount by whatever the leftover ORE would buy at the
    /// single-FUEL price until nothing more fits. Takes many steps when
    /// batching makes bulk FUEL much cheaper than a single unit.
    Refine,
}

impl ReactionBook {
    /// Most FUEL that `ore_budget` ORE can produce.
    pub fn max_fuel(
        &self,
        ore_budget: u64,
        strategy: MaxFuelStrategy,
    ) -> Result<u64, ReactionError> {
        let per_fuel = self.ore_for_fuel(1)?;
        if per_fuel == 0 {
            return Err(ReactionError::Unbounded);
        }
        if ore_budget < per_fuel {
            return Ok(0);
        }

        let fuel = match strategy {
            MaxFuelStrategy::BinarySearch => self.bisect_fuel(ore_budget, per_fuel)?,
            MaxFuelStrategy::Refine => self.refine_fuel(ore_budget, per_fuel)?,
        };
        tracing::debug!(ore_budget, per_fuel, fuel, ?strategy, "max fuel");
        Ok(fuel)
    }

    /// `Some(ore)` when `fuel` fits the budget. Plans too large for u64 count
    /// as over budget.
    fn ore_within(&self, fuel: u64, ore_budget: u64) -> Result<Option<u64>, ReactionError> {
        match self.ore_for_fuel(fuel) {
            Ok(ore) if ore <= ore_budget => Ok(Some(ore)),
            Ok(_) | Err(ReactionError::Overflow { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn feasible(&self, fuel: u64, ore_budget: u64) -> Result<bool, ReactionError> {
        self.ore_within(fuel, ore_budget).map(|o| o.is_some())
    }

    fn bisect_fuel(&self, ore_budget: u64, per_fuel: u64) -> Result<u64, ReactionError> {
        // Invariant: `lo` is feasible, `hi` is not.
        let mut lo = ore_budget / per_fuel;
        let mut hi = lo.saturating_mul(2);
        while self.feasible(hi, ore_budget)? {
            if hi == u64::MAX {
                return Ok(hi);
            }
            lo = hi;
            hi = hi.saturating_mul(2);
        }
        tracing::trace!(lo, hi, "bisecting");

        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.feasible(mid, ore_budget)? {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(lo)
    }

    fn refine_fuel(&self, ore_budget: u64, per_fuel: u64) -> Result<u64, ReactionError> {
        // The rounded-up first guess is at most one above the feasible floor.
        let mut fuel = ore_budget.div_ceil(per_fuel);
        let mut used = loop {
            match self.ore_within(fuel, ore_budget)? {
                Some(ore) => break ore,
                None => fuel -= 1,
            }
        };

        loop {
            let extra = (ore_budget - used) / per_fuel;
            if extra == 0 {
                break;
            }
            fuel += extra;
            used = self.ore_for_fuel(fuel)?;
        }

        // Surplus can make the next FUEL cheaper than the single-FUEL price.
        while let Some(ore) = self.ore_within(fuel + 1, ore_budget)? {
            fuel += 1;
            used = ore;
        }
        tracing::trace!(fuel, used, "refined");
        Ok(fuel)
    }
}
