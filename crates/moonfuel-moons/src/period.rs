//! Orbital period detection.
//!
//! The motion step is reversible (every state has exactly one predecessor),
//! so the first state to repeat is always the starting one. Each axis is
//! searched on its own and the system period is the least common multiple
//! of the three axis periods.

use num_integer::Integer;
use serde::Serialize;

use crate::axis::AxisState;
use crate::error::MoonError;
use crate::system::MoonSystem;
use crate::vector::Axis;

/// Per-axis periods and the combined system period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    /// Steps until each axis first returns to its starting state, in
    /// `Axis::ALL` order.
    pub axes: [u64; 3],
    /// Steps until the whole system first returns to its starting state.
    pub steps: u64,
}

impl PeriodReport {
    pub fn axis(&self, axis: Axis) -> u64 {
        self.axes[axis.index()]
    }
}

/// Steps until `initial` recurs. `limit` caps the search.
pub fn axis_period(axis: Axis, initial: &AxisState, limit: Option<u64>) -> Result<u64, MoonError> {
    let mut state = initial.clone();
    let mut steps: u64 = 0;
    loop {
        state.step();
        steps += 1;
        if state == *initial {
            tracing::debug!(%axis, steps, "axis period found");
            return Ok(steps);
        }
        if let Some(limit) = limit.filter(|&l| steps >= l) {
            return Err(MoonError::PeriodNotFound { axis, limit });
        }
    }
}

/// Least common multiple, or `None` if it does not fit in a u64.
pub fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / a.gcd(&b)).checked_mul(b)
}

/// Combine per-axis periods into a system period.
pub fn combine_periods(axes: [u64; 3]) -> Result<PeriodReport, MoonError> {
    let steps = axes
        .iter()
        .try_fold(1u64, |acc, &p| checked_lcm(acc, p))
        .ok_or(MoonError::PeriodOverflow { axes })?;
    Ok(PeriodReport { axes, steps })
}

impl MoonSystem {
    /// Steps until the system returns to its current state. The system
    /// itself is left untouched.
    pub fn period(&self, limit: Option<u64>) -> Result<PeriodReport, MoonError> {
        let axes = self.axis_periods(limit)?;
        let report = combine_periods(axes)?;
        tracing::debug!(?axes, steps = report.steps, "system period");
        Ok(report)
    }

    #[cfg(not(feature = "parallel"))]
    fn axis_periods(&self, limit: Option<u64>) -> Result<[u64; 3], MoonError> {
        let mut axes = [0u64; 3];
        for axis in Axis::ALL {
            axes[axis.index()] = axis_period(axis, &self.axis_state(axis), limit)?;
        }
        Ok(axes)
    }

    #[cfg(feature = "parallel")]
    fn axis_periods(&self, limit: Option<u64>) -> Result<[u64; 3], MoonError> {
        use rayon::prelude::*;

        let found: Vec<u64> = Axis::ALL
            .par_iter()
            .map(|&axis| axis_period(axis, &self.axis_state(axis), limit))
            .collect::<Result<_, _>>()?;
        let mut axes = [0u64; 3];
        axes.copy_from_slice(&found);
        Ok(axes)
    }
}
