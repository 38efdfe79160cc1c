//! The moon system and its motion step.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::{AxisState, gravity};
use crate::error::MoonError;
use crate::parse::parse_moons;
use crate::vector::{Axis, Vec3};

/// A single body: lattice position plus velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Moon {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Moon {
    /// A moon at `position` with zero velocity.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    /// Sum of absolute position components.
    pub fn potential_energy(&self) -> i64 {
        self.position.manhattan()
    }

    /// Sum of absolute velocity components.
    pub fn kinetic_energy(&self) -> i64 {
        self.velocity.manhattan()
    }

    pub fn total_energy(&self) -> i64 {
        self.potential_energy().saturating_mul(self.kinetic_energy())
    }
}

/// A set of moons advanced together in discrete steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonSystem {
    moons: Vec<Moon>,
    /// Number of steps simulated since construction.
    tick: u64,
}

impl MoonSystem {
    pub fn new(moons: Vec<Moon>) -> Self {
        Self { moons, tick: 0 }
    }

    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    pub fn len(&self) -> usize {
        self.moons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moons.is_empty()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one motion step.
    ///
    /// Gravity is applied to every unordered pair first, using positions from
    /// before the step; only then does every moon move by its new velocity.
    pub fn step(&mut self) {
        let n = self.moons.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.moons[i].position, self.moons[j].position);
                for axis in Axis::ALL {
                    let pull = gravity(a[axis], b[axis]);
                    self.moons[i].velocity[axis] += pull;
                    self.moons[j].velocity[axis] -= pull;
                }
            }
        }

        for moon in &mut self.moons {
            moon.position += moon.velocity;
        }
        self.tick += 1;
    }

    /// Run `steps` motion steps.
    pub fn simulate(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
        tracing::trace!(tick = self.tick, moons = self.moons.len(), "simulated");
    }

    /// Project one axis of every moon out of the system.
    pub fn axis_state(&self, axis: Axis) -> AxisState {
        AxisState {
            positions: self.moons.iter().map(|m| m.position[axis]).collect(),
            velocities: self.moons.iter().map(|m| m.velocity[axis]).collect(),
        }
    }

    /// Sum of every moon's total energy.
    pub fn total_energy(&self) -> i64 {
        self.moons
            .iter()
            .map(Moon::total_energy)
            .fold(0, i64::saturating_add)
    }
}

impl FromStr for MoonSystem {
    type Err = MoonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moons(s).map(Self::new)
    }
}

impl FromIterator<Moon> for MoonSystem {
    fn from_iter<T: IntoIterator<Item = Moon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
