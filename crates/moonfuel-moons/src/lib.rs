//! Moonfuel Moons -- integer n-body simulation on a 3-D lattice.
//!
//! Every step applies a simplified gravity: for each pair of moons and each
//! axis, the moon with the smaller coordinate gains +1 velocity and the
//! other gains -1. Positions then advance by velocity.
//!
//! # Key Types
//!
//! - [`system::MoonSystem`] -- the simulated bodies and the motion step.
//! - [`energy::EnergyReport`] -- potential, kinetic, and total energy.
//! - [`period::PeriodReport`] -- steps until the system repeats, found per
//!   axis and combined by least common multiple.
//! - [`axis::AxisState`] -- one axis of the system, stepped in isolation.
//!
//! ```rust,ignore
//! let mut system: MoonSystem = input.parse()?;
//! let period = system.period(None)?;
//! system.simulate(1000);
//! println!("{}", system.total_energy());
//! ```

pub mod axis;
pub mod energy;
pub mod error;
pub mod parse;
pub mod period;
pub mod system;
pub mod vector;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use energy::{EnergyReport, MoonEnergy};
pub use error::MoonError;
pub use period::PeriodReport;
pub use system::{Moon, MoonSystem};
pub use vector::{Axis, Vec3};
