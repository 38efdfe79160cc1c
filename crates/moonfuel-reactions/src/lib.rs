//! Moonfuel Reactions -- ORE requirements over a chemical-reaction graph.
//!
//! Every chemical except ORE is produced by exactly one reaction, which
//! consumes fixed quantities of other chemicals and yields a fixed batch.
//! Reactions run in whole batches, so partial demand leaves surplus.
//!
//! # Pipeline
//!
//! 1. **Parse** -- [`parse::parse_reactions`] reads `7 A, 1 B => 1 C` lines.
//! 2. **Build** -- [`registry::ReactionBookBuilder`] interns chemical names,
//!    checks that every chemical has a single producer, and caches a
//!    topological order from the [`graph::ReactionGraph`].
//! 3. **Plan** -- [`registry::ReactionBook::plan`] resolves FUEL demand down
//!    to ORE in that order.
//! 4. **Search** -- [`registry::ReactionBook::max_fuel`] finds the most FUEL
//!    a given ORE budget can make.
//!
//! ```rust,ignore
//! let book: ReactionBook = input.parse()?;
//! let ore = book.ore_for_fuel(1)?;
//! let fuel = book.max_fuel(DEFAULT_ORE_BUDGET, MaxFuelStrategy::BinarySearch)?;
//! ```

pub mod error;
pub mod graph;
pub mod id;
pub mod max_fuel;
pub mod parse;
pub mod plan;
pub mod registry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ReactionError;
pub use id::{ChemicalId, FUEL, ORE};
pub use max_fuel::{DEFAULT_ORE_BUDGET, MaxFuelStrategy};
pub use plan::ProductionPlan;
pub use registry::{Ingredient, Reaction, ReactionBook, ReactionBookBuilder};
