use crate::graph::GraphError;
use crate::parse::ParseError;

/// Errors raised while building a reaction book or planning production.
#[derive(Debug, thiserror::Error)]
pub enum ReactionError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("{chemical} is produced by more than one reaction")]
    DuplicateProducer { chemical: String },
    #[error("no reaction produces {chemical}")]
    NoProducer { chemical: String },
    #[error("ORE cannot be produced by a reaction")]
    OreProduced,
    #[error("reaction producing {chemical} has no inputs")]
    EmptyReaction { chemical: String },
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("arithmetic overflow while planning {fuel} FUEL")]
    Overflow { fuel: u64 },
    #[error("FUEL needs no ORE, so the maximum is unbounded")]
    Unbounded,
}
