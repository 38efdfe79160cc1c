use serde::{Deserialize, Serialize};

/// Raw material that is never produced by a reaction.
pub const ORE: &str = "ORE";

/// The chemical every production plan is built towards.
pub const FUEL: &str = "FUEL";

/// Identifies a chemical in a [`ReactionBook`](crate::registry::ReactionBook).
/// Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChemicalId(pub u32);

impl ChemicalId {
    /// ORE is always interned first.
    pub const ORE: ChemicalId = ChemicalId(0);
    /// FUEL is always interned second.
    pub const FUEL: ChemicalId = ChemicalId(1);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
