use std::collections::HashMap;
use std::str::FromStr;

use crate::error::ReactionError;
use crate::graph::ReactionGraph;
use crate::id::{ChemicalId, FUEL, ORE};
use crate::parse::{ParsedReaction, parse_reactions};

/// A reaction input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub chemical: ChemicalId,
    pub quantity: u64,
}

/// A reaction definition: consumes every input to make one batch of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub inputs: Vec<Ingredient>,
    pub output: Ingredient,
}

/// Builder for constructing an immutable [`ReactionBook`].
///
/// ORE and FUEL are interned on construction, so they always have the ids
/// [`ChemicalId::ORE`] and [`ChemicalId::FUEL`].
#[derive(Debug)]
pub struct ReactionBookBuilder {
    names: Vec<String>,
    name_to_id: HashMap<String, ChemicalId>,
    reactions: Vec<Reaction>,
}

impl Default for ReactionBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionBookBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            names: Vec::new(),
            name_to_id: HashMap::new(),
            reactions: Vec::new(),
        };
        builder.intern(ORE);
        builder.intern(FUEL);
        builder
    }

    /// Return the id for `name`, registering it if it is new.
    pub fn intern(&mut self, name: &str) -> ChemicalId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = ChemicalId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.name_to_id.insert(name.to_string(), id);
        id
    }

    pub fn chemical_id(&self, name: &str) -> Option<ChemicalId> {
        self.name_to_id.get(name).copied()
    }

    /// Register a reaction from `(quantity, name)` pairs.
    pub fn register_reaction(&mut self, inputs: &[(u64, &str)], output: (u64, &str)) -> usize {
        let inputs = inputs
            .iter()
            .map(|&(quantity, name)| Ingredient {
                chemical: self.intern(name),
                quantity,
            })
            .collect();
        let output = Ingredient {
            chemical: self.intern(output.1),
            quantity: output.0,
        };
        self.reactions.push(Reaction { inputs, output });
        self.reactions.len() - 1
    }

    pub fn register_parsed(&mut self, parsed: &ParsedReaction) -> usize {
        let inputs: Vec<(u64, &str)> = parsed
            .inputs
            .iter()
            .map(|t| (t.quantity, t.chemical.as_str()))
            .collect();
        self.register_reaction(
            &inputs,
            (parsed.output.quantity, parsed.output.chemical.as_str()),
        )
    }

    /// Validate and freeze.
    ///
    /// Every chemical other than ORE must be produced by exactly one reaction,
    /// and the reactions must not form a cycle.
    pub fn build(self) -> Result<ReactionBook, ReactionError> {
        let mut producers: Vec<Option<usize>> = vec![None; self.names.len()];
        for (idx, reaction) in self.reactions.iter().enumerate() {
            let out = reaction.output.chemical;
            if out == ChemicalId::ORE {
                return Err(ReactionError::OreProduced);
            }
            if reaction.inputs.is_empty() {
                return Err(ReactionError::EmptyReaction {
                    chemical: self.names[out.index()].clone(),
                });
            }
            if producers[out.index()].replace(idx).is_some() {
                return Err(ReactionError::DuplicateProducer {
                    chemical: self.names[out.index()].clone(),
                });
            }
        }

        if let Some(missing) = producers
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, p)| p.is_none())
            .map(|(i, _)| i)
        {
            return Err(ReactionError::NoProducer {
                chemical: self.names[missing].clone(),
            });
        }

        let mut graph = ReactionGraph::new(self.names.len());
        for reaction in &self.reactions {
            for input in &reaction.inputs {
                graph.connect(reaction.output.chemical, input.chemical)?;
            }
        }
        let order = graph.topological_order()?;

        tracing::debug!(
            chemicals = self.names.len(),
            reactions = self.reactions.len(),
            "reaction book built"
        );

        Ok(ReactionBook {
            names: self.names,
            name_to_id: self.name_to_id,
            reactions: self.reactions,
            producers,
            order,
        })
    }
}

/// Immutable, validated set of reactions. Frozen after build().
#[derive(Debug, Clone)]
pub struct ReactionBook {
    names: Vec<String>,
    name_to_id: HashMap<String, ChemicalId>,
    reactions: Vec<Reaction>,
    /// Index into `reactions` of the producer of each chemical. `None` only
    /// for ORE.
    producers: Vec<Option<usize>>,
    /// Consumers before the chemicals they consume; FUEL first, ORE last.
    order: Vec<ChemicalId>,
}

impl ReactionBook {
    pub fn chemical_id(&self, name: &str) -> Option<ChemicalId> {
        self.name_to_id.get(name).copied()
    }

    pub fn chemical_name(&self, id: ChemicalId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn chemical_count(&self) -> usize {
        self.names.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// The reaction producing `chemical`, if any.
    pub fn producer(&self, chemical: ChemicalId) -> Option<&Reaction> {
        self.producers
            .get(chemical.index())
            .copied()
            .flatten()
            .map(|idx| &self.reactions[idx])
    }

    pub fn order(&self) -> &[ChemicalId] {
        &self.order
    }
}

impl FromStr for ReactionBook {
    type Err = ReactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = ReactionBookBuilder::new();
        for parsed in parse_reactions(s)? {
            builder.register_parsed(&parsed);
        }
        builder.build()
    }
}
