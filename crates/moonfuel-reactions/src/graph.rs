//! Dependency graph over chemicals.
//!
//! Edges run from a reaction's output to each of its inputs. A topological
//! order therefore lists every chemical after all of the chemicals that
//! consume it, which is the order demand has to be resolved in.

use std::collections::VecDeque;

use crate::id::ChemicalId;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("cycle detected in reaction graph ({} chemicals unresolved)", remaining.len())]
    CycleDetected { remaining: Vec<ChemicalId> },
    #[error("chemical not found: {0:?}")]
    ChemicalNotFound(ChemicalId),
}

// ---------------------------------------------------------------------------
// ReactionGraph
// ---------------------------------------------------------------------------

/// Adjacency lists keyed by `ChemicalId` index.
#[derive(Debug, Clone, Default)]
pub struct ReactionGraph {
    /// `inputs[c]` lists the chemicals consumed to produce `c`, one entry per
    /// input term.
    inputs: Vec<Vec<ChemicalId>>,
}

impl ReactionGraph {
    /// Graph over `chemical_count` chemicals with no edges.
    pub fn new(chemical_count: usize) -> Self {
        Self {
            inputs: vec![Vec::new(); chemical_count],
        }
    }

    /// Record that producing `output` consumes `input`.
    pub fn connect(&mut self, output: ChemicalId, input: ChemicalId) -> Result<(), GraphError> {
        for id in [output, input] {
            if id.index() >= self.inputs.len() {
                return Err(GraphError::ChemicalNotFound(id));
            }
        }
        self.inputs[output.index()].push(input);
        Ok(())
    }

    /// Consumers-first ordering via Kahn's algorithm. Ties are broken by
    /// `ChemicalId` so the order is deterministic.
    pub fn topological_order(&self) -> Result<Vec<ChemicalId>, GraphError> {
        let count = self.inputs.len();

        let mut in_degree = vec![0usize; count];
        for inputs in &self.inputs {
            for input in inputs {
                in_degree[input.index()] += 1;
            }
        }

        let mut queue: VecDeque<ChemicalId> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(i, _)| ChemicalId(i as u32))
            .collect();

        let mut order = Vec::with_capacity(count);
        while let Some(chemical) = queue.pop_front() {
            order.push(chemical);
            for input in &self.inputs[chemical.index()] {
                let deg = &mut in_degree[input.index()];
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(*input);
                }
            }
        }

        if order.len() != count {
            let remaining = (0..count)
                .filter(|&i| in_degree[i] > 0)
                .map(|i| ChemicalId(i as u32))
                .collect();
            return Err(GraphError::CycleDetected { remaining });
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: u32) -> ChemicalId {
        ChemicalId(i)
    }

    fn position(order: &[ChemicalId], c: ChemicalId) -> usize {
        order.iter().position(|&x| x == c).unwrap()
    }

    #[test]
    fn linear_chain_orders_consumers_first() {
        // 2 <- 1 <- 0 : producing 2 consumes 1, producing 1 consumes 0.
        let mut g = ReactionGraph::new(3);
        g.connect(id(2), id(1)).unwrap();
        g.connect(id(1), id(0)).unwrap();

        assert_eq!(g.topological_order().unwrap(), vec![id(2), id(1), id(0)]);
    }

    #[test]
    fn diamond_keeps_shared_input_last() {
        let mut g = ReactionGraph::new(4);
        g.connect(id(3), id(1)).unwrap();
        g.connect(id(3), id(2)).unwrap();
        g.connect(id(1), id(0)).unwrap();
        g.connect(id(2), id(0)).unwrap();

        let order = g.topological_order().unwrap();
        assert_eq!(order[0], id(3));
        assert_eq!(order[3], id(0));
        assert!(position(&order, id(1)) < position(&order, id(0)));
        assert!(position(&order, id(2)) < position(&order, id(0)));
    }

    #[test]
    fn repeated_input_terms_are_counted() {
        let mut g = ReactionGraph::new(2);
        g.connect(id(1), id(0)).unwrap();
        g.connect(id(1), id(0)).unwrap();
        assert_eq!(g.topological_order().unwrap(), vec![id(1), id(0)]);
    }

    #[test]
    fn cycle_detection() {
        let mut g = ReactionGraph::new(4);
        g.connect(id(3), id(1)).unwrap();
        g.connect(id(1), id(2)).unwrap();
        g.connect(id(2), id(1)).unwrap();
        g.connect(id(2), id(0)).unwrap();

        match g.topological_order() {
            Err(GraphError::CycleDetected { remaining }) => {
                assert!(remaining.contains(&id(1)));
                assert!(remaining.contains(&id(2)));
                assert!(!remaining.contains(&id(3)));
            }
            other => panic!("expected CycleDetected, got: {other:?}"),
        }
    }

    #[test]
    fn self_loop_detected_as_cycle() {
        let mut g = ReactionGraph::new(1);
        g.connect(id(0), id(0)).unwrap();
        assert!(matches!(
            g.topological_order(),
            Err(GraphError::CycleDetected { .. })
        ));
    }

    #[test]
    fn connect_unknown_chemical_fails() {
        let mut g = ReactionGraph::new(2);
        let err = g.connect(id(0), id(7)).unwrap_err();
        assert!(matches!(err, GraphError::ChemicalNotFound(c) if c == id(7)));
        // The failed edge leaves the graph untouched.
        assert_eq!(g.topological_order().unwrap().len(), 2);
    }

    #[test]
    fn empty_graph_topological_order() {
        assert!(ReactionGraph::new(0).topological_order().unwrap().is_empty());
    }

    #[test]
    fn graph_error_display_messages() {
        let msg = GraphError::CycleDetected {
            remaining: vec![id(1), id(2)],
        }
        .to_string();
        assert!(msg.contains("2 chemicals"), "got: {msg}");
    }
}
