// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving nodes and branches from a [`CircuitGraph`].

use crate::iterators::{Branches, Neighbors, Nodes};
use crate::{CircuitGraph, ElectricBranch, Error, Node};

/// `Node` and `Branch` retrieval.
impl<'n, B> CircuitGraph<'n, B>
where
    B: ElectricBranch,
{
    /// Returns the node with the given `node_id`, if it exists.
    pub fn node(&self, node_id: u64) -> Result<&'n Node, Error> {
        self.node_indices
            .get(&node_id)
            .map(|i| self.graph[*i])
            .ok_or_else(|| Error::node_not_found(format!("Node with id {} not found.", node_id)))
    }

    /// Returns an iterator over the nodes in the graph.
    pub fn nodes(&self) -> Nodes<'_, 'n> {
        Nodes {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the branch with the given `graph_edge_id`, if it exists.
    pub fn branch(&self, graph_edge_id: u64) -> Result<&B, Error> {
        self.edge_indices
            .get(&graph_edge_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| {
                Error::branch_not_found(format!("Branch with id {} not found.", graph_edge_id))
            })
    }

    /// Returns the branch with the given `graph_edge_id` for updating it, if
    /// it exists.
    pub fn branch_mut(&mut self, graph_edge_id: u64) -> Result<&mut B, Error> {
        self.edge_indices
            .get(&graph_edge_id)
            .map(|i| &mut self.graph[*i])
            .ok_or_else(|| {
                Error::branch_not_found(format!("Branch with id {} not found.", graph_edge_id))
            })
    }

    /// Returns an iterator over the branches in the graph.
    pub fn branches(&self) -> Branches<'_, B> {
        Branches {
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the branches in the graph, for updating them.
    pub fn branches_mut(&mut self) -> impl Iterator<Item = &mut B> {
        self.graph.edge_weights_mut()
    }

    /// Returns the number of branches in the graph.
    pub fn branch_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns an iterator over the nodes that have a branch pointing to the
    /// node with the given `node_id`.
    ///
    /// Returns an error if the given `node_id` does not exist.
    pub fn predecessors(&self, node_id: u64) -> Result<Neighbors<'_, 'n, B>, Error> {
        self.neighbors(node_id, petgraph::Direction::Incoming)
    }

    /// Returns an iterator over the nodes that the branches starting at the
    /// node with the given `node_id` point to.
    ///
    /// Returns an error if the given `node_id` does not exist.
    pub fn successors(&self, node_id: u64) -> Result<Neighbors<'_, 'n, B>, Error> {
        self.neighbors(node_id, petgraph::Direction::Outgoing)
    }

    fn neighbors(
        &self,
        node_id: u64,
        direction: petgraph::Direction,
    ) -> Result<Neighbors<'_, 'n, B>, Error> {
        self.node_indices
            .get(&node_id)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self.graph.neighbors_directed(index, direction),
            })
            .ok_or_else(|| Error::node_not_found(format!("Node with id {} not found.", node_id)))
    }
}
