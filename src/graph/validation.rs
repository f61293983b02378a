// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for validating a [`CircuitGraph`].

use std::collections::BTreeSet;

use crate::{CircuitGraph, ElectricBranch, Error};

impl<B> CircuitGraph<'_, B>
where
    B: ElectricBranch,
{
    pub(super) fn validate(&self) -> Result<(), Error> {
        self.validate_connected_graph()
    }

    /// Validates that all nodes are connected into a single circuit.
    ///
    /// It does so by ensuring that all the nodes are reachable from the first
    /// node, following branches in either direction.
    fn validate_connected_graph(&self) -> Result<(), Error> {
        let Some(first) = self.graph.node_indices().next() else {
            return Ok(());
        };
        let mut visited = BTreeSet::new();
        let mut stack = vec![first];
        visited.insert(first);
        while let Some(index) = stack.pop() {
            for neighbor in self.graph.neighbors_undirected(index) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        let unvisited = self
            .graph
            .node_indices()
            .filter(|i| !visited.contains(i))
            .map(|i| self.graph[i].id())
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            return Ok(());
        }

        let first_id = self.graph[first].id();
        if self.config.allow_unconnected_nodes {
            tracing::warn!(
                "Nodes {:?} are not connected to node {}, allowed by config.",
                unvisited,
                first_id
            );
            return Ok(());
        }

        Err(Error::invalid_graph(format!(
            "Nodes {:?} are not connected to node {}.",
            unvisited, first_id
        )))
    }
}
