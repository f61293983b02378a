// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`CircuitGraph`] instances from given nodes and
//! branches.

use petgraph::graph::DiGraph;

use crate::{CircuitGraphConfig, ElectricBranch, Error, Node};

use super::{CircuitGraph, EdgeIndexMap, NodeIndexMap};

/// `CircuitGraph` instantiation.
impl<'n, B> CircuitGraph<'n, B>
where
    B: ElectricBranch,
{
    /// Creates a new [`CircuitGraph`] from the given nodes and branches.
    ///
    /// Returns an error if a branch has an endpoint that is not a [`Node`], or
    /// if the graph is invalid.
    pub fn try_new<NodeIterator, BranchIterator>(
        nodes: NodeIterator,
        branches: BranchIterator,
        config: CircuitGraphConfig,
    ) -> Result<Self, Error>
    where
        NodeIterator: IntoIterator<Item = &'n Node>,
        BranchIterator: IntoIterator<Item = B>,
    {
        let (graph, indices) = Self::create_graph(nodes)?;

        let mut cg = Self {
            graph,
            node_indices: indices,
            edge_indices: EdgeIndexMap::new(),
            config,
        };
        cg.add_branches(branches)?;

        cg.validate()?;

        tracing::debug!(
            "Created circuit graph with {} nodes and {} branches.",
            cg.node_count(),
            cg.branch_count()
        );

        Ok(cg)
    }

    fn create_graph(
        nodes: impl IntoIterator<Item = &'n Node>,
    ) -> Result<(DiGraph<&'n Node, B>, NodeIndexMap), Error> {
        let mut graph = DiGraph::new();
        let mut indices = NodeIndexMap::new();

        for node in nodes {
            let nid = node.id();

            if indices.contains_key(&nid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate node ID found: {nid}"
                )));
            }

            let idx = graph.add_node(node);
            indices.insert(nid, idx);
        }

        Ok((graph, indices))
    }

    fn add_branches(&mut self, branches: impl IntoIterator<Item = B>) -> Result<(), Error> {
        for branch in branches {
            let descriptor = branch.branch_descriptor()?;
            let eid = branch.graph_edge_id();
            let bid = branch.begin_node().vertex_id();
            let did = branch.end_node().vertex_id();

            if bid == did {
                if !self.config.allow_self_loops {
                    return Err(Error::invalid_connection(format!(
                        "Branch:{eid} ({bid}, {did}) Can't connect a node to itself."
                    )));
                }
                tracing::warn!("Self-loop branch allowed by config: {descriptor}");
            }
            for nid in [bid, did] {
                if !self.node_indices.contains_key(&nid) {
                    return Err(Error::invalid_connection(format!(
                        "Branch:{eid} ({bid}, {did}) Can't find a node with ID {nid}"
                    )));
                }
            }
            if self.edge_indices.contains_key(&eid) {
                if !self.config.allow_duplicate_edge_ids {
                    return Err(Error::invalid_graph(format!(
                        "Duplicate branch ID found: {eid}"
                    )));
                }
                tracing::warn!("Duplicate branch ID allowed by config: {descriptor}");
            }

            let begin_idx = self.node_indices[&bid];
            let end_idx = self.node_indices[&did];
            let idx = self.graph.add_edge(begin_idx, end_idx, branch);
            self.edge_indices.entry(eid).or_insert(idx);
        }

        Ok(())
    }
}
