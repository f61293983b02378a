// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of an electric circuit, with the circuit nodes as
//! vertices and the branches as directed edges.

mod creation;
mod incidence;
mod retrieval;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

pub use incidence::IncidenceMatrix;

use crate::{CircuitGraphConfig, ElectricBranch, Node};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::HashMap;

/// `Node`s stored in a `DiGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any node `id`, so
/// that nodes in the `DiGraph` can be retrieved from their ids.
pub(crate) type NodeIndexMap = HashMap<u64, NodeIndex>;

/// `EdgeIndexMap` stores the `EdgeIndex` of the first branch added with any
/// `graph_edge_id`.
pub(crate) type EdgeIndexMap = HashMap<u64, EdgeIndex>;

/// A validated graph of circuit nodes and the branches between them.
///
/// The nodes are borrowed from the caller, who keeps ownership of them.  The
/// branches are owned by the graph, and are stored as the edge weights of a
/// `DiGraph`, so parallel branches between the same pair of nodes are kept
/// apart.
///
/// Nodes and branches keep the order they were added in, which is also the
/// row and column order of the [`IncidenceMatrix`].
pub struct CircuitGraph<'n, B>
where
    B: ElectricBranch,
{
    graph: DiGraph<&'n Node, B>,
    node_indices: NodeIndexMap,
    edge_indices: EdgeIndexMap,
    config: CircuitGraphConfig,
}
