// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - `named_nodes`, for creating numbered nodes with the given names.
//! - `resistor`, for connecting two nodes with a 1 ohm resistor.
//! - the `ProxyNode` type, a `Vertex` that is not a `Node`.

use crate::{Branch, BranchBase, Node, Resistor, Vertex};

/// Returns nodes with ids starting from 1, and the given names.
pub(super) fn named_nodes(names: &[&str]) -> Vec<Node> {
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| Node::new(id, *name))
        .collect()
}

/// Returns a 1 ohm resistor from `begin` to `end`, named after the two nodes.
pub(super) fn resistor<'n>(graph_edge_id: u64, begin: &'n Node, end: &'n Node) -> Branch<'n> {
    let name = format!("{}-{}", begin.name(), end.name());
    Resistor::try_new(1.0, BranchBase::new(name, graph_edge_id, begin, end))
        .expect("1 ohm is a valid resistance")
        .into()
}

/// A vertex that wraps a `Node`, without being one.
#[derive(Debug)]
pub(super) struct ProxyNode(Node);

impl ProxyNode {
    pub(super) fn new(id: u64, name: &str) -> Self {
        ProxyNode(Node::new(id, name))
    }
}

impl Vertex for ProxyNode {
    fn vertex_id(&self) -> u64 {
        self.0.id()
    }

    fn label(&self) -> String {
        self.0.name()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
