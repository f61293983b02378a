// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over the endpoints of a branch, and over the nodes and branches
//! in a `CircuitGraph`.

use petgraph::graph::DiGraph;

use crate::{ElectricBranch, Node, Vertex};

/// An iterator over the `(begin, end)` endpoints of an
/// [`Edge`][crate::Edge].
///
/// It always yields exactly two vertices.  A new one can be had from
/// [`Edge::endpoints`][crate::Edge::endpoints] to start over.
#[derive(Clone)]
pub struct Endpoints<'a> {
    nodes: [&'a dyn Vertex; 2],
    pos: usize,
}

impl<'a> Endpoints<'a> {
    pub(crate) fn new(begin: &'a dyn Vertex, end: &'a dyn Vertex) -> Self {
        Endpoints {
            nodes: [begin, end],
            pos: 0,
        }
    }
}

impl<'a> Iterator for Endpoints<'a> {
    type Item = &'a dyn Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.pos).copied()?;
        self.pos += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nodes.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Endpoints<'_> {}

/// An iterator over the nodes in a `CircuitGraph`.
pub struct Nodes<'a, 'n> {
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<&'n Node>>,
}

impl<'n> Iterator for Nodes<'_, 'n> {
    type Item = &'n Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| n.weight)
    }
}

/// An iterator over the branches in a `CircuitGraph`.
pub struct Branches<'a, B>
where
    B: ElectricBranch,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<B>>,
}

impl<'a, B> Iterator for Branches<'a, B>
where
    B: ElectricBranch,
{
    type Item = &'a B;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| &e.weight)
    }
}

/// An iterator over the neighbors of a node in a `CircuitGraph`.
///
/// A neighbor is yielded once for every branch that connects it to the node.
pub struct Neighbors<'a, 'n, B>
where
    B: ElectricBranch,
{
    pub(crate) graph: &'a DiGraph<&'n Node, B>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, B>,
}

impl<'n, B> Iterator for Neighbors<'_, 'n, B>
where
    B: ElectricBranch,
{
    type Item = &'n Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| self.graph[i])
    }
}
