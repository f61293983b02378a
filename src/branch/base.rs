// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The fields shared by all branch types.

use crate::{graph_traits::Vertex, ElementModeData};

/// The name, id and endpoints of a branch, and its electrical state.
///
/// The endpoints are borrowed, so the vertices have to outlive the branch.
/// Nothing here checks that the endpoints are distinct or that the id is
/// unique.  That is left to the [`CircuitGraph`][crate::CircuitGraph].
#[derive(Clone, Debug)]
pub struct BranchBase<'n> {
    name: String,
    graph_edge_id: u64,
    begin_node: &'n dyn Vertex,
    end_node: &'n dyn Vertex,
    mode_data: ElementModeData,
}

impl<'n> BranchBase<'n> {
    /// Creates a new `BranchBase`, with unset mode data.
    pub fn new(
        name: impl Into<String>,
        graph_edge_id: u64,
        begin_node: &'n dyn Vertex,
        end_node: &'n dyn Vertex,
    ) -> Self {
        Self {
            name: name.into(),
            graph_edge_id,
            begin_node,
            end_node,
            mode_data: ElementModeData::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn graph_edge_id(&self) -> u64 {
        self.graph_edge_id
    }

    pub(crate) fn begin_node(&self) -> &'n dyn Vertex {
        self.begin_node
    }

    pub(crate) fn end_node(&self) -> &'n dyn Vertex {
        self.end_node
    }

    pub(crate) fn mode_data(&self) -> &ElementModeData {
        &self.mode_data
    }

    pub(crate) fn mode_data_mut(&mut self) -> &mut ElementModeData {
        &mut self.mode_data
    }
}
