// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for the `CircuitGraph`.

/// Configuration options for the `CircuitGraph`.
#[derive(Clone, Default, Debug)]
pub struct CircuitGraphConfig {
    /// Whether to allow more than one branch with the same `graph_edge_id`.
    ///
    /// When this is `true`, the later branch still gets its own column in the
    /// incidence matrix, but lookups by `graph_edge_id` return the first one.
    pub allow_duplicate_edge_ids: bool,

    /// Whether to allow branches whose begin and end nodes are the same.
    pub allow_self_loops: bool,

    /// Whether to allow nodes that can't be reached from the other nodes
    /// through any chain of branches, regardless of branch direction.
    pub allow_unconnected_nodes: bool,
}
