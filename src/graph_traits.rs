// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits shared by the vertices and the branches of
//! a circuit graph.

use std::{any::Any, fmt};

use num_complex::Complex64;

use crate::{iterators::Endpoints, BranchKind, ElementModeData, Error, Node};

/**
This trait is implemented by the types that can be referenced as the endpoints
of an [`Edge`].

[`Node`] is the only implementation that the library accepts when describing a
branch or building a [`CircuitGraph`][crate::CircuitGraph].  Other
implementations can be stored as endpoints, but
[`branch_descriptor`][ElectricBranch::branch_descriptor] rejects them with a
`TypeMismatch` error.

<details>
<summary>Example of a wrapper type that gets rejected:</summary>

```
use circuit_graph::{BranchBase, ElectricBranch, ErrorKind, Node, Resistor, Vertex};

#[derive(Debug)]
struct Tagged(Node);

impl Vertex for Tagged {
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

let begin = Tagged(Node::new(1, "one"));
let end = Node::new(2, "two");
let resistor = Resistor::try_new(1.0, BranchBase::new("1-2", 1, &begin, &end)).unwrap();
assert_eq!(
    resistor.branch_descriptor().unwrap_err().kind(),
    ErrorKind::TypeMismatch
);
```

</details>
*/
pub trait Vertex: Any + fmt::Debug {
    /// Returns the id of the vertex.
    fn vertex_id(&self) -> u64;
    /// Returns the current display label of the vertex.
    fn label(&self) -> String;
    /// Returns the vertex as `Any`, for checking its concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// A directed graph edge, that connects exactly two vertices.
pub trait Edge {
    /// Returns the name of the edge.
    fn name(&self) -> &str;
    /// Returns the caller assigned id of the edge.
    fn graph_edge_id(&self) -> u64;
    /// Returns the vertex the edge starts from.
    fn begin_node(&self) -> &dyn Vertex;
    /// Returns the vertex the edge points to.
    fn end_node(&self) -> &dyn Vertex;

    /// Returns the number of endpoints, which is always 2.
    fn endpoint_count(&self) -> usize {
        2
    }

    /// Returns an iterator over the `(begin, end)` endpoints, in that order.
    fn endpoints(&self) -> Endpoints<'_> {
        Endpoints::new(self.begin_node(), self.end_node())
    }
}

/// A branch of an electric circuit.
///
/// Implementations are value-like descriptors of a single component.  They
/// hold the physical parameters and the impedance law of the component, and
/// the [`ElementModeData`] that a solver fills in.
pub trait ElectricBranch: Edge + fmt::Display {
    /// Returns the kind of the branch.
    fn kind(&self) -> BranchKind;

    /// Returns the electrical state of the branch.
    fn mode_data(&self) -> &ElementModeData;

    /// Returns the electrical state of the branch, for updating it.
    fn mode_data_mut(&mut self) -> &mut ElementModeData;

    /// Returns the type specific parameters, as they appear in the
    /// [`debug_form`][ElectricBranch::debug_form].
    fn parameters(&self) -> String;

    /// Returns the impedance of the branch in its current state.
    fn impedance(&self) -> Complex64;

    /// Returns a string identifying the branch by its kind, id, and the names
    /// of its endpoints, for example `Resistor|1|one -> two`.
    ///
    /// Fails with a `TypeMismatch` error if either endpoint is not a [`Node`].
    fn branch_descriptor(&self) -> Result<String, Error> {
        for endpoint in self.endpoints() {
            if !endpoint.as_any().is::<Node>() {
                return Err(Error::type_mismatch(format!(
                    "{}:{} has an endpoint that is not a Node: {:?}",
                    self.kind(),
                    self.graph_edge_id(),
                    endpoint
                )));
            }
        }

        Ok(format!(
            "{}|{}|{} -> {}",
            self.kind(),
            self.graph_edge_id(),
            self.begin_node().label(),
            self.end_node().label()
        ))
    }

    /// Returns the branch descriptor followed by the type specific parameters.
    fn debug_form(&self) -> Result<String, Error> {
        Ok(format!("{}|{}", self.branch_descriptor()?, self.parameters()))
    }
}
