// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Circuit Graph

This is a library for representing an electric circuit as a directed graph,
with the circuit nodes as vertices and the electric branches (resistors,
inductors, capacitors, switches, and voltage and current sources) as edges.

The graph holds everything a steady-state AC (phasor) solver needs for
assembling the network equations: the oriented incidence matrix, the
impedance of every branch at the circuit frequency, and a place to store
the computed voltages, currents and powers of every branch.  Solving the
equations is left to the solver.

## Nodes and branches

A [`Node`] is identified by its id.  Its name is only a label, and can be
changed at any time without affecting how the node hashes or compares.

The branch types all implement the [`ElectricBranch`] trait, and hold
references to the nodes they connect, so the nodes have to outlive them.
Branches of different types can be kept together with the [`Branch`] enum.

Some branch types have additional capabilities:

- [`Inductor`] and [`Capacitor`] implement [`Reactive`], and have a
  reactance that depends on the frequency.  It is recomputed explicitly with
  [`recompute_reactance`][Reactive::recompute_reactance].
- [`VoltageSource`] and [`CurrentSource`] implement [`SineSource`], and have
  a fixed [`SineWave`] waveform.
- [`Switch`] can be opened and closed with
  [`switch_state`][Switch::switch_state].

## The `CircuitGraph`

A [`CircuitGraph`] can be created by passing the nodes and the branches to
[`try_new`][CircuitGraph::try_new], which checks that:

- All branch endpoints are [`Node`]s that are part of the graph.
- Node ids are unique, and so are branch ids, unless allowed by the
  [`CircuitGraphConfig`].
- No branch connects a node to itself, unless allowed by the config.
- All nodes are connected, unless allowed by the config.

If any of the validation steps fail, the method will return an [`Error`], and
a [`CircuitGraph`] instance otherwise.

```
use circuit_graph::{
    Branch, BranchBase, CircuitGraph, CircuitGraphConfig, Error, Node, Resistor,
};

fn main() -> Result<(), Error> {
    let nodes = [Node::new(1, "one"), Node::new(2, "two"), Node::new(3, "three")];
    let branches = [(1, 0, 1), (2, 1, 2), (3, 2, 0)]
        .into_iter()
        .map(|(id, begin, end)| {
            let base = BranchBase::new(format!("R{id}"), id, &nodes[begin], &nodes[end]);
            Resistor::try_new(1.0, base).map(Branch::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let graph = CircuitGraph::try_new(&nodes, branches, CircuitGraphConfig::default())?;
    let incidence = graph.incidence_matrix();

    assert_eq!(incidence.row(1), Some(&[-1, 0, 1][..]));
    assert_eq!(incidence.get(1, 3), Some(1));
    Ok(())
}
```
*/

mod branch;
pub use branch::{
    Branch, BranchBase, Capacitor, CurrentSource, Inductor, Resistor, Switch, VoltageSource,
};

mod branch_kind;
pub use branch_kind::{BranchKind, KindPredicates};

mod capabilities;
pub use capabilities::{
    cyclic_frequency, Reactive, ReactiveState, SineSource, SineWave, TransientPassive,
};

mod config;
pub use config::CircuitGraphConfig;

mod graph;
pub use graph::{iterators, CircuitGraph, IncidenceMatrix};

mod graph_traits;
pub use graph_traits::{Edge, ElectricBranch, Vertex};

mod mode_data;
pub use mode_data::ElementModeData;

mod node;
pub use node::Node;

mod error;
pub use error::{Error, ErrorKind};
