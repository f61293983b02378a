// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The oriented incidence matrix and branch impedances of a [`CircuitGraph`],
//! which are the inputs a solver needs for assembling network equations.

use num_complex::Complex64;
use petgraph::visit::EdgeRef;

use crate::{branch::ensure_non_negative, Branch, CircuitGraph, ElectricBranch, Error};

/// The oriented incidence matrix of a circuit graph.
///
/// There is a row for every node and a column for every branch, in the order
/// they were added to the graph.  An entry is `-1` if the branch starts at the
/// node, `1` if it ends at the node, and `0` otherwise.  A self-loop column
/// is all zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct IncidenceMatrix {
    node_ids: Vec<u64>,
    edge_ids: Vec<u64>,
    rows: Vec<Vec<i8>>,
}

impl IncidenceMatrix {
    /// Returns the node ids, in row order.
    pub fn node_ids(&self) -> &[u64] {
        &self.node_ids
    }

    /// Returns the branch ids, in column order.
    pub fn edge_ids(&self) -> &[u64] {
        &self.edge_ids
    }

    /// Returns all the rows of the matrix.
    pub fn rows(&self) -> &[Vec<i8>] {
        &self.rows
    }

    /// Returns the row of the node with the given id, if it exists.
    pub fn row(&self, node_id: u64) -> Option<&[i8]> {
        let row = self.node_ids.iter().position(|id| *id == node_id)?;
        Some(&self.rows[row])
    }

    /// Returns the entry for the given node and branch ids, if both exist.
    ///
    /// If more than one branch has the same id, the first one is used.
    pub fn get(&self, node_id: u64, graph_edge_id: u64) -> Option<i8> {
        let column = self.edge_ids.iter().position(|id| *id == graph_edge_id)?;
        self.row(node_id).map(|row| row[column])
    }
}

impl<'n, B> CircuitGraph<'n, B>
where
    B: ElectricBranch,
{
    /// Returns the oriented incidence matrix of the graph.
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        let node_ids = self.nodes().map(|n| n.id()).collect::<Vec<_>>();
        let edge_ids = self
            .branches()
            .map(|b| b.graph_edge_id())
            .collect::<Vec<_>>();
        let mut rows = vec![vec![0i8; edge_ids.len()]; node_ids.len()];

        for edge in self.graph.edge_references() {
            let column = edge.id().index();
            let (begin, end) = (edge.source().index(), edge.target().index());
            if begin == end {
                continue;
            }
            rows[begin][column] = -1;
            rows[end][column] = 1;
        }

        IncidenceMatrix {
            node_ids,
            edge_ids,
            rows,
        }
    }

    /// Returns the impedance of every branch, in the column order of the
    /// [`IncidenceMatrix`].
    pub fn branch_impedances(&self) -> Vec<Complex64> {
        self.branches().map(|b| b.impedance()).collect()
    }
}

impl<'n> CircuitGraph<'n, Branch<'n>> {
    /// Recomputes the reactance of every inductor and capacitor for the given
    /// frequency.
    ///
    /// Returns an error, and leaves all branches unchanged, if the frequency
    /// is negative or not finite.
    pub fn retune(&mut self, frequency: f64) -> Result<(), Error> {
        let frequency = ensure_non_negative("frequency", frequency)?;
        let mut count = 0;
        for reactive in self.branches_mut().filter_map(|b| b.as_reactive_mut()) {
            reactive.recompute_reactance(frequency)?;
            count += 1;
        }
        tracing::debug!("Recomputed reactance of {count} branches for {frequency} Hz.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{named_nodes, resistor};
    use crate::{BranchBase, Capacitor, CircuitGraphConfig, ErrorKind, Inductor, VoltageSource};

    #[test]
    fn test_triangle() -> Result<(), Error> {
        let nodes = named_nodes(&["one", "two", "three"]);
        let branches = vec![
            resistor(1, &nodes[0], &nodes[1]),
            resistor(2, &nodes[1], &nodes[2]),
            resistor(3, &nodes[2], &nodes[0]),
        ];
        let graph = CircuitGraph::try_new(&nodes, branches, CircuitGraphConfig::default())?;
        let matrix = graph.incidence_matrix();

        assert_eq!(matrix.node_ids(), [1, 2, 3]);
        assert_eq!(matrix.edge_ids(), [1, 2, 3]);
        assert_eq!(
            matrix.rows(),
            [vec![-1, 0, 1], vec![1, -1, 0], vec![0, 1, -1]]
        );

        assert_eq!(matrix.get(1, 1), Some(-1));
        assert_eq!(matrix.get(1, 2), Some(0));
        assert_eq!(matrix.get(1, 3), Some(1));
        assert_eq!(matrix.get(4, 1), None);
        assert_eq!(matrix.get(1, 4), None);
        assert_eq!(matrix.row(2), Some(&[1, -1, 0][..]));

        for column in 0..3 {
            let sum: i8 = matrix.rows().iter().map(|row| row[column]).sum();
            assert_eq!(sum, 0);
        }

        assert_eq!(graph.branch_impedances(), vec![Complex64::new(1.0, 0.0); 3]);

        Ok(())
    }

    #[test]
    fn test_self_loop_column() -> Result<(), Error> {
        let nodes = named_nodes(&["one", "two"]);
        let branches = vec![
            resistor(7, &nodes[0], &nodes[1]),
            resistor(8, &nodes[1], &nodes[1]),
        ];
        let graph = CircuitGraph::try_new(
            &nodes,
            branches,
            CircuitGraphConfig {
                allow_self_loops: true,
                ..Default::default()
            },
        )?;

        assert_eq!(graph.incidence_matrix().rows(), [vec![-1, 0], vec![1, 0]]);

        Ok(())
    }

    #[test]
    fn test_retune() -> Result<(), Error> {
        let nodes = named_nodes(&["one", "two", "three"]);
        let branches: Vec<Branch> = vec![
            VoltageSource::try_new(
                10.0,
                50.0,
                0.0,
                0.0,
                BranchBase::new("V", 1, &nodes[0], &nodes[1]),
            )?
            .into(),
            Inductor::try_new(0.1, 50.0, BranchBase::new("L", 2, &nodes[1], &nodes[2]))?.into(),
            Capacitor::try_new(1e-4, 50.0, BranchBase::new("C", 3, &nodes[2], &nodes[0]))?.into(),
        ];
        let mut graph = CircuitGraph::try_new(&nodes, branches, CircuitGraphConfig::default())?;

        graph.retune(60.0)?;
        let impedances = graph.branch_impedances();
        let inductor = graph.branch(2)?.as_reactive().map(|r| r.reactance(60.0));
        let capacitor = graph.branch(3)?.as_reactive().map(|r| r.reactance(60.0));

        assert_eq!(impedances[0], Complex64::new(0.0, 0.0));
        assert_eq!(Some(impedances[1]), inductor);
        assert_eq!(Some(impedances[2]), capacitor);
        assert_eq!(graph.branch(2)?.as_reactive().map(|r| r.frequency()), Some(60.0));

        for frequency in [-60.0, f64::NAN] {
            assert_eq!(
                graph.retune(frequency).map_err(|e| e.kind()),
                Err(ErrorKind::InvalidParameter)
            );
        }
        assert_eq!(graph.branch_impedances(), impedances);
        assert_eq!(graph.branch(3)?.as_reactive().map(|r| r.frequency()), Some(60.0));

        Ok(())
    }
}
