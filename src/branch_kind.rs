// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `BranchKind` enum, which represents the type of
//! an electric branch.

use crate::graph_traits::ElectricBranch;
use std::fmt::Display;

/// Represents the type of an electric branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchKind {
    Resistor,
    Inductor,
    Capacitor,
    Switch,
    VoltageSource,
    CurrentSource,
}

impl Display for BranchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchKind::Resistor => write!(f, "Resistor"),
            BranchKind::Inductor => write!(f, "Inductor"),
            BranchKind::Capacitor => write!(f, "Capacitor"),
            BranchKind::Switch => write!(f, "Switch"),
            BranchKind::VoltageSource => write!(f, "VoltageSource"),
            BranchKind::CurrentSource => write!(f, "CurrentSource"),
        }
    }
}

/// Predicates for checking the kind of an `ElectricBranch`.
pub trait KindPredicates: ElectricBranch {
    fn is_resistor(&self) -> bool {
        self.kind() == BranchKind::Resistor
    }

    fn is_switch(&self) -> bool {
        self.kind() == BranchKind::Switch
    }

    /// Returns true for inductors and capacitors.
    fn is_reactive(&self) -> bool {
        matches!(self.kind(), BranchKind::Inductor | BranchKind::Capacitor)
    }

    /// Returns true for voltage and current sources.
    fn is_source(&self) -> bool {
        matches!(
            self.kind(),
            BranchKind::VoltageSource | BranchKind::CurrentSource
        )
    }

    fn is_passive(&self) -> bool {
        !self.is_source()
    }
}

/// Implement the `KindPredicates` trait for all types that implement the
/// `ElectricBranch` trait.
impl<T: ElectricBranch + ?Sized> KindPredicates for T {}
