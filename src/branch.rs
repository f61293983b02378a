// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The electric branch types, and the [`Branch`] enum that can hold any of
//! them.

mod base;
mod passive;
mod sources;

pub use base::BranchBase;
pub use passive::{Capacitor, Inductor, Resistor, Switch};
pub use sources::{CurrentSource, VoltageSource};

use std::fmt;

use num_complex::Complex64;

use crate::{
    capabilities::{Reactive, SineSource},
    graph_traits::{Edge, ElectricBranch, Vertex},
    BranchKind, ElementModeData, Error,
};

/// Implements the [`Edge`] trait for a branch type, by delegating to its
/// `base` field.
macro_rules! impl_edge {
    ($($branch:ident),*) => {
        $(
            impl crate::graph_traits::Edge for $branch<'_> {
                fn name(&self) -> &str {
                    self.base.name()
                }

                fn graph_edge_id(&self) -> u64 {
                    self.base.graph_edge_id()
                }

                fn begin_node(&self) -> &dyn crate::graph_traits::Vertex {
                    self.base.begin_node()
                }

                fn end_node(&self) -> &dyn crate::graph_traits::Vertex {
                    self.base.end_node()
                }
            }
        )*
    };
}
pub(crate) use impl_edge;

/// Any one of the electric branch types.
///
/// This makes it possible to keep branches of different types in a single
/// collection, like a [`CircuitGraph`][crate::CircuitGraph].
#[derive(Clone, Debug)]
pub enum Branch<'n> {
    Resistor(Resistor<'n>),
    Inductor(Inductor<'n>),
    Capacitor(Capacitor<'n>),
    Switch(Switch<'n>),
    VoltageSource(VoltageSource<'n>),
    CurrentSource(CurrentSource<'n>),
}

/// Evaluates `$expr` with `$inner` bound to the branch wrapped by `$branch`.
macro_rules! delegate {
    ($branch:expr, $inner:ident => $expr:expr) => {
        match $branch {
            Branch::Resistor($inner) => $expr,
            Branch::Inductor($inner) => $expr,
            Branch::Capacitor($inner) => $expr,
            Branch::Switch($inner) => $expr,
            Branch::VoltageSource($inner) => $expr,
            Branch::CurrentSource($inner) => $expr,
        }
    };
}

macro_rules! impl_from {
    ($($branch:ident),*) => {
        $(
            impl<'n> From<$branch<'n>> for Branch<'n> {
                fn from(branch: $branch<'n>) -> Self {
                    Branch::$branch(branch)
                }
            }
        )*
    };
}

impl_from!(
    Resistor,
    Inductor,
    Capacitor,
    Switch,
    VoltageSource,
    CurrentSource
);

impl<'n> Branch<'n> {
    /// Returns the branch as a [`Reactive`], if it is an inductor or a
    /// capacitor.
    pub fn as_reactive(&self) -> Option<&dyn Reactive> {
        match self {
            Branch::Inductor(inductor) => Some(inductor),
            Branch::Capacitor(capacitor) => Some(capacitor),
            _ => None,
        }
    }

    /// Returns the branch as a mutable [`Reactive`], if it is an inductor or a
    /// capacitor.
    pub fn as_reactive_mut(&mut self) -> Option<&mut dyn Reactive> {
        match self {
            Branch::Inductor(inductor) => Some(inductor),
            Branch::Capacitor(capacitor) => Some(capacitor),
            _ => None,
        }
    }

    /// Returns the branch as a [`SineSource`], if it is a voltage or a current
    /// source.
    pub fn as_sine_source(&self) -> Option<&dyn SineSource> {
        match self {
            Branch::VoltageSource(source) => Some(source),
            Branch::CurrentSource(source) => Some(source),
            _ => None,
        }
    }

    /// Returns the branch as a mutable [`Switch`], if it is one.
    pub fn as_switch_mut(&mut self) -> Option<&mut Switch<'n>> {
        match self {
            Branch::Switch(switch) => Some(switch),
            _ => None,
        }
    }
}

impl Edge for Branch<'_> {
    fn name(&self) -> &str {
        delegate!(self, b => b.name())
    }

    fn graph_edge_id(&self) -> u64 {
        delegate!(self, b => b.graph_edge_id())
    }

    fn begin_node(&self) -> &dyn Vertex {
        delegate!(self, b => b.begin_node())
    }

    fn end_node(&self) -> &dyn Vertex {
        delegate!(self, b => b.end_node())
    }
}

impl ElectricBranch for Branch<'_> {
    fn kind(&self) -> BranchKind {
        delegate!(self, b => b.kind())
    }

    fn mode_data(&self) -> &ElementModeData {
        delegate!(self, b => b.mode_data())
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        delegate!(self, b => b.mode_data_mut())
    }

    fn parameters(&self) -> String {
        delegate!(self, b => b.parameters())
    }

    fn impedance(&self) -> Complex64 {
        delegate!(self, b => b.impedance())
    }
}

impl fmt::Display for Branch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        delegate!(self, b => fmt::Display::fmt(b, f))
    }
}

pub(crate) fn ensure_finite(param: &str, value: f64) -> Result<f64, Error> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(format!(
            "{param} must be finite, got {value}."
        )));
    }
    Ok(value)
}

pub(crate) fn ensure_non_negative(param: &str, value: f64) -> Result<f64, Error> {
    if ensure_finite(param, value)? < 0.0 {
        return Err(Error::invalid_parameter(format!(
            "{param} can't be negative, got {value}."
        )));
    }
    Ok(value)
}

pub(crate) fn ensure_positive(param: &str, value: f64) -> Result<f64, Error> {
    if ensure_finite(param, value)? <= 0.0 {
        return Err(Error::invalid_parameter(format!(
            "{param} must be positive, got {value}."
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, KindPredicates, Node};

    #[test]
    fn test_delegation() -> Result<(), Error> {
        let one = Node::new(1, "one");
        let two = Node::new(2, "two");

        let resistor = Resistor::try_new(5.0, BranchBase::new("R1", 1, &one, &two))?;
        let inductor = Inductor::try_new(0.1, 50.0, BranchBase::new("L1", 2, &two, &one))?;
        let source =
            VoltageSource::try_new(10.0, 50.0, 0.0, 0.5, BranchBase::new("V1", 3, &one, &two))?;

        let branches: Vec<Branch> = vec![
            resistor.clone().into(),
            inductor.clone().into(),
            source.clone().into(),
        ];

        assert_eq!(
            branches.iter().map(|b| b.kind()).collect::<Vec<_>>(),
            [
                BranchKind::Resistor,
                BranchKind::Inductor,
                BranchKind::VoltageSource
            ]
        );
        assert_eq!(branches[0].to_string(), resistor.to_string());
        assert_eq!(branches[1].debug_form()?, inductor.debug_form()?);
        assert_eq!(branches[2].branch_descriptor()?, "VoltageSource|3|one -> two");
        assert_eq!(branches[1].name(), "L1");
        assert_eq!(branches[1].graph_edge_id(), 2);
        assert_eq!(branches[1].impedance(), inductor.current_reactance());

        assert!(branches[0].is_resistor());
        assert!(branches[1].is_reactive() && branches[1].is_passive());
        assert!(branches[2].is_source() && !branches[2].is_passive());

        Ok(())
    }

    #[test]
    fn test_capability_access() -> Result<(), Error> {
        let one = Node::new(1, "");
        let two = Node::new(2, "");

        let mut capacitor: Branch =
            Capacitor::try_new(1e-3, 50.0, BranchBase::new("C1", 1, &one, &two))?.into();
        let mut switch: Branch =
            Switch::try_new(true, None, BranchBase::new("S1", 2, &one, &two))?.into();
        let source: Branch =
            CurrentSource::try_new(2.0, 60.0, 45.0, 0.0, BranchBase::new("I1", 3, &two, &one))?
                .into();

        assert!(capacitor.as_sine_source().is_none());
        assert!(capacitor.as_switch_mut().is_none());
        let reactive = capacitor.as_reactive_mut().ok_or_else(|| {
            Error::invalid_parameter("capacitor should be reactive")
        })?;
        let reactance = reactive.recompute_reactance(60.0)?;
        assert_eq!(capacitor.impedance(), reactance);
        assert_eq!(capacitor.as_reactive().map(|r| r.frequency()), Some(60.0));

        assert!(switch.as_reactive().is_none());
        if let Some(switch) = switch.as_switch_mut() {
            switch.switch_state();
        }
        assert_eq!(switch.impedance(), Complex64::new(f64::INFINITY, 0.0));

        assert_eq!(source.as_sine_source().map(|s| s.magnitude()), Some(2.0));
        assert!(source.as_reactive().is_none());

        Ok(())
    }

    #[test]
    fn test_mode_data() -> Result<(), Error> {
        let one = Node::new(1, "");
        let two = Node::new(2, "");
        let mut branch: Branch =
            Resistor::try_new(2.0, BranchBase::new("R", 1, &one, &two))?.into();

        assert_eq!(branch.mode_data(), &ElementModeData::default());
        branch.mode_data_mut().voltage = Some(Complex64::new(4.0, 0.0));
        branch.mode_data_mut().current = Some(Complex64::new(2.0, 0.0));
        assert_eq!(
            branch.mode_data_mut().calculate_power(),
            Some(Complex64::new(8.0, 0.0))
        );
        assert_eq!(branch.mode_data().active_power, Some(8.0));

        Ok(())
    }

    #[test]
    fn test_parameter_checks() {
        assert_eq!(ensure_finite("x", 1.5), Ok(1.5));
        assert_eq!(ensure_non_negative("x", 0.0), Ok(0.0));
        assert_eq!(
            ensure_non_negative("resistance", -1.0),
            Err(Error::invalid_parameter("resistance can't be negative, got -1."))
        );
        assert_eq!(
            ensure_positive("capacity", 0.0),
            Err(Error::invalid_parameter("capacity must be positive, got 0."))
        );
        assert_eq!(
            ensure_positive("capacity", f64::NAN).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidParameter)
        );
    }
}
