// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Linear passive branches: Resistor, Inductor, Capacitor, and Switch.

use std::fmt;

use num_complex::Complex64;

use super::{ensure_non_negative, ensure_positive, BranchBase};
use crate::{
    capabilities::{cyclic_frequency, Reactive, ReactiveState},
    graph_traits::{Edge, ElectricBranch},
    BranchKind, ElementModeData, Error,
};

crate::branch::impl_edge!(Resistor, Inductor, Capacitor, Switch);

/// A linear resistor.
#[derive(Clone, Debug)]
pub struct Resistor<'n> {
    base: BranchBase<'n>,
    resistance: f64,
}

impl<'n> Resistor<'n> {
    /// Creates a new `Resistor`.
    ///
    /// Returns an error if the resistance is negative or not finite.
    pub fn try_new(resistance: f64, base: BranchBase<'n>) -> Result<Self, Error> {
        Ok(Self {
            base,
            resistance: ensure_non_negative("resistance", resistance)?,
        })
    }

    /// Returns the resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }
}

impl ElectricBranch for Resistor<'_> {
    fn kind(&self) -> BranchKind {
        BranchKind::Resistor
    }

    fn mode_data(&self) -> &ElementModeData {
        self.base.mode_data()
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        self.base.mode_data_mut()
    }

    fn parameters(&self) -> String {
        format!("R = {} ohms", self.resistance)
    }

    fn impedance(&self) -> Complex64 {
        Complex64::new(self.resistance, 0.0)
    }
}

impl fmt::Display for Resistor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resistor branch {}|{}", self.name(), self.parameters())
    }
}

/// Returns the reactance `jωL` of an inductance at the given frequency.
fn inductive_reactance(inductance: f64, frequency: f64) -> Complex64 {
    Complex64::new(0.0, inductance * cyclic_frequency(frequency))
}

/// Returns the reactance `-j/(ωC)` of a capacity at the given frequency.
fn capacitive_reactance(capacity: f64, frequency: f64) -> Complex64 {
    Complex64::new(0.0, -1.0 / (capacity * cyclic_frequency(frequency)))
}

/// A linear inductor.
#[derive(Clone, Debug)]
pub struct Inductor<'n> {
    base: BranchBase<'n>,
    reactive: ReactiveState,
    inductance: f64,
}

impl<'n> Inductor<'n> {
    /// Creates a new `Inductor`, with its reactance computed at the given
    /// frequency.
    ///
    /// Returns an error if the inductance or the frequency is negative or not
    /// finite.
    pub fn try_new(inductance: f64, frequency: f64, base: BranchBase<'n>) -> Result<Self, Error> {
        let frequency = ensure_non_negative("frequency", frequency)?;
        let inductance = ensure_non_negative("inductance", inductance)?;
        Ok(Self {
            base,
            reactive: ReactiveState::new(frequency, inductive_reactance(inductance, frequency)),
            inductance,
        })
    }

    /// Returns the inductance in henries.
    pub fn inductance(&self) -> f64 {
        self.inductance
    }
}

impl Reactive for Inductor<'_> {
    fn reactance(&self, frequency: f64) -> Complex64 {
        inductive_reactance(self.inductance, frequency)
    }

    fn reactive_state(&self) -> &ReactiveState {
        &self.reactive
    }

    fn recompute_reactance(&mut self, frequency: f64) -> Result<Complex64, Error> {
        let inductance = self.inductance;
        self.reactive.recompute(frequency, |f| inductive_reactance(inductance, f))
    }
}

impl ElectricBranch for Inductor<'_> {
    fn kind(&self) -> BranchKind {
        BranchKind::Inductor
    }

    fn mode_data(&self) -> &ElementModeData {
        self.base.mode_data()
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        self.base.mode_data_mut()
    }

    fn parameters(&self) -> String {
        format!(
            "L = {} H|X = {} ohms",
            self.inductance,
            self.current_reactance()
        )
    }

    fn impedance(&self) -> Complex64 {
        self.current_reactance()
    }
}

impl fmt::Display for Inductor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inductor branch {}|{}", self.name(), self.parameters())
    }
}

/// A linear capacitor.
///
/// At a frequency of 0 the reactance is `-j∞`, an open circuit.
#[derive(Clone, Debug)]
pub struct Capacitor<'n> {
    base: BranchBase<'n>,
    reactive: ReactiveState,
    capacity: f64,
}

impl<'n> Capacitor<'n> {
    /// Creates a new `Capacitor`, with its reactance computed at the given
    /// frequency.
    ///
    /// Returns an error if the capacity isn't positive, or if the frequency is
    /// negative or not finite.
    pub fn try_new(capacity: f64, frequency: f64, base: BranchBase<'n>) -> Result<Self, Error> {
        let frequency = ensure_non_negative("frequency", frequency)?;
        let capacity = ensure_positive("capacity", capacity)?;
        Ok(Self {
            base,
            reactive: ReactiveState::new(frequency, capacitive_reactance(capacity, frequency)),
            capacity,
        })
    }

    /// Returns the capacity in farads.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

impl Reactive for Capacitor<'_> {
    fn reactance(&self, frequency: f64) -> Complex64 {
        capacitive_reactance(self.capacity, frequency)
    }

    fn reactive_state(&self) -> &ReactiveState {
        &self.reactive
    }

    fn recompute_reactance(&mut self, frequency: f64) -> Result<Complex64, Error> {
        let capacity = self.capacity;
        self.reactive.recompute(frequency, |f| capacitive_reactance(capacity, f))
    }
}

impl ElectricBranch for Capacitor<'_> {
    fn kind(&self) -> BranchKind {
        BranchKind::Capacitor
    }

    fn mode_data(&self) -> &ElementModeData {
        self.base.mode_data()
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        self.base.mode_data_mut()
    }

    fn parameters(&self) -> String {
        format!(
            "C = {} F|X = {} ohms",
            self.capacity,
            self.current_reactance()
        )
    }

    fn impedance(&self) -> Complex64 {
        self.current_reactance()
    }
}

impl fmt::Display for Capacitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capacitor branch {}|{}", self.name(), self.parameters())
    }
}

/// A switch, that is either closed (conducting) or open.
///
/// The commutation time is kept for transient solvers, and isn't acted on
/// here.
#[derive(Clone, Debug)]
pub struct Switch<'n> {
    base: BranchBase<'n>,
    current_state: bool,
    commutation_time: Option<f64>,
    current_resistance: f64,
}

impl<'n> Switch<'n> {
    /// The resistance of a closed switch.
    pub const CLOSED_RESISTANCE: f64 = 0.0;
    /// The resistance of an open switch.
    pub const OPENED_RESISTANCE: f64 = f64::INFINITY;

    /// Creates a new `Switch`.  The switch is closed if `init_state` is `true`.
    ///
    /// Returns an error if the commutation time is negative or not finite.
    pub fn try_new(
        init_state: bool,
        commutation_time: Option<f64>,
        base: BranchBase<'n>,
    ) -> Result<Self, Error> {
        let commutation_time = commutation_time
            .map(|t| ensure_non_negative("commutation time", t))
            .transpose()?;
        Ok(Self {
            base,
            current_state: init_state,
            commutation_time,
            current_resistance: Self::resistance_for(init_state),
        })
    }

    /// Returns `true` if the switch is closed.
    pub fn current_state(&self) -> bool {
        self.current_state
    }

    /// Returns the resistance in the current state: 0 when closed and
    /// infinite when open.
    pub fn current_resistance(&self) -> f64 {
        self.current_resistance
    }

    pub fn commutation_time(&self) -> Option<f64> {
        self.commutation_time
    }

    /// Flips the state of the switch.
    pub fn switch_state(&mut self) {
        self.current_state = !self.current_state;
        self.current_resistance = Self::resistance_for(self.current_state);
        tracing::debug!(
            "Switch {}:{} is now {}.",
            self.name(),
            self.graph_edge_id(),
            if self.current_state { "closed" } else { "open" }
        );
    }

    fn resistance_for(closed: bool) -> f64 {
        if closed {
            Self::CLOSED_RESISTANCE
        } else {
            Self::OPENED_RESISTANCE
        }
    }
}

impl ElectricBranch for Switch<'_> {
    fn kind(&self) -> BranchKind {
        BranchKind::Switch
    }

    fn mode_data(&self) -> &ElementModeData {
        self.base.mode_data()
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        self.base.mode_data_mut()
    }

    fn parameters(&self) -> String {
        format!("R = {} ohms", self.current_resistance)
    }

    fn impedance(&self) -> Complex64 {
        Complex64::new(self.current_resistance, 0.0)
    }
}

impl fmt::Display for Switch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Switch branch {}|{}|commutation time = ",
            self.name(),
            self.parameters()
        )?;
        match self.commutation_time {
            Some(t) => write!(f, "{t}"),
            None => write!(f, "none"),
        }
    }
}
