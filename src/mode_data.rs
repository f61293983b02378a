// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines `ElementModeData`, the electrical state of a branch.

use num_complex::Complex64;

/// The electrical state of a branch at a given instant.
///
/// All values start out unset, and are filled in by a solver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementModeData {
    /// The voltage phasor across the branch.
    pub voltage: Option<Complex64>,
    /// The current phasor through the branch.
    pub current: Option<Complex64>,
    /// The active power consumed by the branch.
    pub active_power: Option<f64>,
    /// The reactive power consumed by the branch.
    pub reactive_power: Option<f64>,
    /// The simulation time the values belong to.
    pub time: Option<f64>,
}

impl ElementModeData {
    /// Creates a new `ElementModeData` with all values unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the complex power `S = V * conj(I)` and stores its real and
    /// imaginary parts as the active and reactive power.
    ///
    /// Returns `None` and leaves the power values untouched when the voltage
    /// or the current is unset.
    pub fn calculate_power(&mut self) -> Option<Complex64> {
        let (Some(voltage), Some(current)) = (self.voltage, self.current) else {
            return None;
        };

        let power = voltage * current.conj();
        self.active_power = Some(power.re);
        self.reactive_power = Some(power.im);

        Some(power)
    }

    /// Resets all values to unset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
