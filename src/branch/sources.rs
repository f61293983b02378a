// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Ideal AC (sine) or DC sources.

use std::fmt;

use num_complex::Complex64;

use super::{ensure_non_negative, BranchBase};
use crate::{
    capabilities::{SineSource, SineWave},
    graph_traits::{Edge, ElectricBranch},
    BranchKind, ElementModeData, Error,
};

crate::branch::impl_edge!(VoltageSource, CurrentSource);

/// An ideal voltage source, with a series inner resistance.
#[derive(Clone, Debug)]
pub struct VoltageSource<'n> {
    base: BranchBase<'n>,
    wave: SineWave,
    inner_resistance: f64,
}

impl<'n> VoltageSource<'n> {
    /// Creates a new `VoltageSource`.  The phase is in degrees, and a
    /// frequency of 0 makes it a DC source.
    ///
    /// Returns an error if the waveform parameters are invalid, or if the
    /// inner resistance is negative or not finite.
    pub fn try_new(
        magnitude: f64,
        frequency: f64,
        phase: f64,
        inner_resistance: f64,
        base: BranchBase<'n>,
    ) -> Result<Self, Error> {
        let wave = SineWave::try_new(magnitude, frequency, phase)?;
        Ok(Self {
            base,
            wave,
            inner_resistance: ensure_non_negative("inner resistance", inner_resistance)?,
        })
    }

    /// Returns the series inner resistance in ohms.
    pub fn inner_resistance(&self) -> f64 {
        self.inner_resistance
    }
}

impl SineSource for VoltageSource<'_> {
    fn sine_wave(&self) -> &SineWave {
        &self.wave
    }
}

impl ElectricBranch for VoltageSource<'_> {
    fn kind(&self) -> BranchKind {
        BranchKind::VoltageSource
    }

    fn mode_data(&self) -> &ElementModeData {
        self.base.mode_data()
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        self.base.mode_data_mut()
    }

    fn parameters(&self) -> String {
        format!("{}|Ri = {} ohms", self.wave, self.inner_resistance)
    }

    fn impedance(&self) -> Complex64 {
        Complex64::new(self.inner_resistance, 0.0)
    }
}

impl fmt::Display for VoltageSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Voltage source branch {}|{}", self.name(), self.wave)
    }
}

/// An ideal current source, with a shunt inner conductance.
#[derive(Clone, Debug)]
pub struct CurrentSource<'n> {
    base: BranchBase<'n>,
    wave: SineWave,
    inner_conductance: f64,
}

impl<'n> CurrentSource<'n> {
    /// Creates a new `CurrentSource`.  The phase is in degrees, and a
    /// frequency of 0 makes it a DC source.
    ///
    /// Returns an error if the waveform parameters are invalid, or if the
    /// inner conductance is negative or not finite.
    pub fn try_new(
        magnitude: f64,
        frequency: f64,
        phase: f64,
        inner_conductance: f64,
        base: BranchBase<'n>,
    ) -> Result<Self, Error> {
        let wave = SineWave::try_new(magnitude, frequency, phase)?;
        Ok(Self {
            base,
            wave,
            inner_conductance: ensure_non_negative("inner conductance", inner_conductance)?,
        })
    }

    /// Returns the shunt inner conductance in siemens.
    pub fn inner_conductance(&self) -> f64 {
        self.inner_conductance
    }
}

impl SineSource for CurrentSource<'_> {
    fn sine_wave(&self) -> &SineWave {
        &self.wave
    }
}

impl ElectricBranch for CurrentSource<'_> {
    fn kind(&self) -> BranchKind {
        BranchKind::CurrentSource
    }

    fn mode_data(&self) -> &ElementModeData {
        self.base.mode_data()
    }

    fn mode_data_mut(&mut self) -> &mut ElementModeData {
        self.base.mode_data_mut()
    }

    fn parameters(&self) -> String {
        format!("{}|Gi = {} S", self.wave, self.inner_conductance)
    }

    /// Returns the inverse of the inner conductance, which is infinite for an
    /// ideal source.
    fn impedance(&self) -> Complex64 {
        if self.inner_conductance == 0.0 {
            return Complex64::new(f64::INFINITY, 0.0);
        }
        Complex64::new(1.0 / self.inner_conductance, 0.0)
    }
}

impl fmt::Display for CurrentSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current source branch {}|{}", self.name(), self.wave)
    }
}
