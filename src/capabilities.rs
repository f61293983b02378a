// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Capabilities that branch types can have in addition to being an
//! [`ElectricBranch`][crate::ElectricBranch].
//!
//! A branch type gets a capability by holding the corresponding state struct
//! ([`SineWave`] or [`ReactiveState`]) and implementing the trait that exposes
//! it.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::{branch::ensure_finite, branch::ensure_non_negative, ElementModeData, Error};

/// Returns the angular frequency `2πf` for the given frequency.
pub fn cyclic_frequency(frequency: f64) -> f64 {
    2.0 * PI * frequency
}

/// The waveform of an ideal sine source.  A frequency of 0 describes a DC
/// source.
///
/// The parameters can't be changed after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SineWave {
    magnitude: f64,
    frequency: f64,
    phase: f64,
    cyclic_frequency: f64,
    string_repr: String,
}

impl SineWave {
    /// Creates a new `SineWave`.
    ///
    /// Returns an error if any of the parameters is not finite, or if the
    /// frequency is negative.
    pub fn try_new(magnitude: f64, frequency: f64, phase: f64) -> Result<Self, Error> {
        let magnitude = ensure_finite("magnitude", magnitude)?;
        let frequency = ensure_non_negative("frequency", frequency)?;
        let phase = ensure_finite("phase", phase)?;

        Ok(Self {
            magnitude,
            frequency,
            phase,
            cyclic_frequency: cyclic_frequency(frequency),
            string_repr: format!("{magnitude}<{phase}|{frequency}"),
        })
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn cyclic_frequency(&self) -> f64 {
        self.cyclic_frequency
    }

    /// Returns the canonical `<magnitude><phase|frequency>` form, for example
    /// `10<0|50`.
    pub fn as_str(&self) -> &str {
        &self.string_repr
    }

    /// Returns the phasor `magnitude∠phase`, with the phase in degrees.
    pub fn phasor(&self) -> Complex64 {
        Complex64::from_polar(self.magnitude, self.phase.to_radians())
    }
}

impl std::fmt::Display for SineWave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string_repr)
    }
}

/// Implemented by ideal AC or DC sources.
pub trait SineSource {
    /// Returns the waveform of the source.
    fn sine_wave(&self) -> &SineWave;

    fn magnitude(&self) -> f64 {
        self.sine_wave().magnitude()
    }

    fn frequency(&self) -> f64 {
        self.sine_wave().frequency()
    }

    fn phase(&self) -> f64 {
        self.sine_wave().phase()
    }

    fn cyclic_frequency(&self) -> f64 {
        self.sine_wave().cyclic_frequency()
    }
}

/// The frequency dependent state of a reactive branch.
///
/// The frequency, the cyclic frequency and the reactance are only ever
/// updated together, through [`Reactive::recompute_reactance`].
#[derive(Clone, Debug, PartialEq)]
pub struct ReactiveState {
    frequency: f64,
    cyclic_frequency: f64,
    reactance: Complex64,
}

impl ReactiveState {
    pub(crate) fn new(frequency: f64, reactance: Complex64) -> Self {
        Self {
            frequency,
            cyclic_frequency: cyclic_frequency(frequency),
            reactance,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn cyclic_frequency(&self) -> f64 {
        self.cyclic_frequency
    }

    pub fn reactance(&self) -> Complex64 {
        self.reactance
    }

    /// Replaces the state with the one for `frequency`, computing the new
    /// reactance with `law`.  The state is left unchanged if the frequency is
    /// negative or not finite.
    pub(crate) fn recompute(
        &mut self,
        frequency: f64,
        law: impl FnOnce(f64) -> Complex64,
    ) -> Result<Complex64, Error> {
        let frequency = ensure_non_negative("frequency", frequency)?;
        let reactance = law(frequency);
        *self = Self::new(frequency, reactance);
        Ok(reactance)
    }
}

/// Implemented by branches whose reactance depends on the frequency.
pub trait Reactive {
    /// Computes the reactance at the given frequency from the physical
    /// parameter of the branch.
    ///
    /// This is a pure function of the parameter and `frequency`, and doesn't
    /// change the stored state.
    fn reactance(&self, frequency: f64) -> Complex64;

    /// Returns the stored frequency dependent state.
    fn reactive_state(&self) -> &ReactiveState;

    /// Changes the frequency of the branch, and returns the new reactance.
    ///
    /// Fails with an `InvalidParameter` error, without changing anything, if
    /// the frequency is negative or not finite.
    fn recompute_reactance(&mut self, frequency: f64) -> Result<Complex64, Error>;

    /// Returns the frequency the stored reactance was computed for.
    fn frequency(&self) -> f64 {
        self.reactive_state().frequency()
    }

    /// Returns the reactance at the stored frequency.
    fn current_reactance(&self) -> Complex64 {
        self.reactive_state().reactance()
    }

}

/// Extension point for transient analysis.
///
/// No branch type implements this yet.  A transient solver would use it to
/// read the companion model of a passive branch for a given time step.
pub trait TransientPassive {
    /// Returns the electrical state of the branch in the current time step.
    fn transient_mode(&self) -> &ElementModeData;

    /// Returns the companion model impedance for the given time step.
    fn transient_impedance(&self, time_step: f64) -> Complex64;

    /// Returns the companion model source voltage for the given time step.
    fn transient_emf(&self, time_step: f64) -> Complex64;
}
