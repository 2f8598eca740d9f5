pub mod components;

mod base;
mod calibration;
mod element;
mod quantity;
mod sweep_solver;

pub use base::{Companion, Integration, ReactiveCore};
pub use calibration::{rescale_state, stored_energy, BoundaryPolicy, LinearCalibration};
pub use element::{
    EditField, EditInfo, ParametricElement, VariableCapacitor, VariableElementDescriptor,
    VariableInductor,
};
pub use quantity::{Capacitance, Inductance};
pub use sweep_solver::{SweepSolver, SweepSolverDescriptor};

/// The physical quantity varied by a parametric element.
///
/// Implemented by `Inductance` (state is the inductor current) and
/// `Capacitance` (state is the capacitor voltage).
pub trait Quantity {
    /// Parameter name used in edit labels, e.g. "Inductance".
    const NAME: &'static str;
    /// Title shown in element info.
    const ELEMENT: &'static str;
    const SYMBOL: &'static str;
    const UNIT: &'static str;
    /// Symbol and unit of the paired state variable.
    const STATE_SYMBOL: &'static str;
    const STATE_UNIT: &'static str;
    /// Editable range of the calibration bounds.
    const MIN: f64;
    const MAX: f64;
    const DEFAULT_LOW: f64;
    const DEFAULT_HIGH: f64;

    /// Resistance of the companion model for one time step.
    fn companion_resistance(param: f64, delta_t: f64, integration: Integration) -> f64;

    /// Current of the companion model's history source.
    ///
    /// `across` is the variable paired with the state: branch voltage for an
    /// inductor, branch current for a capacitor.
    fn history_source(
        resistance: f64,
        state: f64,
        across: f64,
        integration: Integration,
    ) -> f64;

    /// Decay time constant of the element discharging into `resistance`.
    fn time_constant(param: f64, resistance: f64) -> f64;
}

/// Maps a modulation voltage to a reactive parameter and carries the stored
/// state across the change.
pub trait ModulationPolicy {
    fn interpolate(&self, modulation_voltage: f64) -> f64;

    /// New state after the parameter moves from `param_old` to `param_new`.
    fn rescale(&self, param_old: f64, state_old: f64, param_new: f64) -> f64 {
        rescale_state(param_old, state_old, param_new)
    }
}

/// Generates the voltage seen on the modulation terminal.
pub trait ModulationSource {
    fn generate(&self, time: f64) -> f64;
}

/// Evolves an element's state between kernel updates.
pub trait Load<Q: Quantity> {
    fn next_state(&self, param: f64, state: f64, delta_t: f64) -> f64;
}
