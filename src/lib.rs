//! Voltage-modulated inductors and capacitors.
//!
//! A variable reactive element takes its inductance or capacitance from the
//! voltage on a third "modulation" terminal. Each simulation step the new
//! value is interpolated from that voltage and the stored state is rescaled
//! so the element's energy does not jump.
//!
//! To get started, refer to the `demos` directory in the main repository.

mod simulation;

pub mod reactive;
pub mod prelude;
pub mod units;

pub use simulation::{
    RunDescriptor, SaveSettings, SaveType, Simulation, SimulationDescriptor, SimulationParameters,
    SimulationState,
};

/// Represents an error in element configuration or in a simulation run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{quantity} is derived from the modulation voltage and may not be set directly")]
    DerivedParameter {
        quantity: &'static str,
    },
    #[error("Calibration domain has zero width \
        ( low and high modulation voltage are both {voltage} V )")]
    DegenerateDomain {
        voltage: f64,
    },
    #[error("Calibration value {name} is not finite ( value: {value} )")]
    NonFinite {
        name: &'static str,
        value: f64,
    },
    #[error("Init {name} value is not finite ( value: {value} )")]
    BadInit {
        name: &'static str,
        value: f64,
    },
    #[error(transparent)]
    H5Error(#[from] hdf5::Error),
}

/// Manages actual computations.
pub trait Solver {
    /// Steps the element through a set of times and records its traces.
    fn compute(&mut self, desc: ComputeDescriptor) -> Result<Traces, Error>;
}

/// Describes how a `Solver` should do computations.
pub struct ComputeDescriptor<'a> {
    pub state: &'a SimulationState,
    pub sim_params: SimulationParameters,
    pub nsteps: usize,
    pub bar: &'a Option<indicatif::ProgressBar>,
}

/// Per step values produced by a `Solver`.
///
/// Row 0 of every trace holds the values at `SimulationState::time`, so each
/// array has `nsteps + 1` entries.
pub struct Traces {
    pub modulation: ndarray::Array1<f64>,
    pub param: ndarray::Array1<f64>,
    pub state: ndarray::Array1<f64>,
}
