//! Includes commonly used library components.

pub use crate::{
    ComputeDescriptor,
    Error,
    RunDescriptor,
    SaveSettings,
    SaveType,
    Simulation,
    SimulationDescriptor,
    SimulationParameters,
    SimulationState,
    Solver,
    Traces,
};
pub use crate::reactive::{
    Capacitance,
    Inductance,
    ModulationPolicy,
    ModulationSource,
    Load,
    Quantity,
    VariableCapacitor,
    VariableInductor,
};
