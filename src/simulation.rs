use std::cmp::min;
use std::path::Path;

use crate::{Error, Solver, ComputeDescriptor};

/// Most time steps kept in memory at once.
const MAX_STORE_STEPS: usize = 1_000_000;

/// Simulation specific parameters.
#[derive(Copy, Clone, Debug)]
pub struct SimulationParameters {
    /// The length of each temporal step in the simulation.
    pub delta_t: f64,
}

/// Describes the element state at the current time step.
#[derive(Clone, Debug, Default)]
pub struct SimulationState {
    /// The time of the last time step of the simulation.
    pub time: f64,
    /// The modulation voltage applied at `time`.
    pub modulation: f64,
    /// The inductor current or capacitor voltage at `time`.
    pub state: f64,
}

/// Describes a simulation.
pub struct SimulationDescriptor<S: Solver> {
    /// The `Solver` for the simulation.
    pub solver: S,
    /// The parameters for the simulation.
    pub sim_params: SimulationParameters,
    /// The state that the simulation starts in.
    pub init_state: Option<SimulationState>,
}

/// Describes a simulation run.
pub struct RunDescriptor<P: AsRef<Path>> {
    /// How long, in seconds, the simulation should run.
    pub time_duration: f64,
    /// Whether or not to print information to the console.
    pub verbose: bool,
    /// What, if any, information to save to file.
    pub save_settings: Option<SaveSettings<P>>,
}

/// How data should be saved to file.
#[derive(Debug)]
pub struct SaveSettings<P: AsRef<Path>> {
    /// The path to the save file.
    pub filename: P,
    /// What information to save.
    pub save_type: SaveType,
    /// Whether or not to overwrite any possible saved data.
    pub overwrite: bool,
}

/// Represents what data to save.
#[derive(PartialEq, Debug)]
pub enum SaveType {
    /// Save the modulation voltage, parameter and state of every step.
    Full,
    /// Save only the parameter of every step.
    Parameter,
}

/// The main `struct` of the framework.
pub struct Simulation<S: Solver> {
    solver: S,
    sim_params: SimulationParameters,
    state: SimulationState,
}

impl<S: Solver> Simulation<S> {
    /// Creates a new `Simulation` instance.
    #[inline]
    pub fn new(desc: SimulationDescriptor<S>) -> Result<Self, Error> {
        let state = desc.init_state.unwrap_or_default();
        for (name, value) in [
            ("time", state.time),
            ("modulation", state.modulation),
            ("state", state.state),
        ] {
            if !value.is_finite() {
                return Err(Error::BadInit { name, value })
            }
        }

        Ok(Self {
            state,
            solver: desc.solver,
            sim_params: desc.sim_params,
        })
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Does a computational run.
    #[inline]
    pub fn run<P: AsRef<Path>>(
        &mut self,
        desc: RunDescriptor<P>,
    ) -> Result<(), Error> {
        let nsteps = (desc.time_duration / self.sim_params.delta_t).ceil() as usize;
        if nsteps == 0 {
            return Ok(())
        }
        let store_size = min(nsteps + 1, MAX_STORE_STEPS + 1);
        let mut full_offset = 0;
        let mut param_offset = 0;

        // optionally create file
        if let Some(SaveSettings {
            ref filename,
            ref save_type,
            overwrite,
        }) = desc.save_settings {
            let filename = filename.as_ref();
            if filename.exists() && !overwrite {
                let file = hdf5::File::append(filename)?;

                let previous_size = file.dataset("param")?.shape()[0];
                param_offset = previous_size;
                file.dataset("param")?.resize(previous_size + nsteps)?;

                if *save_type == SaveType::Full {
                    if let Ok(full_group) = file.group("full") {
                        let previous_full_size = full_group.dataset("state")?.shape()[0];
                        full_offset = previous_full_size;
                        full_group.dataset("modulation")?.resize(previous_full_size + nsteps)?;
                        full_group.dataset("state")?.resize(previous_full_size + nsteps)?;
                    } else {
                        create_full_group(&file, nsteps)?;
                    }
                }

                file.close()?;
            } else {
                let file = hdf5::File::create(filename)?;

                file.new_dataset::<f64>()
                    .shape(hdf5::Extent::resizable(nsteps))
                    .create("param")?;
                if *save_type == SaveType::Full {
                    create_full_group(&file, nsteps)?;
                }

                // save the step as a file attribute
                let dt_attr = file.new_attr::<f64>()
                    .shape(hdf5::Extents::Scalar)
                    .create("time_step");
                if let Ok(attr) = dt_attr {
                    attr.write_scalar(&self.sim_params.delta_t)?;
                }

                file.close()?;
            }
        }

        // setup output if verbose
        let bar = if desc.verbose {
            println!("# of time steps: {}", nsteps);
            Some(indicatif::ProgressBar::new(nsteps as u64))
        } else {
            None
        };

        // separate calculations into sets of time steps per loop
        let nloops = ((nsteps-1) / (store_size-1)) + 1;
        log::debug!("running {} steps of {} s in {} chunks", nsteps, self.sim_params.delta_t, nloops);
        for i in 0..nloops {
            let start_index = (store_size-1) * i;
            let end_index = min((store_size-1)*(i+1), nsteps);
            let niters = end_index - start_index;

            // do calculations
            let traces = self.solver.compute(ComputeDescriptor {
                state: &self.state,
                sim_params: self.sim_params,
                nsteps: niters,
                bar: &bar,
            })?;

            // optionally write data to file
            if let Some(SaveSettings {
                ref filename,
                ref save_type,
                ..
            }) = desc.save_settings {
                let file = hdf5::File::open_rw(filename)?;

                file.dataset("param")?
                    .write_slice(
                        traces.param.slice(ndarray::s![1..=niters]),
                        ndarray::s![(start_index+param_offset)..(end_index+param_offset)],
                    )?;

                if *save_type == SaveType::Full {
                    file.dataset("full/modulation")?
                        .write_slice(
                            traces.modulation.slice(ndarray::s![1..=niters]),
                            ndarray::s![(start_index+full_offset)..(end_index+full_offset)],
                        )?;
                    file.dataset("full/state")?
                        .write_slice(
                            traces.state.slice(ndarray::s![1..=niters]),
                            ndarray::s![(start_index+full_offset)..(end_index+full_offset)],
                        )?;
                }

                file.close()?;
            }

            // update state
            self.state.modulation = traces.modulation[niters];
            self.state.state = traces.state[niters];
            self.state.time += (niters as f64)*self.sim_params.delta_t;
        }

        if let Some(ref bar) = bar {
            bar.finish();
        }

        Ok(())
    }
}

fn create_full_group(file: &hdf5::File, nsteps: usize) -> Result<(), Error> {
    let full_group = file.create_group("full")?;
    full_group.new_dataset::<f64>()
        .shape(hdf5::Extent::resizable(nsteps))
        .create("modulation")?;
    full_group.new_dataset::<f64>()
        .shape(hdf5::Extent::resizable(nsteps))
        .create("state")?;
    Ok(())
}
