use crate::{ComputeDescriptor, Error, Solver, Traces};
use crate::reactive::{Load, ModulationPolicy, ModulationSource, ParametricElement, Quantity};

/// Describes the composition of a `SweepSolver`.
pub struct SweepSolverDescriptor<Q: Quantity, P: ModulationPolicy> {
    pub element: ParametricElement<Q, P>,
    pub source: Box<dyn ModulationSource>,
    pub load: Box<dyn Load<Q>>,
}

/// Steps a single parametric element through a modulation waveform.
///
/// Each step evaluates the source, runs the element's update and then lets
/// the load evolve the state until the next step.
pub struct SweepSolver<Q: Quantity, P: ModulationPolicy> {
    element: ParametricElement<Q, P>,
    source: Box<dyn ModulationSource>,
    load: Box<dyn Load<Q>>,
}

impl<Q: Quantity, P: ModulationPolicy> SweepSolver<Q, P> {
    #[inline]
    pub fn new(desc: SweepSolverDescriptor<Q, P>) -> Self {
        Self {
            element: desc.element,
            source: desc.source,
            load: desc.load,
        }
    }

    #[inline]
    pub fn element(&self) -> &ParametricElement<Q, P> {
        &self.element
    }
}

impl<Q: Quantity, P: ModulationPolicy> Solver for SweepSolver<Q, P> {
    fn compute(&mut self, desc: ComputeDescriptor) -> Result<Traces, Error> {
        let mut modulation = ndarray::Array1::<f64>::zeros(desc.nsteps + 1);
        let mut param = ndarray::Array1::<f64>::zeros(desc.nsteps + 1);
        let mut state = ndarray::Array1::<f64>::zeros(desc.nsteps + 1);

        // resume from the stored state at the stored modulation voltage
        let across = self.element.core().across();
        self.element.core_mut().commit(desc.state.state, across);
        if desc.state.modulation != self.element.modulation_voltage() {
            self.element.settle(desc.state.modulation);
        }
        modulation[0] = desc.state.modulation;
        param[0] = self.element.param();
        state[0] = desc.state.state;

        let delta_t = desc.sim_params.delta_t;
        for t_index in 0..desc.nsteps {
            let t = ((t_index + 1) as f64)*delta_t + desc.state.time;

            let v_mod = self.source.generate(t);
            let p = self.element.step(v_mod);

            let next = self.load.next_state(p, self.element.state(), delta_t);
            let across = self.element.core().across();
            self.element.core_mut().commit(next, across);

            modulation[t_index+1] = v_mod;
            param[t_index+1] = p;
            state[t_index+1] = next;

            if let Some(ref bar) = desc.bar {
                bar.inc(1)
            }
        }

        Ok(Traces { modulation, param, state })
    }
}
