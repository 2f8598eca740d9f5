use varreact::prelude::*;
use varreact::reactive::components::{FnSource, HeldSource, Lossless, ResistiveLoad};
use varreact::reactive::{SweepSolver, SweepSolverDescriptor, VariableElementDescriptor};

use approx::assert_relative_eq;

fn ramp_inductor() -> SweepSolver<Inductance, varreact::reactive::LinearCalibration> {
    SweepSolver::new(SweepSolverDescriptor {
        element: VariableInductor::new(Default::default()).unwrap(),
        // 0 V -> 10 V over the first millisecond, then held
        source: Box::new(FnSource { source_fn: |t: f64| (t * 1e4).min(10.0) }),
        load: Box::new(Lossless),
    })
}

#[test]
fn energy_survives_a_full_sweep() {
    let mut simulation = Simulation::new(SimulationDescriptor {
        solver: ramp_inductor(),
        sim_params: SimulationParameters { delta_t: 1e-5 },
        init_state: Some(SimulationState { time: 0.0, modulation: 0.0, state: 2.0 }),
    })
    .unwrap();

    simulation.run(RunDescriptor::<&str> {
        time_duration: 2e-3,
        verbose: false,
        save_settings: None,
    })
    .unwrap();

    let element = simulation.solver().element();
    assert_relative_eq!(element.param(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(element.state(), 20.0, max_relative = 1e-9);
    assert_relative_eq!(element.energy(), 20.0, max_relative = 1e-9);
    assert_relative_eq!(simulation.state().state, 20.0, max_relative = 1e-9);
    assert_relative_eq!(simulation.state().time, 2e-3, epsilon = 1e-12);
}

#[test]
fn mirrored_capacitor_follows_absolute_voltage() {
    let element = VariableCapacitor::new(VariableElementDescriptor {
        clamp_modulation: false,
        ..Default::default()
    })
    .unwrap();
    let mut solver = SweepSolver::new(SweepSolverDescriptor {
        element,
        source: Box::new(HeldSource { voltage: -5.0 }),
        load: Box::new(ResistiveLoad { resistance: 1e6 }),
    });

    let traces = solver
        .compute(ComputeDescriptor {
            state: &SimulationState { time: 0.0, modulation: 0.0, state: 1.0 },
            sim_params: SimulationParameters { delta_t: 1e-6 },
            nsteps: 3,
            bar: &None,
        })
        .unwrap();

    for p in traces.param.iter().skip(1) {
        assert_relative_eq!(*p, 50.5e-6, max_relative = 1e-12);
    }
    assert!(traces.state.iter().all(|&s| s >= 0.0));
}

#[test]
fn traces_are_saved_and_appended() {
    let path = std::env::temp_dir().join(format!("varreact-{}.h5", std::process::id()));

    let mut simulation = Simulation::new(SimulationDescriptor {
        solver: ramp_inductor(),
        sim_params: SimulationParameters { delta_t: 1e-4 },
        init_state: Some(SimulationState { time: 0.0, modulation: 0.0, state: 1.0 }),
    })
    .unwrap();

    simulation.run(RunDescriptor {
        time_duration: 1e-3,
        verbose: false,
        save_settings: Some(SaveSettings {
            filename: &path,
            save_type: SaveType::Parameter,
            overwrite: true,
        }),
    })
    .unwrap();
    simulation.run(RunDescriptor {
        time_duration: 5e-4,
        verbose: false,
        save_settings: Some(SaveSettings {
            filename: &path,
            save_type: SaveType::Full,
            overwrite: false,
        }),
    })
    .unwrap();

    let file = hdf5::File::open(&path).unwrap();
    let param = file.dataset("param").unwrap().read_1d::<f64>().unwrap();
    assert_eq!(param.len(), 15);
    assert_relative_eq!(param[0], 10.0 - 0.99, epsilon = 1e-9);
    assert_relative_eq!(param[14], 0.1, epsilon = 1e-12);

    let state = file.dataset("full/state").unwrap().read_1d::<f64>().unwrap();
    assert_eq!(state.len(), 5);
    for s in state.iter() {
        assert_relative_eq!(0.5 * 0.1 * s * s, 5.0, max_relative = 1e-9);
    }

    let dt = file.attr("time_step").unwrap().read_scalar::<f64>().unwrap();
    assert_eq!(dt, 1e-4);

    file.close().unwrap();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn run_honours_initial_modulation() {
    let mut simulation = Simulation::new(SimulationDescriptor {
        solver: SweepSolver::new(SweepSolverDescriptor {
            element: VariableInductor::new(Default::default()).unwrap(),
            source: Box::new(HeldSource { voltage: 10.0 }),
            load: Box::new(Lossless),
        }),
        sim_params: SimulationParameters { delta_t: 1e-4 },
        init_state: Some(SimulationState { time: 0.0, modulation: 10.0, state: 2.0 }),
    })
    .unwrap();

    simulation.run(RunDescriptor::<&str> {
        time_duration: 1e-3,
        verbose: false,
        save_settings: None,
    })
    .unwrap();

    let element = simulation.solver().element();
    assert_eq!(element.param(), 0.1);
    assert_relative_eq!(element.state(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(element.energy(), 0.2, epsilon = 1e-12);
    assert_eq!(simulation.state().modulation, 10.0);
}
