use varreact::prelude::*;
use varreact::reactive::components::{FnSource, ResistiveLoad, TestProbe};
use varreact::reactive::{SweepSolver, SweepSolverDescriptor, VariableElementDescriptor};

use std::f64::consts::PI;

fn main() {
    let delta_t = 1e-6; // [s]
    let frequency = 50.0; // [Hz]

    let inductor = VariableInductor::new(VariableElementDescriptor {
        param_low: 10.0, // [H]
        param_high: 0.1, // [H]
        voltage_low: 0.0, // [V]
        voltage_high: 10.0, // [V]
        clamp_modulation: true,
        delta_t,
        ..Default::default()
    })
    .unwrap();

    let source_fn = move |t: f64| 5.0 + 5.0 * f64::sin(2.0*PI * frequency * t);

    // look at the modulation signal before it drives the inductor
    let mut probe = TestProbe::new();
    probe.observe(source_fn(0.25 / frequency));
    println!("{}", probe.info().join("\n"));

    let mut simulation = Simulation::new(SimulationDescriptor {
        solver: SweepSolver::new(SweepSolverDescriptor {
            element: inductor,
            source: Box::new(FnSource { source_fn }),
            load: Box::new(ResistiveLoad { resistance: 1.0 }),
        }),
        sim_params: SimulationParameters { delta_t },
        init_state: Some(SimulationState { time: 0.0, modulation: 0.0, state: 1.0 }),
    })
    .unwrap();

    println!(
        "\n-- General Simulation Info --\n\
        Δt:           {:<9.2e} s\n\
        f_mod:        {:<9.2e} Hz\n",
        delta_t,
        frequency,
    );

    println!("-- Run Part 1 --");
    // one modulation period, parameter only
    simulation.run(RunDescriptor {
        time_duration: 1.0 / frequency, // [s]
        verbose: true,
        save_settings: Some(SaveSettings {
            filename: "data/modulated_inductor.h5",
            save_type: SaveType::Parameter,
            overwrite: true,
        }),
    })
    .unwrap();

    println!("-- Run Part 2 --");
    // a second period with full traces
    simulation.run(RunDescriptor {
        time_duration: 1.0 / frequency,
        verbose: true,
        save_settings: Some(SaveSettings {
            filename: "data/modulated_inductor.h5",
            save_type: SaveType::Full,
            overwrite: false,
        }),
    })
    .unwrap();

    println!("\n{}", simulation.solver().element().info().join("\n"));
}
