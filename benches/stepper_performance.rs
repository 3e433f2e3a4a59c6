//! Performance benchmarks for the explicit diffusion stepper
//!
//! Measures the cost of one time step and of complete runs as the grid
//! grows.
//!
//! # Running
//!
//! ```bash
//! cargo bench --bench stepper_performance
//! ```
//!
//! Results land in `target/criterion/`.
//!
//! # Expected Scaling
//!
//! One step touches every point a constant number of times, so the time per
//! step should grow linearly with the number of points. A full run costs
//! `points × steps` point updates; the throughput reported by criterion
//! should stay roughly constant across sizes until the array leaves the cache.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use diffusion_rs::driver::{run_simulation, SimulationConfig};
use diffusion_rs::models::{set_initial_profile, LinearDiffusion1D};
use diffusion_rs::physics::PhysicalModel;
use diffusion_rs::solver::{
    calculate_time_step, DiffusionStepper, DomainBoundaries, ExplicitSolver, Scenario, Solver, SolverConfiguration,
    Stencil,
};

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// One stepper call for both stencil variants
///
/// - **Points**: 100, 600 (default run), 10 000, 100 000
/// - **D**: 100, **dx**: 0.5, dt at the stability bound
fn benchmark_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Step");

    let dx = 0.5;
    let d = 100.0;
    let dt = calculate_time_step(dx, d).unwrap();

    for points in [100usize, 600, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*points as u64));

        for stencil in [Stencil::Interior, Stencil::Periodic] {
            group.bench_with_input(
                BenchmarkId::new(stencil.name(), points),
                points,
                |b, &points| {
                    let mut concentration = set_initial_profile(points, 500.0, 0.0);
                    let mut stepper = DiffusionStepper::new(dx, dt, d, stencil).unwrap();

                    b.iter(|| stepper.step(black_box(&mut concentration)));
                },
            );
        }
    }

    group.finish();
}

/// Complete solver runs through the `Solver` trait
///
/// 1 000 steps on growing grids, fixed ends.
fn benchmark_explicit_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Explicit FTCS Solver");
    let steps = 1_000;

    for points in [100usize, 600, 5_000].iter() {
        group.throughput(Throughput::Elements((*points * steps) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(points),
            points,
            |b, &points| {
                // Setup (not measured)
                let model = LinearDiffusion1D::new(points, 0.5, 100.0, 500.0, 0.0).unwrap();
                let dt = calculate_time_step(0.5, 100.0).unwrap();
                let initial = model.setup_initial_state();
                let scenario = Scenario::new(Box::new(model), DomainBoundaries::fixed(500.0, 0.0, initial));
                let config = SolverConfiguration::time_evolution(dt, steps);
                let solver = ExplicitSolver::new();

                b.iter(|| solver.solve(black_box(&scenario), black_box(&config)).unwrap());
            },
        );
    }

    group.finish();
}

/// The default configuration end to end (600 points, 5 000 steps)
fn benchmark_default_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("Default Run");
    group.sample_size(10);

    let config = SimulationConfig::default();
    group.throughput(Throughput::Elements(600 * config.time_steps as u64));

    group.bench_function("600 points & 5000 steps", |b| {
        b.iter(|| run_simulation(black_box(&config)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_step,
    benchmark_explicit_solver,
    benchmark_default_run
);
criterion_main!(benches);
