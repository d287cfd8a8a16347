//! Performance benchmarks for the forward Euler solver
//!
//! # What We're Measuring
//!
//! 1. **Species scaling**: one pass over N independent compounds
//!    - Time ∝ species × time steps
//!
//! 2. **Batched vs separate**: the six-run study as one scenario of six
//!    species, against six single-compound `simulate` calls
//!    - Batched saves five grid builds and trajectory allocations
//!
//! 3. **Horizon scaling**: `simulate` for a single compound
//!    - Time ∝ number of grid points
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all solver benchmarks
//! cargo bench --bench solver_performance
//!
//! # Run only the study comparison
//! cargo bench --bench solver_performance study
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use decay_rs::models::{simulate, Compound, FirstOrderDecay};
use decay_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};
use decay_rs::study::{Study, StudyConfig};
use std::hint::black_box;

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Euler solver over 1000 steps with a growing number of species
///
/// - **Species**: 1, 6, 50, 500
/// - **Grid**: dt = 0.1 s, t_max = 100 s → 1000 points
fn benchmark_euler_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward Euler Solver");
    let config = SolverConfiguration::new(0.1, 100.0);

    for species in [1usize, 6, 50, 500] {
        let compounds = (0..species)
            .map(|i| Compound::new(format!("c{i}"), 0.001 * (i + 1) as f64))
            .collect();
        let scenario = Scenario::new(Box::new(FirstOrderDecay::new(compounds, 1.0)));
        let solver = EulerSolver::new();

        group.throughput(Throughput::Elements((species * 1000) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(species), &species, |b, _| {
            b.iter(|| {
                solver
                    .solve(black_box(&scenario), black_box(&config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// The default six-run study, batched against one call per run
fn benchmark_study(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bleaching Study");
    let config = StudyConfig::default();

    group.bench_function("batched", |b| {
        let study = Study::new(config.clone());
        b.iter(|| black_box(&study).run().unwrap());
    });

    group.bench_function("separate", |b| {
        b.iter(|| {
            for run in &config.runs {
                black_box(
                    simulate(
                        run.rate_constant,
                        config.initial_concentration,
                        config.time_step,
                        config.horizon,
                    )
                    .unwrap(),
                );
            }
        });
    });

    group.finish();
}

/// Single-compound `simulate` with growing horizons at dt = 0.1 s
fn benchmark_simulate_horizon(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulate Horizon");

    for horizon in [10.0, 100.0, 1000.0, 10000.0] {
        group.throughput(Throughput::Elements((horizon / 0.1) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon),
            &horizon,
            |b, &horizon| {
                b.iter(|| simulate(black_box(0.05), 1.0, 0.1, black_box(horizon)).unwrap());
            },
        );
    }

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_euler_solver,
    benchmark_study,
    benchmark_simulate_horizon
);
criterion_main!(benches);
