//! Benchmarks for pbd2d simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use pbd2d::*;

fn bench_double_pendulum(c: &mut Criterion) {
    c.bench_function("double_pendulum_600_steps", |b| {
        b.iter(|| {
            let mut engine: SimulationEngine<f64> = SimulationEngine::default();
            let dp = engine
                .create_double_pendulum(Vec2::new(0.0, 0.0), 120.0, 90.0, 1.0, 1.0)
                .unwrap();
            engine.apply_impulse(dp.lower, Vec2::new(200.0, 0.0)).unwrap();
            for _ in 0..600 {
                engine.step();
            }
            engine.positions()
        });
    });
}

fn bench_chain_simulation(c: &mut Criterion) {
    c.bench_function("chain_50_links_60_steps", |b| {
        b.iter(|| {
            let config = EngineConfig::new().with_solver_iterations(12);
            let mut engine: SimulationEngine<f64> = SimulationEngine::new(config).unwrap();
            engine.create_pendulum_chain(Vec2::new(0.0, 0.0), 10.0, 50, 1.0).unwrap();
            engine.set_gravity(Vec2::new(60.0, 80.0));
            for _ in 0..60 {
                engine.step();
            }
            engine.positions()
        });
    });
}

fn bench_cascade_removal(c: &mut Criterion) {
    c.bench_function("remove_200_particles_from_chain", |b| {
        b.iter(|| {
            let mut engine: SimulationEngine<f64> = SimulationEngine::default();
            engine.create_pendulum_chain(Vec2::new(0.0, 0.0), 5.0, 200, 1.0).unwrap();
            while engine.particle_count() > 1 {
                engine.remove_particle(1).unwrap();
            }
            engine.constraint_count()
        });
    });
}

criterion_group!(benches, bench_double_pendulum, bench_chain_simulation, bench_cascade_removal);
criterion_main!(benches);
