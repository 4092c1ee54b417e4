use pbd2d::{PhysicsError, SimulationEngine, Vec2};

fn five_particle_web() -> SimulationEngine<f64> {
    let mut engine: SimulationEngine<f64> = SimulationEngine::default();
    for i in 0..5 {
        engine.create_particle(Vec2::new(i as f64 * 10.0, 0.0), 1.0);
    }
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 4), (1, 3)] {
        engine.create_constraint(a, b, 10.0, 1.0).unwrap();
    }
    engine
}

fn endpoints(engine: &SimulationEngine<f64>) -> Vec<(usize, usize)> {
    engine.constraints().iter().map(|c| (c.particle1(), c.particle2())).collect()
}

#[test]
fn removal_cascades_and_renumbers() {
    let mut engine = five_particle_web();

    let removed = engine.remove_particle(2).unwrap();
    assert_eq!(removed.position, Vec2::new(20.0, 0.0));

    assert_eq!(engine.particle_count(), 4);
    assert_eq!(endpoints(&engine), vec![(0, 1), (2, 3), (0, 3), (1, 2)]);
    for c in engine.constraints() {
        assert!(c.particle1() < engine.particle_count());
        assert!(c.particle2() < engine.particle_count());
    }
    // Former particle 3 now sits at index 2.
    assert_eq!(engine.particle(2).unwrap().position, Vec2::new(30.0, 0.0));
}

#[test]
fn removing_first_and_last() {
    let mut engine = five_particle_web();
    engine.remove_particle(4).unwrap();
    assert_eq!(endpoints(&engine), vec![(0, 1), (1, 2), (2, 3), (1, 3)]);

    engine.remove_particle(0).unwrap();
    assert_eq!(endpoints(&engine), vec![(0, 1), (1, 2), (0, 2)]);
}

#[test]
fn out_of_range_removal_is_an_error_and_changes_nothing() {
    let mut engine = five_particle_web();
    let revision = engine.revision();

    assert_eq!(
        engine.remove_particle(5).unwrap_err(),
        PhysicsError::ParticleOutOfBounds { index: 5, count: 5 }
    );
    assert_eq!(engine.particle_count(), 5);
    assert_eq!(engine.constraint_count(), 6);
    assert_eq!(engine.revision(), revision);
}

#[test]
fn renumbered_pairs_still_detect_duplicates() {
    let mut engine = five_particle_web();
    engine.remove_particle(0).unwrap();
    // Old (1, 2) is now (0, 1).
    assert_eq!(
        engine.create_constraint(1, 0, 5.0, 1.0),
        Err(PhysicsError::DuplicateConstraint { a: 1, b: 0 })
    );
}

#[test]
fn remove_constraint_keeps_order() {
    let mut engine = five_particle_web();
    let removed = engine.remove_constraint(1).unwrap();
    assert!(removed.connects(1, 2));
    assert_eq!(endpoints(&engine), vec![(0, 1), (2, 3), (3, 4), (0, 4), (1, 3)]);

    assert_eq!(
        engine.remove_constraint(10).unwrap_err(),
        PhysicsError::ConstraintOutOfBounds { index: 10, count: 5 }
    );
}

#[test]
fn revision_tracks_structural_changes() {
    let mut engine: SimulationEngine<f64> = SimulationEngine::default();
    assert_eq!(engine.revision(), 0);
    engine.create_particle(Vec2::zero(), 1.0);
    engine.create_particle(Vec2::new(1.0, 0.0), 1.0);
    engine.create_constraint(0, 1, 1.0, 1.0).unwrap();
    assert_eq!(engine.revision(), 3);

    let before_step = engine.revision();
    engine.step();
    assert_eq!(engine.revision(), before_step, "stepping is not structural");

    engine.remove_particle(0).unwrap();
    engine.clear();
    assert_eq!(engine.revision(), 5);
}

#[test]
fn removed_scene_keeps_simulating() {
    let mut engine = five_particle_web();
    engine.remove_particle(2).unwrap();
    for _ in 0..30 {
        engine.step();
    }
    for p in engine.particles() {
        assert!(p.position.x.is_finite() && p.position.y.is_finite());
    }
}
