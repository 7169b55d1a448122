use approx::assert_abs_diff_eq;
use cgmath::Vector3;
use hyperspace::{Color, SimParams, Vector, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

fn world() -> World<Vector3<f64>> {
    World::new(3, SimParams::default()).unwrap()
}

fn random_vector(rng: &mut ChaChaRng, extent: f64) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
    )
}

#[test]
fn merging_keeps_mass_and_momentum() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut world = world();
        // Weak enough that close pairs are not flung apart before merging.
        world.set_gravitational_constant(1e-9).unwrap();
        let m1 = rng.random_range(50.0..500.0);
        let m2 = rng.random_range(50.0..500.0);
        let p1 = random_vector(&mut rng, 100.0);
        // Well inside the sum of the radii, which is at least 4.5.
        let p2 = p1 + random_vector(&mut rng, 1.0);
        let v1 = random_vector(&mut rng, 3.0);
        let v2 = random_vector(&mut rng, 3.0);
        world.add_body_with(p1, v1, m1, Color::RED);
        world.add_body_with(p2, v2, m2, Color::BLUE);
        let momentum = world.total_momentum();

        world.step();

        assert_eq!(world.bodies().len(), 1);
        let merged = &world.bodies()[0];
        assert_abs_diff_eq!(merged.mass(), m1 + m2, epsilon = 1e-9);
        let merged_momentum = merged.velocity().scaled(merged.mass());
        assert_abs_diff_eq!(merged_momentum.distance_to(&momentum), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn merged_body_sits_at_the_center_of_mass() {
    let mut world = world();
    world.set_gravitational_constant(1e-12).unwrap();
    world.add_body_with(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        300.0,
        Color::RED,
    );
    world.add_body_with(
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        100.0,
        Color::BLUE,
    );
    world.step();
    let merged = &world.bodies()[0];
    assert_abs_diff_eq!(merged.position().x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(merged.radius(), hyperspace::hyperball_radius(3, 400.0, 1.0));
}

#[test]
fn opposite_masses_annihilate() {
    let mut world = world();
    world.add_body_with(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        100.0,
        Color::RED,
    );
    world.add_body_with(
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        -100.0,
        Color::BLUE,
    );
    world.step();
    assert!(world.bodies().is_empty());
    assert!(!world.barycenter().is_defined());
}

#[test]
fn separated_bodies_do_not_merge() {
    let mut world = world();
    world.add_body_with(
        Vector3::new(-50.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        10.0,
        Color::RED,
    );
    world.add_body_with(
        Vector3::new(50.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        10.0,
        Color::BLUE,
    );
    world.step();
    assert_eq!(world.bodies().len(), 2);
}

#[test]
fn merge_ids_are_fresh() {
    let mut world = world();
    let a = world.add_body_with(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        100.0,
        Color::RED,
    );
    let b = world.add_body_with(
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        100.0,
        Color::BLUE,
    );
    world.step();
    let merged = world.bodies()[0].id();
    assert_ne!(merged, a);
    assert_ne!(merged, b);
    assert!(world.body(a).is_none());
    assert!(world.body(merged).is_some());
}
