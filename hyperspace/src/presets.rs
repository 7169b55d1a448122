//! Canned scenes for every dimension tier.
//!
//! Presets are numbered from 1 within their tier. Scenes are described with
//! plain component lists so one catalogue serves every vector type; the world
//! turns them into bodies.

use std::f64::consts::PI;

use rand::Rng;

use crate::color::Color;

/// A body as a preset describes it. A missing colour is picked at random.
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub mass: f64,
    pub color: Option<Color>,
}

impl BodySpec {
    pub fn new(position: &[f64], velocity: &[f64], mass: f64) -> Self {
        Self {
            position: position.to_vec(),
            velocity: velocity.to_vec(),
            mass,
            color: None,
        }
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Reads the flat `[position.., mass, velocity..]` layout used for adding
    /// bodies by hand. The caller checks the length.
    pub(crate) fn from_stats(dimension: usize, stats: &[f64]) -> Self {
        Self::new(
            &stats[..dimension],
            &stats[dimension + 1..],
            stats[dimension],
        )
    }
}

/// Number of presets offered for worlds of `dimension`.
pub fn preset_count(dimension: usize) -> usize {
    match dimension {
        2 => 7,
        3 => 4,
        4 => 1,
        _ => 1,
    }
}

/// Name of a preset, or an empty string for an unknown id.
pub fn preset_name(dimension: usize, id: usize) -> &'static str {
    match (dimension, id) {
        (2, 1) => "Infinite Fun",
        (2, 2) => "3 Body System",
        (2, 3) => "2 Body System",
        (2, 4) => "Orbit in Orbit",
        (2, 5) => "Four Dancing Planets",
        (2, 6) => "A Sun and Two Moons",
        (2, 7) => "Create-a-Star",
        (3, 1) => "The Cube",
        (3, 2) => "Planet Cyclone",
        (3, 3) => "Planet Whirl",
        (3, 4) => "Create-a-Star",
        (4, 1) => "Create-a-Star",
        (d, 1) if d >= 5 => "A very lonely planet",
        _ => "",
    }
}

/// Bodies of a preset, or `None` for an unknown id.
pub fn preset_bodies(
    dimension: usize,
    id: usize,
    rng: &mut impl Rng,
    colors: &mut impl Rng,
) -> Option<Vec<BodySpec>> {
    let bodies = match (dimension, id) {
        (2, 1) => infinite_fun(),
        (2, 2) => three_body_system(),
        (2, 3) => two_body_system(),
        (2, 4) => orbit_in_orbit(),
        (2, 5) => four_dancing_planets(),
        (2, 6) => sun_and_two_moons(),
        (2, 7) => dust_2d(rng, colors),
        (3, 1) => the_cube(),
        (3, 2) => disk(rng, 1600.0, |rad| rad / 4.0, |rad| rad / 32.0),
        (3, 3) => disk(rng, 800.0, |rad| rad / 80.0, |_| 1.0),
        (3, 4) => star_cloud(3, 500, 400.0, 1.5, rng, colors),
        (4, 1) => hyper_cloud(rng, colors),
        (d, 1) if d >= 5 => lonely_planet(d),
        _ => return None,
    };
    Some(bodies)
}

/// The scene a freshly created world opens with.
pub fn default_scene(dimension: usize) -> Vec<BodySpec> {
    match dimension {
        2 => infinite_fun(),
        3 => vec![
            BodySpec::new(&[0.0, 100.0, 0.0], &[2.0, 0.0, 0.0], 500.0).colored(Color::BLUE),
            BodySpec::new(&[-100.0, 0.0, 0.0], &[0.0, 2.0, 0.0], 500.0).colored(Color::WHITE),
            BodySpec::new(&[150.0, 50.0, 0.0], &[0.0, 0.0, 1.5], 200.0).colored(Color::WHITE),
        ],
        4 => vec![
            BodySpec::new(&[0.0; 4], &[0.0; 4], 10000.0).colored(Color::RED),
            BodySpec::new(&[100.0, 0.0, 0.0, 0.0], &[0.0, 10.0, 0.0, 0.0], 10.0)
                .colored(Color::ORANGE),
            BodySpec::new(&[0.0, 100.0, 0.0, 0.0], &[0.0, 0.0, 10.0, 0.0], 10.0)
                .colored(Color::BLUE),
            BodySpec::new(&[0.0, 0.0, 100.0, 0.0], &[0.0, 0.0, 0.0, 10.0], 10.0)
                .colored(Color::CYAN),
        ],
        d => lonely_planet(d),
    }
}

/// Figure eight choreography of three equal masses.
fn infinite_fun() -> Vec<BodySpec> {
    let m = 33.33333333;
    vec![
        BodySpec::new(&[74.6156, 0.0], &[0.0, -0.324677], m),
        BodySpec::new(&[-37.3078, 23.8313], &[-0.764226, 0.162339], m),
        BodySpec::new(&[-37.3078, -23.8313], &[0.764226, 0.162339], m),
    ]
}

fn three_body_system() -> Vec<BodySpec> {
    vec![
        BodySpec::new(&[-100.0, 0.0], &[0.0, -5.0], 2000.0),
        BodySpec::new(&[0.0, 0.0], &[0.0, 0.0], 2000.0),
        BodySpec::new(&[100.0, 0.0], &[0.0, 5.0], 2000.0),
    ]
}

fn two_body_system() -> Vec<BodySpec> {
    vec![
        BodySpec::new(&[-75.0, 0.0], &[0.0, -(25.0f64 / 3.0).sqrt()], 30000.0),
        BodySpec::new(&[225.0, 0.0], &[0.0, 75.0f64.sqrt()], 10000.0),
    ]
}

/// Two small planets circling each other on an ellipse around a star.
fn orbit_in_orbit() -> Vec<BodySpec> {
    let root_ten = 10.0f64.sqrt();
    vec![
        BodySpec::new(&[0.0, 0.0], &[0.0, 0.0], 10000.0),
        BodySpec::new(&[310.0, 0.0], &[0.0, 16.67627975 / root_ten], 10.0),
        BodySpec::new(&[290.0, 0.0], &[0.0, 19.83855741 / root_ten], 10.0),
    ]
}

fn four_dancing_planets() -> Vec<BodySpec> {
    vec![
        BodySpec::new(&[-300.0, 0.0], &[0.0, -0.4f64.sqrt()], 5000.0),
        BodySpec::new(&[-100.0, 0.0], &[0.0, -48.4f64.sqrt()], 5000.0),
        BodySpec::new(&[100.0, 0.0], &[0.0, 48.4f64.sqrt()], 5000.0),
        BodySpec::new(&[300.0, 0.0], &[0.0, 0.4f64.sqrt()], 5000.0),
    ]
}

/// A sun with two planets that each carry a moon. One moon gets eaten.
fn sun_and_two_moons() -> Vec<BodySpec> {
    vec![
        BodySpec::new(&[0.0, 0.0], &[0.0, 0.0], 30000.0),
        BodySpec::new(&[300.0, 0.0], &[0.0, 10.0], 500.0),
        BodySpec::new(&[320.0, 0.0], &[0.0, 15.0], 10.0),
        BodySpec::new(&[-150.0, 0.0], &[0.0, -200.0f64.sqrt()], 250.0),
        BodySpec::new(&[-170.0, 0.0], &[0.0, -32.15 / 10.0f64.sqrt()], 10.0),
    ]
}

fn dust_2d(rng: &mut impl Rng, colors: &mut impl Rng) -> Vec<BodySpec> {
    (0..2000)
        .map(|_| {
            let position = [rng.random_range(-400.0..400.0), rng.random_range(-300.0..300.0)];
            let color = Color::random_visible(colors);
            let mass = rng.random_range(1.0..10.0);
            let velocity = [rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)];
            BodySpec::new(&position, &velocity, mass).colored(color)
        })
        .collect()
}

/// 8000 unit masses on a 20 unit grid.
fn the_cube() -> Vec<BodySpec> {
    let mut bodies = Vec::with_capacity(20 * 20 * 20);
    for i in -10..10 {
        for j in -10..10 {
            for k in -10..10 {
                let position = [i as f64 * 20.0, j as f64 * 20.0, k as f64 * 20.0];
                bodies.push(BodySpec::new(&position, &[0.0; 3], 1.0));
            }
        }
    }
    bodies
}

/// 500 bodies in a thin rotating disk of radius `extent`. `speed` gives the
/// orbital speed and `mass_scale` the mass multiplier at a distance from the
/// center.
fn disk(
    rng: &mut impl Rng,
    extent: f64,
    speed: impl Fn(f64) -> f64,
    mass_scale: impl Fn(f64) -> f64,
) -> Vec<BodySpec> {
    (0..500)
        .map(|_| {
            let rad = extent * rng.random::<f64>().sqrt();
            let theta = 2.0 * PI * rng.random::<f64>();
            let position = [
                rad * theta.cos(),
                rad * theta.sin(),
                rng.random_range(-100.0..100.0),
            ];
            let mass = mass_scale(rad) * rng.random_range(1.0..21.0);
            let tangent = theta + PI / 2.0;
            let velocity = [
                speed(rad) * tangent.cos() + rng.random_range(-1.5..1.5),
                speed(rad) * tangent.sin() + rng.random_range(-1.5..1.5),
                rng.random_range(-0.5..0.5),
            ];
            BodySpec::new(&position, &velocity, mass)
        })
        .collect()
}

/// A random cube shaped cloud of light bodies that slowly pulls together.
fn star_cloud(
    dimension: usize,
    count: usize,
    extent: f64,
    max_speed: f64,
    rng: &mut impl Rng,
    colors: &mut impl Rng,
) -> Vec<BodySpec> {
    (0..count)
        .map(|_| {
            let position: Vec<f64> = (0..dimension)
                .map(|_| rng.random_range(-extent..extent))
                .collect();
            let mass = rng.random_range(1.0..10.0);
            let velocity: Vec<f64> = (0..dimension)
                .map(|_| rng.random_range(-max_speed..max_speed))
                .collect();
            let color = Color::random_visible(colors);
            BodySpec::new(&position, &velocity, mass).colored(color)
        })
        .collect()
}

fn hyper_cloud(rng: &mut impl Rng, colors: &mut impl Rng) -> Vec<BodySpec> {
    (0..500)
        .map(|_| {
            let position: Vec<f64> = (0..4).map(|_| rng.random_range(-100.0..100.0)).collect();
            let velocity: Vec<f64> = (0..4).map(|_| rng.random::<f64>()).collect();
            let color = Color::random_visible(colors);
            BodySpec::new(&position, &velocity, rng.random::<f64>()).colored(color)
        })
        .collect()
}

fn lonely_planet(dimension: usize) -> Vec<BodySpec> {
    let origin = vec![0.0; dimension];
    vec![BodySpec::new(&origin, &origin, 10f64.powi(dimension as i32))]
}
