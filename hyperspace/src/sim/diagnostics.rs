use std::fmt::Display;

use crate::{math::Vector, sim::World};

impl<V: Vector> World<V> {
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Sum of `-G * m_i * m_j / r` over every pair.
    pub fn potential_energy(&self) -> f64 {
        let g = self.params.grav_constant();
        let mut energy = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                energy -= g * a.mass * b.mass / a.position.distance_to(&b.position);
            }
        }
        energy
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn total_momentum(&self) -> V {
        let mut momentum = V::zero(self.dimension);
        for body in &self.bodies {
            momentum.add_scaled(&body.velocity, body.mass);
        }
        momentum
    }

    /// Angular momentum about the origin within the plane of the first two
    /// axes.
    pub fn planar_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| {
                let (x, y) = (b.position.component(0), b.position.component(1));
                let (vx, vy) = (b.velocity.component(0), b.velocity.component(1));
                b.mass * (x * vy - y * vx)
            })
            .sum()
    }

    pub fn elapsed_time(&self) -> ElapsedTime {
        compute_elapsed_time(self.simulated_time, self.ticks)
    }
}

const SEC_PER_HOUR: f64 = 60.0 * 60.0;
const SEC_PER_DAY: f64 = SEC_PER_HOUR * 24.0;
const SEC_PER_YEAR: f64 = 365.25 * SEC_PER_DAY;

/// Simulated time split into calendar units, reading each time unit as a
/// second.
#[derive(Debug, Default, PartialEq)]
pub struct ElapsedTime {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
    pub ticks: u64,
}

impl Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}Y {}D {:0>2}:{:0>2}:{:0>5.2} ({} ticks)",
            self.years, self.days, self.hours, self.minutes, self.seconds, self.ticks
        )
    }
}

/// Splits `time_s` seconds of simulated time, reached after `ticks` steps.
pub fn compute_elapsed_time(time_s: f64, ticks: u64) -> ElapsedTime {
    let mut time_s = time_s;

    let years = (time_s / SEC_PER_YEAR).floor();
    time_s -= years * SEC_PER_YEAR;
    let days = (time_s / SEC_PER_DAY).floor();
    time_s -= days * SEC_PER_DAY;
    let hours = (time_s / SEC_PER_HOUR).floor();
    time_s -= hours * SEC_PER_HOUR;
    let minutes = (time_s / 60.0).floor();
    let seconds = time_s - minutes * 60.0;

    ElapsedTime {
        years: years as u64,
        days: days as u64,
        hours: hours as u64,
        minutes: minutes as u64,
        seconds,
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cgmath::Vector3;

    use super::*;
    use crate::{color::Color, parameters::SimParams};

    #[test]
    fn elapsed_time_splits_into_units() {
        let t = compute_elapsed_time(900_005.0, 9_000_050);
        assert_eq!(t.days, 10);
        assert_eq!(t.hours, 10);
        assert_eq!(t.minutes, 0);
        assert_abs_diff_eq!(t.seconds, 5.0, epsilon = 1e-6);
        assert_eq!(t.to_string(), "0Y 10D 10:00:05.00 (9000050 ticks)");
    }

    #[test]
    fn elapsed_time_survives_a_time_step_change() {
        let mut world = World::<Vector3<f64>>::new(3, SimParams::default()).unwrap();
        world.set_time_step(0.1).unwrap();
        for _ in 0..10 {
            world.step();
        }
        world.set_time_step(10.0).unwrap();
        let t = world.elapsed_time();
        assert_eq!(t.ticks, 10);
        assert_eq!(t.minutes, 0);
        assert_abs_diff_eq!(t.seconds, 1.0, epsilon = 1e-9);

        world.step();
        let t = world.elapsed_time();
        assert_eq!(t.ticks, 11);
        assert_abs_diff_eq!(t.seconds, world.simulated_time(), epsilon = 1e-9);
        assert_abs_diff_eq!(t.seconds, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn pair_energy_and_momentum() {
        let mut world = World::<Vector3<f64>>::new(3, SimParams::default()).unwrap();
        world.set_gravitational_constant(2.0).unwrap();
        world.add_body_with(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            4.0,
            Color::WHITE,
        );
        world.add_body_with(
            Vector3::new(8.0, 0.0, 0.0),
            Vector3::new(0.0, -2.0, 0.0),
            2.0,
            Color::WHITE,
        );
        assert_abs_diff_eq!(world.kinetic_energy(), 2.0 + 4.0);
        assert_abs_diff_eq!(world.potential_energy(), -2.0);
        assert_abs_diff_eq!(world.total_energy(), 4.0);
        assert_eq!(world.total_momentum(), Vector3::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(world.planar_angular_momentum(), -32.0);
    }
}
