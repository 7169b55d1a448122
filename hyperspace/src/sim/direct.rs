use log::trace;
use rayon::iter::{
    IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator,
};

use crate::{
    constants::PARALLEL_STAGING_CUTOFF,
    math::Vector,
    sim::body::{Body, IntegrationMethod, StagedState},
};

/// Accumulates into `out` the gravitational pull at `at` from every body
/// except the one at `skip_idx`. Massless bodies pull on nothing.
#[inline]
pub fn acceleration_at<V: Vector>(
    at: &V,
    skip_idx: usize,
    bodies: &[Body<V>],
    grav_constant: f64,
    out: &mut V,
) {
    out.set_zero();
    for (other_idx, other) in bodies.iter().enumerate() {
        if other_idx == skip_idx || other.mass == 0.0 {
            continue;
        }
        let rel = other.position.minus(at);
        let mag_sq = rel.length_squared();
        out.add_scaled(&rel, other.mass * grav_constant / (mag_sq * mag_sq.sqrt()));
    }
}

/// Computes the next state of every body from the current, untouched
/// positions. Nothing in `bodies` changes until [`commit`].
pub fn stage<V: Vector>(
    bodies: &[Body<V>],
    staged: &mut [StagedState<V>],
    method: IntegrationMethod,
    grav_constant: f64,
    dt: f64,
) {
    debug_assert_eq!(bodies.len(), staged.len());
    if bodies.len() >= PARALLEL_STAGING_CUTOFF {
        trace!("Staging {} bodies in parallel", bodies.len());
        bodies
            .par_iter()
            .zip(staged.par_iter_mut())
            .enumerate()
            .for_each(|(i, (body, out))| body.stage(i, bodies, method, grav_constant, dt, out));
    } else {
        trace!("Staging {} bodies sequentially", bodies.len());
        for (i, (body, out)) in bodies.iter().zip(staged.iter_mut()).enumerate() {
            body.stage(i, bodies, method, grav_constant, dt, out);
        }
    }
}

pub fn commit<V: Vector>(bodies: &mut [Body<V>], staged: &[StagedState<V>]) {
    debug_assert_eq!(bodies.len(), staged.len());
    for (body, next) in bodies.iter_mut().zip(staged.iter()) {
        body.commit(next);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cgmath::Vector2;

    use super::*;
    use crate::{color::Color, sim::body::BodyId};

    fn body(id: u64, pos: [f64; 2], vel: [f64; 2], mass: f64) -> Body<Vector2<f64>> {
        Body::new(
            BodyId(id),
            Vector2::new(pos[0], pos[1]),
            Vector2::new(vel[0], vel[1]),
            mass,
            1.0,
            Color::WHITE,
        )
    }

    #[test]
    fn pull_follows_inverse_square_law() {
        let bodies = vec![body(0, [0.0, 0.0], [0.0, 0.0], 1.0), body(1, [4.0, 0.0], [0.0, 0.0], 32.0)];
        let mut acc = Vector2::new(9.0, 9.0);
        acceleration_at(&bodies[0].position, 0, &bodies, 0.5, &mut acc);
        // 0.5 * 32 / 16
        assert_abs_diff_eq!(acc.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(acc.y, 0.0);
    }

    #[test]
    fn stale_undefined_slots_are_reset() {
        let bodies = vec![body(0, [0.0, 0.0], [0.0, 0.0], 1.0), body(1, [4.0, 0.0], [0.0, 0.0], 32.0)];
        let mut acc = Vector2::new(f64::NAN, f64::INFINITY);
        acceleration_at(&bodies[0].position, 0, &bodies, 0.5, &mut acc);
        assert_abs_diff_eq!(acc.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(acc.y, 0.0);
    }

    #[test]
    fn massless_bodies_exert_no_force() {
        let bodies = vec![body(0, [0.0, 0.0], [0.0, 0.0], 5.0), body(1, [3.0, 1.0], [0.0, 0.0], 0.0)];
        let mut acc = Vector2::new(0.0, 0.0);
        acceleration_at(&bodies[0].position, 0, &bodies, 1.0, &mut acc);
        assert_eq!(acc, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn parallel_and_sequential_staging_agree() {
        let n = PARALLEL_STAGING_CUTOFF + 3;
        let bodies: Vec<_> = (0..n)
            .map(|i| {
                let a = i as f64 * 0.37;
                body(i as u64, [a.cos() * (50.0 + i as f64), a.sin() * 80.0], [0.1, -0.2], 1.0 + (i % 7) as f64)
            })
            .collect();
        let mut parallel = vec![StagedState::zero(2); n];
        stage(&bodies, &mut parallel, IntegrationMethod::RungeKutta4, 1.0, 0.1);

        let mut sequential = vec![StagedState::zero(2); n];
        for (i, (b, out)) in bodies.iter().zip(sequential.iter_mut()).enumerate() {
            b.stage(i, &bodies, IntegrationMethod::RungeKutta4, 1.0, 0.1, out);
        }

        for (p, s) in parallel.iter().zip(sequential.iter()) {
            assert_eq!(p.position, s.position);
            assert_eq!(p.velocity, s.velocity);
        }
    }
}
