use log::debug;

use crate::{math::Vector, sim::World};

/// Center of mass of two weighted points.
fn weighted_midpoint<V: Vector>(v1: &V, weight1: f64, v2: &V, weight2: f64) -> V {
    let mut mid = v1.scaled(weight1);
    mid.add_scaled(v2, weight2);
    mid.scale(1.0 / (weight1 + weight2));
    mid
}

impl<V: Vector> World<V> {
    /// Merges every pair of touching bodies. A body created by a merge is
    /// checked against the rest before the scan moves on.
    pub(super) fn collision_check(&mut self) {
        let mut i = 0;
        'outer: while i < self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if self.bodies[i].is_touching(&self.bodies[j]) {
                    self.merge(i, j);
                    // The merged body went to the back, so whatever slid into
                    // slot i has not been checked yet.
                    continue 'outer;
                }
            }
            i += 1;
        }
    }

    /// Perfectly inelastic collision of the bodies at `i < j`. Momentum is
    /// kept; bodies whose masses cancel out vanish without a trace.
    fn merge(&mut self, i: usize, j: usize) {
        debug_assert!(i < j);
        let second = self.bodies.remove(j);
        let first = self.bodies.remove(i);
        let total_mass = first.mass + second.mass;

        if total_mass == 0.0 {
            debug!("Bodies {} and {} annihilated", first.id(), second.id());
            self.paths.finish(first.id(), &first.position);
            self.paths.finish(second.id(), &second.position);
            return;
        }

        let position = weighted_midpoint(&first.position, first.mass, &second.position, second.mass);
        let velocity = weighted_midpoint(&first.velocity, first.mass, &second.velocity, second.mass);
        self.paths.finish(first.id(), &position);
        self.paths.finish(second.id(), &position);

        let color = first
            .color
            .blend_by_mass(first.mass, second.color, second.mass);
        let merged = self.spawn(position, velocity, total_mass, color);
        debug!(
            "Bodies {} and {} merged into {} with mass {}",
            first.id(),
            second.id(),
            merged,
            total_mass
        );
    }
}
