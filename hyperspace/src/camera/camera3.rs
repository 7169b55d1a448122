use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use cgmath::{Vector2, Vector3};

use crate::{
    constants::ROTATION_STEP_DEGREES,
    math::from_angles,
};

use super::{Lens, impl_lens_projector};

/// Camera turning 3D space into a flat picture. `theta` turns around the
/// vertical axis, `phi` tilts above or below the horizon.
#[derive(Debug, Clone)]
pub struct Camera3 {
    lens: Lens<Vector3<f64>>,
    theta: f64,
    phi: f64,
}

impl Camera3 {
    pub fn new(position: Vector3<f64>, theta: f64, phi: f64) -> Self {
        Self {
            lens: Lens::with_angles(position, &[theta, phi]),
            theta,
            phi,
        }
    }

    pub fn lens(&self) -> &Lens<Vector3<f64>> {
        &self.lens
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Moves one unit along the horizontal heading `theta + turn`.
    fn walk(&mut self, turn: f64) {
        let step: Vector3<f64> = from_angles(&[self.theta + turn, 0.0]);
        self.lens.translate(&step);
    }

    pub fn move_forward(&mut self) {
        self.walk(0.0);
    }

    pub fn move_back(&mut self) {
        self.walk(PI);
    }

    pub fn move_left(&mut self) {
        self.walk(FRAC_PI_2);
    }

    pub fn move_right(&mut self) {
        self.walk(-FRAC_PI_2);
    }

    pub fn move_up(&mut self) {
        self.lens.translate(&Vector3::new(0.0, 0.0, 1.0));
    }

    pub fn move_down(&mut self) {
        self.lens.translate(&Vector3::new(0.0, 0.0, -1.0));
    }

    fn rotate(&mut self, delta_theta: f64, delta_phi: f64) {
        self.theta += delta_theta;
        self.phi += delta_phi;
        self.lens.reorient(&[self.theta, self.phi]);
    }

    pub fn rotate_left(&mut self) {
        self.rotate(ROTATION_STEP_DEGREES.to_radians(), 0.0);
    }

    pub fn rotate_right(&mut self) {
        self.rotate(-ROTATION_STEP_DEGREES.to_radians(), 0.0);
    }

    pub fn rotate_up(&mut self) {
        self.rotate(0.0, ROTATION_STEP_DEGREES.to_radians());
    }

    pub fn rotate_down(&mut self) {
        self.rotate(0.0, -ROTATION_STEP_DEGREES.to_radians());
    }
}

impl Default for Camera3 {
    /// Above the first octant, looking back down at the origin.
    fn default() -> Self {
        Self::new(
            Vector3::new(200.0, 200.0, 400.0 / SQRT_2),
            225f64.to_radians(),
            (-45f64).to_radians(),
        )
    }
}

impl_lens_projector!(Camera3, Vector3<f64>, Vector2<f64>);
