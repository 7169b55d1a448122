use cgmath::{Vector3, Vector4};

use crate::constants::ROTATION_STEP_DEGREES;

use super::{Lens, impl_lens_projector};

/// Camera turning 4D space into 3D. `alpha` tilts the view towards the
/// fourth axis, the ana and kata directions.
#[derive(Debug, Clone)]
pub struct Camera4 {
    lens: Lens<Vector4<f64>>,
    theta: f64,
    phi: f64,
    alpha: f64,
}

impl Camera4 {
    pub fn new(position: Vector4<f64>, theta: f64, phi: f64, alpha: f64) -> Self {
        Self {
            lens: Lens::with_angles(position, &[theta, phi, alpha]),
            theta,
            phi,
            alpha,
        }
    }

    /// Placement used when a higher dimensional chain feeds this camera:
    /// out along the x axis looking back at the origin.
    pub fn chain_default() -> Self {
        Self::new(Vector4::new(500.0, 0.0, 0.0, 0.0), 180f64.to_radians(), 0.0, 0.0)
    }

    pub fn lens(&self) -> &Lens<Vector4<f64>> {
        &self.lens
    }

    pub fn angles(&self) -> [f64; 3] {
        [self.theta, self.phi, self.alpha]
    }

    fn shift(&mut self, axis: usize, amount: f64) {
        let mut step = Vector4::new(0.0, 0.0, 0.0, 0.0);
        step[axis] = amount;
        self.lens.translate(&step);
    }

    pub fn move_x_pos(&mut self) {
        self.shift(0, 1.0);
    }

    pub fn move_x_neg(&mut self) {
        self.shift(0, -1.0);
    }

    pub fn move_y_pos(&mut self) {
        self.shift(1, 1.0);
    }

    pub fn move_y_neg(&mut self) {
        self.shift(1, -1.0);
    }

    pub fn move_z_pos(&mut self) {
        self.shift(2, 1.0);
    }

    pub fn move_z_neg(&mut self) {
        self.shift(2, -1.0);
    }

    pub fn move_w_pos(&mut self) {
        self.shift(3, 1.0);
    }

    pub fn move_w_neg(&mut self) {
        self.shift(3, -1.0);
    }

    fn rotate(&mut self, delta_theta: f64, delta_phi: f64, delta_alpha: f64) {
        self.theta += delta_theta;
        self.phi += delta_phi;
        self.alpha += delta_alpha;
        self.lens.reorient(&[self.theta, self.phi, self.alpha]);
    }

    pub fn rotate_left(&mut self) {
        self.rotate(ROTATION_STEP_DEGREES.to_radians(), 0.0, 0.0);
    }

    pub fn rotate_right(&mut self) {
        self.rotate(-ROTATION_STEP_DEGREES.to_radians(), 0.0, 0.0);
    }

    pub fn rotate_up(&mut self) {
        self.rotate(0.0, ROTATION_STEP_DEGREES.to_radians(), 0.0);
    }

    pub fn rotate_down(&mut self) {
        self.rotate(0.0, -ROTATION_STEP_DEGREES.to_radians(), 0.0);
    }

    pub fn rotate_ana(&mut self) {
        self.rotate(0.0, 0.0, ROTATION_STEP_DEGREES.to_radians());
    }

    pub fn rotate_kata(&mut self) {
        self.rotate(0.0, 0.0, -ROTATION_STEP_DEGREES.to_radians());
    }
}

impl Default for Camera4 {
    fn default() -> Self {
        Self::new(
            Vector4::new(200.0, 200.0, 200.0, 200.0),
            225f64.to_radians(),
            (-35f64).to_radians(),
            (-30f64).to_radians(),
        )
    }
}

impl_lens_projector!(Camera4, Vector4<f64>, Vector3<f64>);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{camera::Projector, math::Vector};

    #[test]
    fn chain_camera_drops_the_x_axis() {
        let camera = Camera4::chain_default();
        // On the image plane the point keeps y, z and w unchanged.
        let image = camera.project_point(&Vector4::new(100.0, 3.0, -4.0, 5.0)).unwrap();
        assert_abs_diff_eq!(image.x, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(image.y, -4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(image.z, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn axis_moves_touch_one_coordinate() {
        let mut camera = Camera4::default();
        camera.move_w_pos();
        camera.move_w_pos();
        camera.move_x_neg();
        assert_eq!(*camera.position(), Vector4::new(199.0, 200.0, 200.0, 202.0));
    }

    #[test]
    fn ana_and_kata_cancel_out() {
        let mut camera = Camera4::default();
        let view = *camera.lens().view();
        camera.rotate_ana();
        assert!(camera.lens().view().distance_to(&view) > 0.01);
        camera.rotate_kata();
        assert_abs_diff_eq!(camera.lens().view().distance_to(&view), 0.0, epsilon = 1e-12);
    }
}
