use crate::{
    error::Result,
    math::{Vector, VectorN},
};

use super::{Lens, impl_lens_projector};

/// Camera taking a space of any dimension down by one.
#[derive(Debug, Clone)]
pub struct CameraN {
    lens: Lens<VectorN>,
}

impl CameraN {
    pub fn new(position: VectorN, view: &VectorN) -> Result<Self> {
        Ok(Self {
            lens: Lens::new(position, view)?,
        })
    }

    /// Camera for one link of a projection chain: out along the x axis,
    /// looking back at the origin.
    pub fn chain_default(dimension: usize) -> Result<Self> {
        let position = VectorN::unit(dimension, 0).scaled(600.0);
        let view = VectorN::unit(dimension, 0).scaled(-1.0);
        Self::new(position, &view)
    }

    pub fn dimension(&self) -> usize {
        self.lens.position().dimension()
    }

    pub fn lens(&self) -> &Lens<VectorN> {
        &self.lens
    }

    pub fn translate(&mut self, offset: &VectorN) {
        self.lens.translate(offset);
    }
}

impl_lens_projector!(CameraN, VectorN, VectorN);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{camera::Projector, error::Error};

    #[test]
    fn chain_camera_projects_one_dimension_down() {
        let camera = CameraN::chain_default(6).unwrap();
        assert_eq!(camera.dimension(), 6);
        let point = VectorN::new(vec![200.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let image = camera.project_point(&point).unwrap();
        assert_eq!(image.dimension(), 5);
        // 400 units from the camera, so exactly on the image plane.
        for (i, expected) in [1.0, 2.0, 3.0, 4.0, 5.0].iter().enumerate() {
            assert_abs_diff_eq!(image.component(i), *expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn far_points_shrink_towards_the_center() {
        let camera = CameraN::chain_default(5).unwrap();
        let point = VectorN::new(vec![-200.0, 10.0, 0.0, 0.0, 0.0]);
        let image = camera.project_point(&point).unwrap();
        assert_abs_diff_eq!(image.component(0), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn one_dimensional_cameras_are_rejected() {
        let err = CameraN::new(VectorN::zero(1), &VectorN::unit(1, 0)).unwrap_err();
        assert_eq!(err, Error::UnsupportedDimension { dimension: 1 });
    }
}
