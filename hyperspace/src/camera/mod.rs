//! Cameras that flatten geometry by one dimension.
//!
//! Every camera above two dimensions looks through a [`Lens`]: an image
//! hyperplane a fixed distance in front of the camera, spanned by unit axes
//! derived from the view angles. Chaining cameras takes an N dimensional
//! scene all the way down to a flat picture.

use crate::math::{Ball, Segment, Vector};

/// A camera that projects `Space` geometry onto an `Image` one dimension
/// lower. `None` means the item cannot be seen.
pub trait Projector {
    type Space: Vector;
    type Image: Vector;

    fn position(&self) -> &Self::Space;

    /// Whether `point` is far enough ahead of the camera to be drawn.
    fn in_front(&self, point: &Self::Space) -> bool;

    fn project_point(&self, point: &Self::Space) -> Option<Self::Image>;

    /// Segments reaching behind the camera are cut short first.
    fn project_segment(&self, segment: &Segment<Self::Space>) -> Option<Segment<Self::Image>>;

    /// The radius shrinks with distance along the view direction.
    fn project_ball(&self, ball: &Ball<Self::Space>) -> Option<Ball<Self::Image>>;
}

/// Implements [`Projector`] for a camera that keeps its [`Lens`] in a `lens`
/// field.
macro_rules! impl_lens_projector {
    ($camera:ty, $space:ty, $image:ty) => {
        impl $crate::camera::Projector for $camera {
            type Space = $space;
            type Image = $image;

            fn position(&self) -> &$space {
                self.lens.position()
            }

            fn in_front(&self, point: &$space) -> bool {
                self.lens.in_front(point)
            }

            fn project_point(&self, point: &$space) -> Option<$image> {
                self.lens.project_point(point)
            }

            fn project_segment(
                &self,
                segment: &$crate::math::Segment<$space>,
            ) -> Option<$crate::math::Segment<$image>> {
                self.lens.project_segment(segment)
            }

            fn project_ball(
                &self,
                ball: &$crate::math::Ball<$space>,
            ) -> Option<$crate::math::Ball<$image>> {
                self.lens.project_ball(ball)
            }
        }
    };
}
pub(crate) use impl_lens_projector;

mod camera2;
mod camera3;
mod camera4;
mod camera_n;
mod lens;

pub use camera2::Camera2;
pub use camera3::Camera3;
pub use camera4::Camera4;
pub use camera_n::CameraN;
pub use lens::{Lens, basis_from_angles};
