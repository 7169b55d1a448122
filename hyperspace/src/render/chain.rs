use cgmath::{Vector2, Vector4};

use crate::{
    camera::{Camera3, Camera4, CameraN, Projector},
    error::{Error, Result},
    math::{Ball, Segment, Vector, VectorN},
};

use super::{Compositor3, DrawItem, FramePhase, SceneCompositor};

/// Projects 4D geometry into 3D and lets a [`Compositor3`] order it.
#[derive(Debug, Default)]
pub struct Compositor4 {
    camera: Camera4,
    inner: Compositor3,
}

impl Compositor4 {
    pub fn new(camera: Camera4, camera3: Camera3) -> Self {
        Self {
            camera,
            inner: Compositor3::new(camera3),
        }
    }

    pub fn camera(&self) -> &Camera4 {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera4 {
        &mut self.camera
    }

    pub fn inner(&self) -> &Compositor3 {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut Compositor3 {
        &mut self.inner
    }
}

impl SceneCompositor for Compositor4 {
    type Space = Vector4<f64>;

    fn phase(&self) -> FramePhase {
        self.inner.phase()
    }

    fn reset_frame(&mut self) {
        self.inner.reset_frame();
    }

    fn add_balls(&mut self, balls: Vec<Ball<Vector4<f64>>>) -> Result<()> {
        self.phase().ensure_collecting()?;
        let camera = &self.camera;
        let projected = balls
            .iter()
            .filter(|b| camera.in_front(&b.center))
            .filter_map(|b| camera.project_ball(b))
            .collect();
        self.inner.add_balls(projected)
    }

    fn add_lines(&mut self, lines: Vec<Segment<Vector4<f64>>>) -> Result<()> {
        self.phase().ensure_collecting()?;
        let camera = &self.camera;
        let projected = lines
            .iter()
            .filter_map(|l| camera.project_segment(l))
            .collect();
        self.inner.add_lines(projected)
    }

    fn build_draw_order(&mut self) -> Result<Vec<DrawItem>> {
        self.inner.build_draw_order()
    }

    fn locate(&self, point: &Vector4<f64>) -> Option<Vector2<f64>> {
        if !self.camera.in_front(point) {
            return None;
        }
        self.inner.locate(&self.camera.project_point(point)?)
    }
}

/// Takes an N dimensional scene down to 4D through one camera per
/// dimension, then hands it to a [`Compositor4`].
#[derive(Debug)]
pub struct CompositorN {
    /// Highest dimension first; each camera feeds the next.
    cameras: Vec<CameraN>,
    inner: Compositor4,
}

impl CompositorN {
    /// Chain of default cameras for a `dimension` dimensional world.
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension < 5 {
            return Err(Error::UnsupportedDimension { dimension });
        }
        let cameras = (5..=dimension)
            .rev()
            .map(CameraN::chain_default)
            .collect::<Result<Vec<_>>>()?;
        Self::with_cameras(cameras, Compositor4::new(Camera4::chain_default(), Camera3::default()))
    }

    /// `cameras` must step down one dimension at a time and end at 5.
    pub fn with_cameras(cameras: Vec<CameraN>, inner: Compositor4) -> Result<Self> {
        let Some(first) = cameras.first() else {
            return Err(Error::UnsupportedDimension { dimension: 4 });
        };
        let mut expected = first.dimension();
        for camera in &cameras {
            if camera.dimension() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    found: camera.dimension(),
                });
            }
            expected -= 1;
        }
        if expected != 4 {
            return Err(Error::DimensionMismatch {
                expected: 5,
                found: expected + 1,
            });
        }
        Ok(Self { cameras, inner })
    }

    pub fn dimension(&self) -> usize {
        self.cameras[0].dimension()
    }

    pub fn cameras(&self) -> &[CameraN] {
        &self.cameras
    }

    pub fn cameras_mut(&mut self) -> &mut [CameraN] {
        &mut self.cameras
    }

    pub fn inner(&self) -> &Compositor4 {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut Compositor4 {
        &mut self.inner
    }

    fn project_ball(&self, ball: &Ball<VectorN>) -> Option<Ball<Vector4<f64>>> {
        let mut ball = ball.clone();
        for camera in &self.cameras {
            if !camera.in_front(&ball.center) {
                return None;
            }
            ball = camera.project_ball(&ball)?;
        }
        Some(Ball::new(
            Vector4::from_components(&ball.center.components()),
            ball.radius,
            ball.color,
        ))
    }

    fn project_segment(&self, segment: &Segment<VectorN>) -> Option<Segment<Vector4<f64>>> {
        let mut segment = segment.clone();
        for camera in &self.cameras {
            segment = camera.project_segment(&segment)?;
        }
        Some(Segment::new(
            Vector4::from_components(&segment.start.components()),
            Vector4::from_components(&segment.end.components()),
            segment.color,
        ))
    }
}

impl SceneCompositor for CompositorN {
    type Space = VectorN;

    fn phase(&self) -> FramePhase {
        self.inner.phase()
    }

    fn reset_frame(&mut self) {
        self.inner.reset_frame();
    }

    fn add_balls(&mut self, balls: Vec<Ball<VectorN>>) -> Result<()> {
        self.phase().ensure_collecting()?;
        let projected = balls.iter().filter_map(|b| self.project_ball(b)).collect();
        self.inner.add_balls(projected)
    }

    fn add_lines(&mut self, lines: Vec<Segment<VectorN>>) -> Result<()> {
        self.phase().ensure_collecting()?;
        let projected = lines
            .iter()
            .filter_map(|l| self.project_segment(l))
            .collect();
        self.inner.add_lines(projected)
    }

    fn build_draw_order(&mut self) -> Result<Vec<DrawItem>> {
        self.inner.build_draw_order()
    }

    fn locate(&self, point: &VectorN) -> Option<Vector2<f64>> {
        let mut point = point.clone();
        for camera in &self.cameras {
            if !camera.in_front(&point) {
                return None;
            }
            point = camera.project_point(&point)?;
        }
        self.inner.locate(&Vector4::from_components(&point.components()))
    }
}
