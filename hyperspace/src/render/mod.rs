//! Turns world geometry into a flat, back to front list of primitives.
//!
//! There is no depth buffer downstream: whatever consumes the list draws it
//! in order, so later items cover earlier ones. Each compositor owns the
//! cameras for its tier and follows the same per-frame protocol: reset, add
//! balls and lines, then build the draw order.

use cgmath::Vector2;

use crate::{
    color::Color,
    constants::AXIS_HALF_LENGTH,
    error::{Error, Result},
    math::{Ball, Segment, Vector},
    sim::Body,
};

mod chain;
mod depth;
mod flat;

pub use chain::{Compositor4, CompositorN};
pub use depth::Compositor3;
pub use flat::Compositor2;

/// One primitive of the final picture.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Ball(Ball<Vector2<f64>>),
    Segment(Segment<Vector2<f64>>),
}

impl DrawItem {
    pub fn color(&self) -> Color {
        match self {
            Self::Ball(ball) => ball.color,
            Self::Segment(segment) => segment.color,
        }
    }
}

/// Where a compositor is within its frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FramePhase {
    /// Nothing has been reset yet.
    #[default]
    Idle,
    /// Accepting balls and lines.
    Collecting,
    /// The draw order was handed out; reset before adding again.
    Built,
}

impl FramePhase {
    /// Errors unless the frame is accepting geometry.
    pub(crate) fn ensure_collecting(self) -> Result<()> {
        match self {
            Self::Collecting => Ok(()),
            found => Err(Error::FramePhase {
                expected: "a reset frame",
                found,
            }),
        }
    }
}

/// A per-tier pipeline from `Space` geometry to an ordered 2D draw list.
pub trait SceneCompositor {
    type Space: Vector;

    fn phase(&self) -> FramePhase;

    /// Drops everything from the previous frame.
    fn reset_frame(&mut self);

    fn add_balls(&mut self, balls: Vec<Ball<Self::Space>>) -> Result<()>;

    fn add_bodies(&mut self, bodies: &[Body<Self::Space>]) -> Result<()> {
        self.add_balls(bodies.iter().map(Body::as_ball).collect())
    }

    /// May be called several times per frame.
    fn add_lines(&mut self, lines: Vec<Segment<Self::Space>>) -> Result<()>;

    fn build_draw_order(&mut self) -> Result<Vec<DrawItem>>;

    /// Where a single point lands in the final image, if it is visible.
    fn locate(&self, point: &Self::Space) -> Option<Vector2<f64>>;
}

/// One red segment through the origin along each axis.
pub fn axis_overlay<V: Vector>(dimension: usize) -> Vec<Segment<V>> {
    (0..dimension)
        .map(|axis| {
            let mut values = vec![0.0; dimension];
            values[axis] = AXIS_HALF_LENGTH;
            let end = V::from_components(&values);
            Segment::new(end.scaled(-1.0), end, Color::RED)
        })
        .collect()
}
