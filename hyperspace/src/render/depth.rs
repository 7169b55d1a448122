use cgmath::{Vector2, Vector3};
use log::trace;

use crate::{
    camera::{Camera3, Projector},
    error::Result,
    math::{
        Ball, Segment, Vector,
        occlusion::{segment_is_behind_ball, segment_is_behind_segment},
    },
};

use super::{DrawItem, FramePhase, SceneCompositor};

/// Entry of the frame being assembled. Balls stay in 3D until the end since
/// line placement still needs to test against them.
#[derive(Debug)]
enum Pending {
    Ball(Ball<Vector3<f64>>),
    Segment(Segment<Vector2<f64>>),
}

/// Orders 3D geometry for the painter's algorithm and projects it flat.
#[derive(Debug, Default)]
pub struct Compositor3 {
    camera: Camera3,
    phase: FramePhase,
    pending: Vec<Pending>,
    lines: Vec<Segment<Vector3<f64>>>,
}

impl Compositor3 {
    pub fn new(camera: Camera3) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn camera(&self) -> &Camera3 {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera3 {
        &mut self.camera
    }
}

impl SceneCompositor for Compositor3 {
    type Space = Vector3<f64>;

    fn phase(&self) -> FramePhase {
        self.phase
    }

    fn reset_frame(&mut self) {
        self.pending.clear();
        self.lines.clear();
        self.phase = FramePhase::Collecting;
    }

    /// Farthest balls come first. Balls at or behind the camera are dropped.
    fn add_balls(&mut self, mut balls: Vec<Ball<Vector3<f64>>>) -> Result<()> {
        self.phase.ensure_collecting()?;
        let cam = *self.camera.position();
        balls.sort_by(|a, b| {
            b.center
                .squared_distance_to(&cam)
                .total_cmp(&a.center.squared_distance_to(&cam))
        });
        let camera = &self.camera;
        self.pending.extend(
            balls
                .into_iter()
                .filter(|b| camera.in_front(&b.center))
                .map(Pending::Ball),
        );
        Ok(())
    }

    /// Each line goes just before the first placed line it hides behind.
    /// Lines of one colour are never compared: their order cannot be seen.
    fn add_lines(&mut self, lines: Vec<Segment<Vector3<f64>>>) -> Result<()> {
        self.phase.ensure_collecting()?;
        let cam = *self.camera.position();
        for line in lines {
            let placement = self
                .lines
                .iter()
                .position(|placed| {
                    !line.color.same_shade(placed.color)
                        && segment_is_behind_segment(&line, placed, &cam)
                })
                .unwrap_or(self.lines.len());
            self.lines.insert(placement, line);
        }
        Ok(())
    }

    fn build_draw_order(&mut self) -> Result<Vec<DrawItem>> {
        self.phase.ensure_collecting()?;
        self.phase = FramePhase::Built;
        let cam = *self.camera.position();

        for line in self.lines.drain(..) {
            let placement = self
                .pending
                .iter()
                .position(|item| match item {
                    Pending::Ball(ball) => segment_is_behind_ball(&line, ball, &cam),
                    Pending::Segment(_) => false,
                })
                .unwrap_or(self.pending.len());
            if let Some(projected) = self.camera.project_segment(&line) {
                self.pending.insert(placement, Pending::Segment(projected));
            }
        }

        let camera = &self.camera;
        let items: Vec<DrawItem> = self
            .pending
            .drain(..)
            .filter_map(|item| match item {
                Pending::Ball(ball) => camera.project_ball(&ball).map(DrawItem::Ball),
                Pending::Segment(segment) => Some(DrawItem::Segment(segment)),
            })
            .collect();
        trace!("Built draw order with {} items", items.len());
        Ok(items)
    }

    fn locate(&self, point: &Vector3<f64>) -> Option<Vector2<f64>> {
        if !self.camera.in_front(point) {
            return None;
        }
        self.camera.project_point(point)
    }
}
