use cgmath::Vector2;

use crate::{
    camera::{Camera2, Projector},
    error::Result,
    math::{Ball, Segment},
};

use super::{DrawItem, FramePhase, SceneCompositor};

/// Flat worlds need no occlusion: trails go down first and bodies on top.
#[derive(Debug, Default)]
pub struct Compositor2 {
    camera: Camera2,
    phase: FramePhase,
    balls: Vec<Ball<Vector2<f64>>>,
    lines: Vec<Segment<Vector2<f64>>>,
}

impl Compositor2 {
    pub fn new(camera: Camera2) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn camera(&self) -> &Camera2 {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera2 {
        &mut self.camera
    }
}

impl SceneCompositor for Compositor2 {
    type Space = Vector2<f64>;

    fn phase(&self) -> FramePhase {
        self.phase
    }

    fn reset_frame(&mut self) {
        self.balls.clear();
        self.lines.clear();
        self.phase = FramePhase::Collecting;
    }

    fn add_balls(&mut self, balls: Vec<Ball<Vector2<f64>>>) -> Result<()> {
        self.phase.ensure_collecting()?;
        self.balls.extend(balls);
        Ok(())
    }

    fn add_lines(&mut self, lines: Vec<Segment<Vector2<f64>>>) -> Result<()> {
        self.phase.ensure_collecting()?;
        self.lines.extend(lines);
        Ok(())
    }

    fn build_draw_order(&mut self) -> Result<Vec<DrawItem>> {
        self.phase.ensure_collecting()?;
        self.phase = FramePhase::Built;

        let camera = &self.camera;
        let lines = self
            .lines
            .drain(..)
            .filter_map(|l| camera.project_segment(&l))
            .map(DrawItem::Segment);
        let balls = self
            .balls
            .drain(..)
            .filter_map(|b| camera.project_ball(&b))
            .map(DrawItem::Ball);
        Ok(lines.chain(balls).collect())
    }

    fn locate(&self, point: &Vector2<f64>) -> Option<Vector2<f64>> {
        self.camera.project_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn bodies_are_drawn_over_trails() {
        let mut compositor = Compositor2::default();
        compositor.reset_frame();
        compositor
            .add_balls(vec![Ball::new(Vector2::new(0.0, 0.0), 2.0, Color::BLUE)])
            .unwrap();
        compositor
            .add_lines(vec![Segment::new(
                Vector2::new(-5.0, 0.0),
                Vector2::new(5.0, 0.0),
                Color::RED,
            )])
            .unwrap();
        let items = compositor.build_draw_order().unwrap();
        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], DrawItem::Segment(_)));
        assert!(matches!(items[1], DrawItem::Ball(_)));
    }

    #[test]
    fn adding_after_build_needs_a_reset() {
        let mut compositor = Compositor2::default();
        assert!(compositor.add_lines(Vec::new()).is_err());
        compositor.reset_frame();
        compositor.build_draw_order().unwrap();
        assert_eq!(compositor.phase(), FramePhase::Built);
        assert!(compositor.add_balls(Vec::new()).is_err());
        assert!(compositor.build_draw_order().is_err());
        compositor.reset_frame();
        assert!(compositor.add_balls(Vec::new()).is_ok());
    }
}
