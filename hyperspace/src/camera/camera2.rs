use cgmath::Vector2;

use crate::{
    constants::{MAX_PAN_DISTANCE, PAN_SPEED},
    math::{Ball, Segment, Vector},
};

use super::Projector;

/// Flat camera that only pans. Its image is the plane itself shifted by the
/// pan offset.
#[derive(Debug, Clone)]
pub struct Camera2 {
    offset: Vector2<f64>,
}

impl Camera2 {
    pub fn new(offset: Vector2<f64>) -> Self {
        let mut camera = Self::default();
        camera.pan(offset.x, offset.y);
        camera
    }

    pub fn offset(&self) -> Vector2<f64> {
        self.offset
    }

    /// Moves the camera, stopping at the pan limit.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.x = (self.offset.x + dx).clamp(-MAX_PAN_DISTANCE, MAX_PAN_DISTANCE);
        self.offset.y = (self.offset.y + dy).clamp(-MAX_PAN_DISTANCE, MAX_PAN_DISTANCE);
    }

    pub fn move_up(&mut self) {
        self.pan(0.0, PAN_SPEED);
    }

    pub fn move_down(&mut self) {
        self.pan(0.0, -PAN_SPEED);
    }

    pub fn move_left(&mut self) {
        self.pan(-PAN_SPEED, 0.0);
    }

    pub fn move_right(&mut self) {
        self.pan(PAN_SPEED, 0.0);
    }
}

impl Default for Camera2 {
    fn default() -> Self {
        Self {
            offset: Vector2::new(0.0, 0.0),
        }
    }
}

impl Projector for Camera2 {
    type Space = Vector2<f64>;
    type Image = Vector2<f64>;

    fn position(&self) -> &Vector2<f64> {
        &self.offset
    }

    fn in_front(&self, _point: &Vector2<f64>) -> bool {
        true
    }

    fn project_point(&self, point: &Vector2<f64>) -> Option<Vector2<f64>> {
        Some(point.minus(&self.offset))
    }

    fn project_segment(&self, segment: &Segment<Vector2<f64>>) -> Option<Segment<Vector2<f64>>> {
        Some(Segment::new(
            segment.start.minus(&self.offset),
            segment.end.minus(&self.offset),
            segment.color,
        ))
    }

    fn project_ball(&self, ball: &Ball<Vector2<f64>>) -> Option<Ball<Vector2<f64>>> {
        Some(Ball::new(
            ball.center.minus(&self.offset),
            ball.radius,
            ball.color,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn default_camera_is_unpanned() {
        let camera = Camera2::default();
        assert_eq!(camera.offset(), Vector2::new(0.0, 0.0));
        let ball = Ball::new(Vector2::new(-4.0, 7.5), 1.0, Color::WHITE);
        assert_eq!(camera.project_ball(&ball).unwrap().center, ball.center);
    }

    #[test]
    fn panning_shifts_the_image() {
        let mut camera = Camera2::default();
        camera.move_right();
        camera.move_up();
        let ball = Ball::new(Vector2::new(10.0, 10.0), 3.0, Color::WHITE);
        let projected = camera.project_ball(&ball).unwrap();
        assert_eq!(projected.center, Vector2::new(5.0, 5.0));
        assert_eq!(projected.radius, 3.0);
    }

    #[test]
    fn panning_stops_at_the_limit() {
        let mut camera = Camera2::new(Vector2::new(MAX_PAN_DISTANCE - 1.0, 0.0));
        camera.move_right();
        assert_eq!(camera.offset().x, MAX_PAN_DISTANCE);
        camera.pan(0.0, -1e9);
        assert_eq!(camera.offset().y, -MAX_PAN_DISTANCE);
    }
}
