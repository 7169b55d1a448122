use std::f64::consts::FRAC_PI_2;

use crate::{
    constants::{DISTANCE_TO_PROJECTED_PLANE, IN_FRONT_MARGIN, NEAR_CLIP_DISTANCE},
    error::{Error, Result},
    math::{Ball, Hyperplane, Segment, Vector, from_angles, to_angles},
};

/// Unit axes spanning the image plane of a camera looking along
/// `from_angles(angles)`.
///
/// Axis `i` keeps the first `i` view angles and turns angle `i` by a quarter
/// turn, which makes every axis perpendicular to the view and to each other.
pub fn basis_from_angles<V: Vector>(angles: &[f64]) -> Vec<V> {
    (0..angles.len())
        .map(|i| {
            let mut axis_angles = vec![0.0; angles.len()];
            axis_angles[..i].copy_from_slice(&angles[..i]);
            axis_angles[i] = if i == 0 {
                angles[0] - FRAC_PI_2
            } else {
                angles[i] + FRAC_PI_2
            };
            from_angles(&axis_angles)
        })
        .collect()
}

/// Position, view direction and image hyperplane of a camera.
#[derive(Debug, Clone)]
pub struct Lens<V> {
    position: V,
    view: V,
    origin: V,
    plane: Hyperplane<V>,
    axes: Vec<V>,
}

impl<V: Vector> Lens<V> {
    /// A lens looking along `view`, which does not have to be normalized.
    pub fn new(position: V, view: &V) -> Result<Self> {
        let dimension = position.dimension();
        if dimension < 2 {
            return Err(Error::UnsupportedDimension { dimension });
        }
        if view.dimension() != dimension {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                found: view.dimension(),
            });
        }
        let view = view.normalized();
        let angles = to_angles(&view);
        Ok(Self::build(position, view, &angles))
    }

    /// A lens looking along the direction given by `angles`. Needs one angle
    /// less than the dimension of `position`.
    pub fn with_angles(position: V, angles: &[f64]) -> Self {
        assert_eq!(
            angles.len() + 1,
            position.dimension(),
            "vector dimension mismatch"
        );
        let view = from_angles(angles);
        Self::build(position, view, angles)
    }

    fn build(position: V, view: V, angles: &[f64]) -> Self {
        let origin = position.plus_scaled(&view, DISTANCE_TO_PROJECTED_PLANE);
        let plane = Hyperplane::new(origin.clone(), &view);
        Self {
            position,
            view,
            origin,
            plane,
            axes: basis_from_angles(angles),
        }
    }

    pub fn position(&self) -> &V {
        &self.position
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Center of the image plane.
    pub fn image_origin(&self) -> &V {
        &self.origin
    }

    pub fn axes(&self) -> &[V] {
        &self.axes
    }

    pub fn translate(&mut self, offset: &V) {
        self.position.add(offset);
        self.origin.add(offset);
        self.plane = Hyperplane::new(self.origin.clone(), &self.view);
    }

    /// Points the lens along new angles, keeping its position.
    pub fn reorient(&mut self, angles: &[f64]) {
        let position = self.position.clone();
        *self = Self::with_angles(position, angles);
    }

    pub fn in_front(&self, point: &V) -> bool {
        point.minus(&self.position).dot(&self.view) > IN_FRONT_MARGIN
    }

    /// Coordinates, along each image axis, of where the ray from the camera
    /// through `point` pierces the image plane.
    pub fn image_coordinates(&self, point: &V) -> Option<Vec<f64>> {
        let direction = point.minus(&self.position);
        let hit = self.plane.line_intersection(&self.position, &direction)?;
        let rel = hit.minus(&self.origin);
        Some(self.axes.iter().map(|axis| rel.dot(axis)).collect())
    }

    /// The point on the image plane with the given image coordinates.
    pub fn image_point(&self, coords: &[f64]) -> V {
        let mut point = self.origin.clone();
        for (axis, c) in self.axes.iter().zip(coords) {
            point.add_scaled(axis, *c);
        }
        point
    }

    pub fn project_point<U: Vector>(&self, point: &V) -> Option<U> {
        self.image_coordinates(point)
            .map(|coords| U::from_components(&coords))
    }

    pub fn project_segment<U: Vector>(&self, segment: &Segment<V>) -> Option<Segment<U>> {
        let (start, end) = match (self.in_front(&segment.start), self.in_front(&segment.end)) {
            (true, true) => (segment.start.clone(), segment.end.clone()),
            (false, false) => return None,
            (true, false) => (segment.start.clone(), self.near_clip(segment)?),
            (false, true) => (self.near_clip(segment)?, segment.end.clone()),
        };
        Some(Segment::new(
            self.project_point(&start)?,
            self.project_point(&end)?,
            segment.color,
        ))
    }

    /// Where `segment` crosses the plane just in front of the camera.
    fn near_clip(&self, segment: &Segment<V>) -> Option<V> {
        let near = Hyperplane::new(
            self.position.plus_scaled(&self.view, NEAR_CLIP_DISTANCE),
            &self.view,
        );
        near.line_intersection(&segment.start, &segment.end.minus(&segment.start))
    }

    pub fn project_ball<U: Vector>(&self, ball: &Ball<V>) -> Option<Ball<U>> {
        let depth = ball.center.minus(&self.position).dot(&self.view);
        let center = self.project_point(&ball.center)?;
        Some(Ball::new(
            center,
            ball.radius * DISTANCE_TO_PROJECTED_PLANE / depth,
            ball.color,
        ))
    }
}
