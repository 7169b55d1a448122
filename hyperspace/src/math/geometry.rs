use crate::color::Color;

use super::{Vector, nearly_zero};

/// A flat (D-1)-dimensional subset of D-dimensional space, stored as a point
/// on it and a unit normal.
#[derive(Debug, Clone)]
pub struct Hyperplane<V> {
    point: V,
    normal: V,
}

impl<V: Vector> Hyperplane<V> {
    /// The normal is normalized here; a zero normal leaves every query NaN.
    pub fn new(point: V, normal: &V) -> Self {
        Self {
            point,
            normal: normal.normalized(),
        }
    }

    pub fn point(&self) -> &V {
        &self.point
    }

    pub fn normal(&self) -> &V {
        &self.normal
    }

    /// Signed distance, negative on the side the normal points away from.
    pub fn distance_to(&self, coords: &V) -> f64 {
        self.normal.dot(&coords.minus(&self.point))
    }

    /// The closest point on the plane.
    pub fn project_point(&self, coords: &V) -> V {
        coords.plus_scaled(&self.normal, -self.distance_to(coords))
    }

    /// Where the infinite line through `origin` along `direction` meets the
    /// plane, or `None` when the line is parallel to it.
    pub fn line_intersection(&self, origin: &V, direction: &V) -> Option<V> {
        let l_dot_n = direction.dot(&self.normal);
        if nearly_zero(l_dot_n) || l_dot_n.is_nan() {
            return None;
        }
        let d = self.point.minus(origin).dot(&self.normal) / l_dot_n;
        Some(origin.plus_scaled(direction, d))
    }

    /// Where the segment crosses the plane. Segments with both endpoints on
    /// one side, or lying in the plane, give `None`.
    pub fn segment_intersection(&self, segment: &Segment<V>) -> Option<V> {
        let s1 = self.distance_to(&segment.start).signum();
        let s2 = self.distance_to(&segment.end).signum();
        if s1 == s2 {
            return None;
        }
        self.line_intersection(&segment.start, &segment.direction())
    }

    pub fn contains(&self, coords: &V) -> bool {
        nearly_zero(coords.minus(&self.point).dot(&self.normal))
    }
}

/// A coloured line segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<V> {
    pub start: V,
    pub end: V,
    pub color: Color,
}

impl<V: Vector> Segment<V> {
    pub fn new(start: V, end: V, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Unit vector from `end` towards `start`; undefined for a zero length
    /// segment.
    pub fn direction(&self) -> V {
        self.start.minus(&self.end).normalized()
    }

    pub fn length_squared(&self) -> f64 {
        self.start.squared_distance_to(&self.end)
    }

    /// Shortest distance from `point` to the infinite line through this
    /// segment.
    pub fn line_distance_to(&self, point: &V) -> f64 {
        let direction = self.direction();
        let to_point = point.minus(&self.start);
        let along = direction.scaled(to_point.dot(&direction));
        to_point.minus(&along).length()
    }
}

/// A filled-in sphere of any dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball<V> {
    pub center: V,
    pub radius: f64,
    pub color: Color,
}

impl<V: Vector> Ball<V> {
    pub fn new(center: V, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Balls sharing a single point still count as touching.
    pub fn is_touching(&self, other: &Ball<V>) -> bool {
        let reach = self.radius + other.radius;
        reach * reach >= self.center.squared_distance_to(&other.center)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cgmath::Vector3;

    use super::*;
    use crate::math::VectorN;

    fn v3(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Hyperplane::new(v3(0.0, 0.0, 2.0), &v3(0.0, 0.0, 5.0));
        assert_abs_diff_eq!(plane.distance_to(&v3(3.0, 1.0, 5.0)), 3.0);
        assert_abs_diff_eq!(plane.distance_to(&v3(3.0, 1.0, -1.0)), -3.0);
        assert_eq!(plane.project_point(&v3(3.0, 1.0, 5.0)), v3(3.0, 1.0, 2.0));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let plane = Hyperplane::new(v3(0.0, 0.0, 0.0), &v3(0.0, 0.0, 1.0));
        assert!(
            plane
                .line_intersection(&v3(0.0, 0.0, 1.0), &v3(1.0, 0.0, 0.0))
                .is_none()
        );
        let hit = plane
            .line_intersection(&v3(1.0, 1.0, 1.0), &v3(0.0, 0.0, -2.0))
            .unwrap();
        assert_abs_diff_eq!(hit.z, 0.0);
    }

    #[test]
    fn segments_must_straddle_the_plane() {
        let plane = Hyperplane::new(VectorN::zero(5), &VectorN::unit(5, 4));
        let mut a = VectorN::zero(5);
        let mut b = VectorN::zero(5);
        a.add(&VectorN::unit(5, 4));
        b.add(&VectorN::unit(5, 4).scaled(3.0));
        let above = Segment::new(a.clone(), b, Color::WHITE);
        assert!(plane.segment_intersection(&above).is_none());

        let below = Segment::new(a, VectorN::unit(5, 4).scaled(-1.0), Color::WHITE);
        let hit = plane.segment_intersection(&below).unwrap();
        assert!(plane.contains(&hit));
    }

    #[test]
    fn touching_includes_single_point_contact() {
        let a = Ball::new(v3(0.0, 0.0, 0.0), 1.0, Color::WHITE);
        let b = Ball::new(v3(3.0, 0.0, 0.0), 2.0, Color::WHITE);
        let c = Ball::new(v3(3.1, 0.0, 0.0), 2.0, Color::WHITE);
        assert!(a.is_touching(&b));
        assert!(!a.is_touching(&c));
    }

    #[test]
    fn line_distance_is_perpendicular() {
        let s = Segment::new(v3(0.0, 0.0, 0.0), v3(10.0, 0.0, 0.0), Color::WHITE);
        assert_abs_diff_eq!(s.line_distance_to(&v3(25.0, 3.0, 4.0)), 5.0, epsilon = 1e-12);
    }
}
