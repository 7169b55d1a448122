//! Visibility predicates for three dimensional segments.
//!
//! There is no depth buffer further down the pipeline, so the compositor asks
//! these questions to decide which primitive must be drawn first. All of them
//! look at the triangle spanned by the camera and a segment: anything that
//! reaches into that triangle sits between the camera and the segment.

use cgmath::Vector3;

use super::{Ball, Hyperplane, Segment, Vector};

type V3 = Vector3<f64>;

/// Whether `segment` appears partially or fully behind `ball`, seen from `cam`.
///
/// A ball intersecting the segment only hides it when the ball contains the
/// whole segment or its center is on the camera side of the segment.
pub fn segment_is_behind_ball(segment: &Segment<V3>, ball: &Ball<V3>, cam: &V3) -> bool {
    let direction = segment.direction();
    let center = &ball.center;
    let rad = ball.radius;

    // The segment and the camera span the line-camera plane. A ball that
    // does not reach that plane cannot be in front of the segment.
    let cam_to_p1 = segment.start.minus(cam);
    let line_cam_normal = direction.cross(cam_to_p1);
    let line_cam_plane = Hyperplane::new(segment.start, &line_cam_normal);
    if line_cam_plane.distance_to(center).abs() > rad {
        return false;
    }

    // The segment splits that plane in two; the ball has to be on the
    // camera's side, unless it swallows the segment entirely.
    let center_to_p1 = segment.start.minus(center);
    if direction.cross(center_to_p1).dot(&line_cam_normal) < 0.0 {
        let rad_sq = rad * rad;
        return segment.start.squared_distance_to(center) <= rad_sq
            && segment.end.squared_distance_to(center) <= rad_sq;
    }

    // Finally the ball has to reach into the camera/segment triangle.
    let cam_to_p2 = segment.end.minus(cam);
    let cam_to_center = center.minus(cam);
    let triangle_normal = cam_to_p1.cross(cam_to_p2);

    // Center outside the edge through the camera and the start point.
    if cam_to_p1.cross(cam_to_center).dot(&triangle_normal) < 0.0 {
        let edge = Segment::new(*cam, segment.start, segment.color);
        return edge.line_distance_to(center) <= rad;
    }

    // Center outside the edge through the camera and the end point.
    if cam_to_p2.cross(cam_to_center).dot(&triangle_normal) > 0.0 {
        let edge = Segment::new(*cam, segment.end, segment.color);
        return edge.line_distance_to(center) <= rad;
    }

    true
}

/// Whether `segment` appears behind `other`, seen from `cam`.
///
/// Crossing segments count as behind. Segments coplanar with the camera are
/// never reported as behind each other.
pub fn segment_is_behind_segment(segment: &Segment<V3>, other: &Segment<V3>, cam: &V3) -> bool {
    let direction = segment.direction();
    let cam_to_p1 = segment.start.minus(cam);
    let line_cam_normal = direction.cross(cam_to_p1);
    let line_cam_plane = Hyperplane::new(segment.start, &line_cam_normal);

    let Some(hit) = line_cam_plane.segment_intersection(other) else {
        return false;
    };

    // The crossing point has to lie on the camera's side of this segment...
    let hit_to_p1 = segment.start.minus(&hit);
    if direction.cross(hit_to_p1).dot(&line_cam_normal) < 0.0 {
        return false;
    }

    // ...and between the two camera edges of the triangle.
    let cam_to_hit = hit.minus(cam);
    let cam_to_p2 = segment.end.minus(cam);
    let triangle_normal = cam_to_p1.cross(cam_to_p2);

    if cam_to_p1.cross(cam_to_hit).dot(&triangle_normal) < 0.0 {
        return false;
    }
    if cam_to_p2.cross(cam_to_hit).dot(&triangle_normal) > 0.0 {
        return false;
    }

    true
}
