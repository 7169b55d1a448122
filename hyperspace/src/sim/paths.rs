use std::collections::BTreeMap;

use log::debug;

use crate::{
    color::Color,
    constants::PATH_DEVIATION_LIMIT,
    math::{Segment, Vector},
    sim::body::{Body, BodyId},
};

/// The open end of a body's trail. Remembers the direction it started with so
/// slow curves still get split.
#[derive(Debug, Clone)]
struct TrailSegment<V> {
    segment: Segment<V>,
    start_direction: V,
}

impl<V: Vector> TrailSegment<V> {
    fn new(start: V, end: V, color: Color) -> Self {
        let segment = Segment::new(start, end, color);
        let start_direction = segment.direction();
        Self {
            segment,
            start_direction,
        }
    }

    fn has_direction(&self) -> bool {
        self.start_direction.is_defined()
    }

    /// Perpendicular distance of `point` from the line the segment started on.
    fn deviation(&self, point: &V) -> f64 {
        let to_point = point.minus(&self.segment.start);
        let along = self
            .start_direction
            .scaled(to_point.dot(&self.start_direction));
        to_point.minus(&along).length()
    }
}

/// Polyline history of every body, kept as straight segments.
///
/// Each body owns at most one open segment. It is stretched while the body
/// moves along its starting direction and closed once the body strays more
/// than [`PATH_DEVIATION_LIMIT`] from it.
#[derive(Debug, Clone)]
pub struct TrajectoryRecorder<V> {
    open: BTreeMap<BodyId, TrailSegment<V>>,
    finished: Vec<Segment<V>>,
}

impl<V> Default for TrajectoryRecorder<V> {
    fn default() -> Self {
        Self {
            open: BTreeMap::new(),
            finished: Vec::new(),
        }
    }
}

impl<V: Vector> TrajectoryRecorder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends every body's trail to where the body is now.
    pub fn update(&mut self, bodies: &[Body<V>]) {
        for body in bodies {
            self.update_body(body);
        }
    }

    fn update_body(&mut self, body: &Body<V>) {
        let position = body.position();
        let Some(trail) = self.open.get_mut(&body.id()) else {
            self.open.insert(
                body.id(),
                TrailSegment::new(position.clone(), position.clone(), body.color()),
            );
            return;
        };

        // Still a single point: wait for the body to move somewhere.
        if !trail.has_direction() {
            *trail = TrailSegment::new(trail.segment.start.clone(), position.clone(), body.color());
            return;
        }

        if trail.deviation(position) < PATH_DEVIATION_LIMIT {
            trail.segment.end.set(position);
        } else {
            let next = TrailSegment::new(trail.segment.end.clone(), position.clone(), body.color());
            let done = std::mem::replace(trail, next);
            debug!("Trail segment of body {} completed", body.id());
            self.finished.push(done.segment);
        }
    }

    /// Closes the open trail of `id` and joins it to `final_point`.
    pub fn finish(&mut self, id: BodyId, final_point: &V) {
        let Some(trail) = self.open.remove(&id) else {
            return;
        };
        let segment = trail.segment;
        let tail = Segment::new(segment.end.clone(), final_point.clone(), segment.color);
        self.push_finished(segment);
        self.push_finished(tail);
    }

    /// Points carry nothing worth drawing.
    fn push_finished(&mut self, segment: Segment<V>) {
        if segment.length_squared() > 0.0 {
            self.finished.push(segment);
        }
    }

    /// Closes every open trail at the current position of its body. Trails of
    /// bodies that no longer exist are closed where they end.
    pub fn finish_all(&mut self, bodies: &[Body<V>]) {
        for body in bodies {
            self.finish(body.id(), body.position());
        }
        let stale = std::mem::take(&mut self.open);
        for trail in stale.into_values() {
            self.push_finished(trail.segment);
        }
    }

    pub fn finished_segments(&self) -> &[Segment<V>] {
        &self.finished
    }

    pub fn unfinished_segments(&self) -> impl Iterator<Item = &Segment<V>> {
        self.open.values().map(|trail| &trail.segment)
    }

    pub fn has_open_trail(&self, id: BodyId) -> bool {
        self.open.contains_key(&id)
    }

    pub fn clear(&mut self) {
        self.open.clear();
        self.finished.clear();
    }
}
