//! Bezier geometry for connection curves.
//!
//! A connection is rendered as a cubic bezier whose control points
//! ("tangents") extend horizontally from each endpoint by half the horizontal
//! span between them, producing the familiar S-curve. The same curve is used
//! for hit testing, so what the pointer can grab matches what is painted.

use crate::geometry::Point;

/// Horizontal offset applied to both tangents: half the signed horizontal
/// span between the endpoints.
fn tangent_offset(source: Point, dest: Point) -> f32 {
    (dest.x - source.x) / 2.0
}

/// Control point extending from the source endpoint, at the source's own Y.
pub fn source_tangent(source: Point, dest: Point) -> Point {
    Point::new(source.x + tangent_offset(source, dest), source.y)
}

/// Control point extending from the destination endpoint, at the
/// destination's own Y.
pub fn dest_tangent(source: Point, dest: Point) -> Point {
    Point::new(dest.x - tangent_offset(source, dest), dest.y)
}

/// Derived geometry of one connection, in the shape the rendering layer
/// consumes: both endpoints, both tangents, and the selection flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionGeometry {
    pub source: Point,
    pub dest: Point,
    pub source_tangent: Point,
    pub dest_tangent: Point,
    pub selected: bool,
}

impl ConnectionGeometry {
    /// Build the geometry from resolved endpoint positions.
    pub fn from_endpoints(source: Point, dest: Point, selected: bool) -> Self {
        Self {
            source,
            dest,
            source_tangent: source_tangent(source, dest),
            dest_tangent: dest_tangent(source, dest),
            selected,
        }
    }

    /// Point at parametric `scale` on the straight line between the
    /// endpoints. Label anchors typically use `0.5`.
    pub fn midpoint(&self, scale: f32) -> Point {
        self.source.lerp(self.dest, scale)
    }

    /// The cubic bezier through this geometry's endpoints and tangents.
    pub fn curve(&self) -> CubicBezier {
        CubicBezier {
            p0: self.source,
            p1: self.source_tangent,
            p2: self.dest_tangent,
            p3: self.dest,
        }
    }
}

/// A cubic bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    /// Create the connection curve for a source/dest endpoint pair.
    pub fn from_connection(source: Point, dest: Point) -> Self {
        CubicBezier {
            p0: source,
            p1: source_tangent(source, dest),
            p2: dest_tangent(source, dest),
            p3: dest,
        }
    }

    /// Evaluate the curve at parameter `t` (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point::new(
            mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        )
    }
}

/// Squared distance from a point to a line segment.
fn distance_to_segment_sq(point: Point, a: Point, b: Point) -> f32 {
    let ab = (b.x - a.x, b.y - a.y);
    let ap = (point.x - a.x, point.y - a.y);

    let ab_len_sq = ab.0 * ab.0 + ab.1 * ab.1;
    if ab_len_sq < f32::EPSILON {
        return ap.0 * ap.0 + ap.1 * ap.1;
    }

    let t = ((ap.0 * ab.0 + ap.1 * ab.1) / ab_len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * ab.0, a.y + t * ab.1);

    let dx = point.x - closest.x;
    let dy = point.y - closest.y;
    dx * dx + dy * dy
}

/// Minimum distance from a point to a cubic bezier curve.
///
/// Samples the curve at regular intervals and measures against the resulting
/// polyline. `samples` of 0 falls back to 20.
pub fn distance_to_bezier(point: Point, curve: &CubicBezier, samples: usize) -> f32 {
    let samples = if samples == 0 { 20 } else { samples };

    let mut min_dist_sq = f32::MAX;
    let mut prev = curve.eval(0.0);

    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let curr = curve.eval(t);

        let dist_sq = distance_to_segment_sq(point, prev, curr);
        if dist_sq < min_dist_sq {
            min_dist_sq = dist_sq;
        }

        prev = curr;
    }

    min_dist_sq.sqrt()
}
