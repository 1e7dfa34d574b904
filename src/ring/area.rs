use geo::{Coord, Point, Rect};

use super::BoundaryRing;

/// Approximate meters per degree of latitude at the equator.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

impl BoundaryRing {
    /// Approximate enclosed area in m².
    ///
    /// Planar shoelace over (lng, lat) treated as Cartesian (x, y), absolute
    /// value halved, scaled by `METERS_PER_DEGREE`². No latitude-dependent
    /// longitude correction is applied, so accuracy degrades away from the
    /// equator and for very large polygons; the approximation is kept as-is
    /// for comparability with historically stored area figures.
    ///
    /// Returns 0.0 for incomplete rings; always non-negative.
    pub fn area_m2(&self) -> f64 {
        if !self.is_complete() {
            return 0.0;
        }
        self.signed_area_deg2().abs() * METERS_PER_DEGREE * METERS_PER_DEGREE
    }

    /// Shoelace sum over the implicitly closed ring, in square degrees.
    fn signed_area_deg2(&self) -> f64 {
        let pts = self.points();
        let mut sum = 0.0;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            sum += a.x() * b.y() - b.x() * a.y();
        }
        sum / 2.0
    }

    /// Approximate perimeter in m, under the same equatorial scaling as
    /// `area_m2`. Returns 0.0 for incomplete rings.
    pub fn perimeter_m(&self) -> f64 {
        if !self.is_complete() {
            return 0.0;
        }
        let pts = self.points();
        let mut total = 0.0;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            total += (b.x() - a.x()).hypot(b.y() - a.y());
        }
        total * METERS_PER_DEGREE
    }

    /// Vertex mean of the ring in (lng, lat), the anchor for labels and
    /// camera centering. `None` when the ring is empty.
    pub fn centroid(&self) -> Option<Point<f64>> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let (sx, sy) = self
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
        Some(Point::new(sx / n, sy / n))
    }

    /// Axis-aligned bounding box in (lng, lat). `None` when the ring is empty.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let first = self.points().first()?;
        let (mut min, mut max) = (Coord { x: first.x(), y: first.y() }, Coord { x: first.x(), y: first.y() });
        for p in self.iter() {
            min.x = min.x.min(p.x());
            min.y = min.y.min(p.y());
            max.x = max.x.max(p.x());
            max.y = max.y.max(p.y());
        }
        Some(Rect::new(min, max))
    }
}
