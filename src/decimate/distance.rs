use crate::decimate::coord::{same_xy, XY};

/// Euclidean distance between two coordinates.
pub fn point_distance<A: XY, B: XY>(a: &A, b: &B) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}

/// Perpendicular distance from `point` to the infinite line through both
/// ends of `line`. The result is not clamped to the segment.
///
/// A zero-length line degrades to point distance. Exactly vertical and
/// horizontal lines are answered from a single axis delta.
pub fn line_distance<A: XY, B: XY>(line: (&A, &A), point: &B) -> f64 {
    let (start, end) = line;
    let (x0, y0) = (point.x(), point.y());
    let (x1, y1) = (start.x(), start.y());
    let (x2, y2) = (end.x(), end.y());

    if same_xy(start, end) {
        return point_distance(start, point);
    }

    if x1 == x2 {
        return (x1 - x0).abs();
    }

    if y1 == y2 {
        return (y1 - y0).abs();
    }

    // twice the triangle area over its base
    let area2 = ((y2 - y1) * x0 - (x2 - x1) * y0 + x2 * y1 - y2 * x1).abs();
    area2 / point_distance(start, end)
}
