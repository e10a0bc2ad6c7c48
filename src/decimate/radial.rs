use crate::decimate::coord::XY;
use crate::decimate::distance::point_distance;

/// Radial-distance pass.
///
/// Walks forward from an anchor and drops every point lying within
/// `tolerance` of it; the first point beyond the tolerance becomes the next
/// anchor. Once no remaining point escapes the current anchor the scan stops.
/// The last point is always kept, so the output starts and ends with the
/// input's endpoints.
pub fn decimate_radial_distance<T: XY + Clone>(points: &[T], tolerance: f64) -> Vec<T> {
    let last = match points.len() {
        0 => return Vec::new(),
        n => n - 1,
    };

    let mut simplified = Vec::new();
    let mut anchor = 0;
    while anchor < last {
        simplified.push(points[anchor].clone());
        let next = (anchor + 1..=last)
            .find(|&i| point_distance(&points[anchor], &points[i]) > tolerance);
        match next {
            Some(i) => anchor = i,
            None => break,
        }
    }
    simplified.push(points[last].clone());
    simplified
}
