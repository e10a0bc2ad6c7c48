use crate::decimate::coord::XY;
use crate::decimate::distance::line_distance;

/// Index of the interior point furthest from the chord `points[first]` to
/// `points[last]`, with its distance. Ties go to the first occurrence.
///
/// The search starts below zero so that a deviation of exactly zero still
/// registers as a split point when the tolerance is zero.
fn furthest_point<T: XY>(points: &[T], first: usize, last: usize) -> Option<(usize, f64)> {
    let chord = (&points[first], &points[last]);
    let mut furthest = None;
    let mut max_distance = -1.0;
    for i in first + 1..last {
        let d = line_distance(chord, &points[i]);
        if d > max_distance {
            max_distance = d;
            furthest = Some((i, d));
        }
    }
    furthest
}

/// Douglas-Peucker pass.
///
/// Splits the sequence at the point deviating most from the chord between
/// its ends, keeps that point, and repeats on both halves until every
/// remaining deviation is below `tolerance`. Ranges are worked off an
/// explicit stack so deep inputs don't grow the call stack.
pub fn decimate_douglas_peucker<T: XY + Clone>(points: &[T], tolerance: f64) -> Vec<T> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut ranges = vec![(0, last)];
    while let Some((first, last)) = ranges.pop() {
        match furthest_point(points, first, last) {
            Some((i, d)) if d >= tolerance => {
                keep[i] = true;
                ranges.push((first, i));
                ranges.push((i, last));
            }
            _ => {}
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| if k { Some(p.clone()) } else { None })
        .collect()
}
