use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::core::ProjectedPoint;

/// Nearest-neighbour index over projected points (implicit 2-d tree).
///
/// The tree lives in `order`: the node for the sub-range `[lo, hi)` sits at
/// `(lo + hi) / 2`, its left subtree in `[lo, mid)` and right subtree in
/// `(mid, hi)`. Points with non-finite coordinates are left out.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    points: Vec<ProjectedPoint>,
    order: Vec<usize>,
    split_axes: Vec<Axis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn coordinate(self, point: ProjectedPoint) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

type Candidate = (OrderedFloat<f64>, usize);

impl SpatialIndex {
    #[must_use]
    pub fn build(points: &[ProjectedPoint]) -> Self {
        let mut order: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.x.is_finite() && point.y.is_finite())
            .map(|(index, _)| index)
            .collect();
        let mut split_axes = vec![Axis::X; order.len()];
        build_subtree(points, &mut order, &mut split_axes);

        Self {
            points: points.to_vec(),
            order,
            split_axes,
        }
    }

    /// Number of indexed (finite) points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Projected position of a dataset index, as it was indexed.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<ProjectedPoint> {
        self.points.get(index).copied()
    }

    /// Dataset index of the point closest to `(x, y)`.
    ///
    /// Equidistant candidates resolve to the lowest dataset index.
    #[must_use]
    pub fn nearest(&self, x: f64, y: f64) -> Option<usize> {
        self.nearest_with_distance(x, y).map(|(index, _)| index)
    }

    /// Like [`SpatialIndex::nearest`], also returning the Euclidean distance.
    #[must_use]
    pub fn nearest_with_distance(&self, x: f64, y: f64) -> Option<(usize, f64)> {
        if self.is_empty() || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let mut best: Option<Candidate> = None;
        self.search(0, self.order.len(), ProjectedPoint::new(x, y), &mut best);
        best.map(|(distance_sq, index)| (index, distance_sq.0.sqrt()))
    }

    fn search(&self, lo: usize, hi: usize, query: ProjectedPoint, best: &mut Option<Candidate>) {
        if lo >= hi {
            return;
        }

        let mid = (lo + hi) / 2;
        let index = self.order[mid];
        let point = self.points[index];
        let dx = point.x - query.x;
        let dy = point.y - query.y;
        let candidate = (OrderedFloat(dx * dx + dy * dy), index);
        if best.is_none_or(|current| candidate < current) {
            *best = Some(candidate);
        }

        let axis = self.split_axes[mid];
        let delta = axis.coordinate(query) - axis.coordinate(point);
        let (near, far) = if delta < 0.0 {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };

        self.search(near.0, near.1, query, best);
        // Equal plane distance may still hide a lower-index tie.
        let plane_sq = OrderedFloat(delta * delta);
        if best.is_none_or(|(distance_sq, _)| plane_sq <= distance_sq) {
            self.search(far.0, far.1, query, best);
        }
    }
}

fn build_subtree(points: &[ProjectedPoint], order: &mut [usize], split_axes: &mut [Axis]) {
    if order.is_empty() {
        return;
    }

    let axis = widest_axis(points, order);
    let mid = order.len() / 2;
    order.select_nth_unstable_by(mid, |left, right| {
        compare_on_axis(points, axis, *left, *right)
    });
    split_axes[mid] = axis;

    let (left_order, rest) = order.split_at_mut(mid);
    let (left_axes, rest_axes) = split_axes.split_at_mut(mid);
    build_subtree(points, left_order, left_axes);
    build_subtree(points, &mut rest[1..], &mut rest_axes[1..]);
}

fn widest_axis(points: &[ProjectedPoint], order: &[usize]) -> Axis {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &index in order {
        let point = points[index];
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }
    if max_y - min_y > max_x - min_x {
        Axis::Y
    } else {
        Axis::X
    }
}

fn compare_on_axis(points: &[ProjectedPoint], axis: Axis, left: usize, right: usize) -> Ordering {
    axis.coordinate(points[left])
        .total_cmp(&axis.coordinate(points[right]))
        .then(left.cmp(&right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(points: &[ProjectedPoint], x: f64, y: f64) -> Option<usize> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let dx = point.x - x;
                let dy = point.y - y;
                (OrderedFloat(dx * dx + dy * dy), index)
            })
            .min()
            .map(|(_, index)| index)
    }

    #[test]
    fn matches_brute_force_on_grid() {
        let points: Vec<ProjectedPoint> = (0..400)
            .map(|i| ProjectedPoint::new(f64::from(i % 20) * 7.0, f64::from(i / 20) * 5.0))
            .collect();
        let index = SpatialIndex::build(&points);
        for step in 0..200 {
            let x = f64::from(step) * 0.73;
            let y = f64::from(step) * 0.51;
            assert_eq!(index.nearest(x, y), brute_force(&points, x, y));
        }
    }

    #[test]
    fn skips_non_finite_points() {
        let points = vec![
            ProjectedPoint::new(f64::NAN, 0.0),
            ProjectedPoint::new(10.0, 10.0),
        ];
        let index = SpatialIndex::build(&points);
        assert_eq!(index.len(), 1);
        assert_eq!(index.nearest(0.0, 0.0), Some(1));
    }
}
