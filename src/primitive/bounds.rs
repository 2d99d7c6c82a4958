//! Dimension-independent helpers for axis-aligned extents.
//!
//! Rectangles and boxes both reduce to per-axis closed intervals, so the
//! folding and overlap logic lives here once for any `D`.

use nalgebra::Point;

/// Component-wise minimum and maximum over a set of points.
///
/// Returns `None` when `points` is empty.
pub fn extent_of<const D: usize>(
    points: impl IntoIterator<Item = Point<f32, D>>,
) -> Option<(Point<f32, D>, Point<f32, D>)> {
    let mut points = points.into_iter();
    let first = points.next()?;

    Some(points.fold((first, first), |(min, max), pt| {
        (min.inf(&pt), max.sup(&pt))
    }))
}

/// Whether the closed intervals `[a_min, a_max]` and `[b_min, b_max]` intersect.
///
/// Touching endpoints count as overlap.
#[inline]
pub fn intervals_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min <= b_max && b_min <= a_max
}

/// Whether two axis-aligned extents overlap on every axis.
pub fn extents_overlap<const D: usize>(
    a: (&Point<f32, D>, &Point<f32, D>),
    b: (&Point<f32, D>, &Point<f32, D>),
) -> bool {
    (0..D).all(|i| intervals_overlap(a.0[i], a.1[i], b.0[i], b.1[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    #[test]
    fn extent_of_empty_is_none() {
        assert!(extent_of::<3>(std::iter::empty()).is_none());
    }

    #[test]
    fn extent_of_single_point_is_degenerate() {
        let p = Point2::new(1.0, -2.0);
        assert_eq!(extent_of([p]), Some((p, p)));
    }

    #[test]
    fn extent_of_folds_each_axis_independently() {
        let (min, max) = extent_of([
            Point3::new(0.0, 5.0, -1.0),
            Point3::new(3.0, -2.0, 0.0),
            Point3::new(1.0, 1.0, 4.0),
        ])
        .unwrap();
        assert_eq!(min, Point3::new(0.0, -2.0, -1.0));
        assert_eq!(max, Point3::new(3.0, 5.0, 4.0));
    }

    #[test]
    fn touching_intervals_overlap() {
        assert!(intervals_overlap(0.0, 1.0, 1.0, 2.0));
        assert!(!intervals_overlap(0.0, 1.0, 1.5, 2.0));
        assert!(intervals_overlap(0.0, 10.0, 2.0, 3.0));
    }

    #[test]
    fn extents_overlap_in_any_dimension() {
        let unit2 = (&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0));
        assert!(extents_overlap(unit2, (&Point2::new(1.0, 0.5), &Point2::new(2.0, 2.0))));
        assert!(!extents_overlap(unit2, (&Point2::new(0.5, 1.5), &Point2::new(2.0, 2.0))));

        let unit3 = (&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 1.0));
        let above = (&Point3::new(0.5, 0.5, 1.1), &Point3::new(2.0, 2.0, 2.0));
        assert!(!extents_overlap(unit3, above));
    }
}
