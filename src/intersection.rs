use crate::primitive::hit::{Hit2, Hit3};
use crate::primitive::ray::{Ray2, Ray3};
use crate::primitive::segment::Segment2;
use crate::primitive::triangle::Triangle;
use crate::tolerance::DETERMINANT_EPSILON;
use nalgebra::{Point2, Vector2};

/// Computes the intersection parameters of two parametric lines in 2D space.
///
/// # Arguments
///
/// * `pt1` - A point on the first line.
/// * `dir1` - The direction vector of the first line.
/// * `pt2` - A point on the second line.
/// * `dir2` - The direction vector of the second line.
///
/// # Returns
///
/// The parameters `[t1, t2]` such that `pt1 + dir1 * t1 == pt2 + dir2 * t2`.
///
/// If the lines are parallel or coincident, `None` is returned. Parallelism is
/// tested on the sine of the angle between the directions, independent of their length.
pub fn parametric_line_intersection(
    pt1: Point2<f32>,
    dir1: Vector2<f32>,
    pt2: Point2<f32>,
    dir2: Vector2<f32>,
) -> Option<[f32; 2]> {
    let det = dir1.perp(&dir2);

    if det.abs() <= DETERMINANT_EPSILON * dir1.norm() * dir2.norm() {
        log::trace!("parallel or coincident lines (det {det})");
        return None;
    }

    let delta = pt2 - pt1;
    let t1 = delta.perp(&dir2) / det;
    let t2 = delta.perp(&dir1) / det;

    Some([t1, t2])
}

/// Intersects segment `p0 -> p1` with segment `p2 -> p3`.
///
/// Returns the crossing point when it lies on both segments (endpoints included).
/// Parallel segments return `None`; so do collinear ones, even if they overlap.
pub fn line_intersect(
    p0: Point2<f32>,
    p1: Point2<f32>,
    p2: Point2<f32>,
    p3: Point2<f32>,
) -> Option<Point2<f32>> {
    let dir1 = p1 - p0;
    let [t1, t2] = parametric_line_intersection(p0, dir1, p2, p3 - p2)?;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Some(p0 + dir1 * t1)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaySegmentIntersection {
    /// The ray crosses the segment: `[t_ray, t_segment]`.
    Intersection([f32; 2]),
    /// The ray is parallel to the segment.
    Parallel,
    /// The ray does not reach the segment.
    NoIntersection,
}

impl RaySegmentIntersection {
    /// Returns the intersection parameters if the ray crosses the segment.
    pub fn intersection(&self) -> Option<[f32; 2]> {
        match self {
            RaySegmentIntersection::Intersection(t) => Some(*t),
            _ => None,
        }
    }
}

/// Computes where a ray crosses a segment.
///
/// Only the forward half of the ray (`t_ray >= 0`) is considered, and the crossing
/// must lie within the segment bounds.
pub fn ray_segment_intersection(ray: &Ray2, segment: &Segment2) -> RaySegmentIntersection {
    match parametric_line_intersection(ray.origin, ray.dir, segment.a, segment.dir()) {
        None => RaySegmentIntersection::Parallel,
        Some([t_ray, t_segment]) => {
            if t_ray >= 0.0 && (0.0..=1.0).contains(&t_segment) {
                RaySegmentIntersection::Intersection([t_ray, t_segment])
            } else {
                RaySegmentIntersection::NoIntersection
            }
        }
    }
}

/// Nearest crossing of a ray with the boundary of a convex polygon.
///
/// `edges` is the closed outline and `interior` any point strictly inside it; the
/// reported normal is the unit normal of the crossed edge facing away from `interior`.
/// Crossings with `t` beyond `max` are ignored.
pub fn ray_boundary_hit(
    ray: &Ray2,
    edges: &[Segment2],
    interior: Point2<f32>,
    max: f32,
) -> Option<Hit2> {
    edges
        .iter()
        .filter_map(|edge| {
            let [t, _] = ray_segment_intersection(ray, edge).intersection()?;
            (t <= max).then(|| Hit2::new(t, outward_normal(edge, interior)))
        })
        .min_by(|x, y| x.t.total_cmp(&y.t))
}

fn outward_normal(edge: &Segment2, interior: Point2<f32>) -> Vector2<f32> {
    let d = edge.dir();
    let n = Vector2::new(d.y, -d.x).normalize();

    if n.dot(&(interior - edge.a)) > 0.0 {
        -n
    } else {
        n
    }
}

/// Finds the nearest triangle hit along `ray`.
///
/// The best `t` found so far is fed back into [`Triangle::hit_fast`], so farther
/// triangles are rejected as soon as their ray parameter is known.
///
/// # Returns
///
/// The index of the nearest triangle in `triangles` and its hit, or `None` on a miss.
pub fn closest_triangle_hit(triangles: &[Triangle], ray: &Ray3) -> Option<(usize, Hit3)> {
    let mut closest: Option<(usize, Hit3)> = None;

    for (index, triangle) in triangles.iter().enumerate() {
        let bound = closest.map_or(f32::INFINITY, |(_, hit)| hit.t);
        if let Some(hit) = triangle.hit_fast(ray, bound) {
            closest = Some((index, hit));
        }
    }

    closest
}
