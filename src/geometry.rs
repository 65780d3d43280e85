//! Vector and angle primitives on the unrolled cone.
//!
//! Every position lives in the sector's own planar frame, with the cone
//! vertex at the origin and the sector opening along `+y`. Angles handed to
//! [`rotate_about_vertex`] are in degrees; [`angle_between`] returns radians.

use crate::float_types::Real;
use nalgebra::{Point2, Rotation2, Vector2};

/// Which side of a disk, as seen from the cone vertex looking outward.
///
/// `Left` is counter-clockwise, `Right` is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Euclidean distance between two points. Does not account for rotation.
#[inline]
pub fn distance(p: &Point2<Real>, q: &Point2<Real>) -> Real {
    nalgebra::distance(p, q)
}

/// Distance from the cone vertex.
#[inline]
pub fn distance_to_vertex(p: &Point2<Real>) -> Real {
    p.coords.norm()
}

/// The vector pointing from the cone vertex to `p`.
#[inline]
pub fn vector_vertex_to(p: &Point2<Real>) -> Vector2<Real> {
    p.coords
}

/// Counter-clockwise rotation about the vertex by `degrees`.
pub fn rotation(degrees: Real) -> Rotation2<Real> {
    Rotation2::new(degrees.to_radians())
}

/// Rotate `p` counter-clockwise about the vertex by `degrees`.
pub fn rotate_about_vertex(p: &Point2<Real>, degrees: Real) -> Point2<Real> {
    rotation(degrees) * *p
}

/// Signed angle, in radians, that takes `v1` onto `v2`.
///
/// Positive when the rotation from `v1` to `v2` is counter-clockwise. Exactly
/// opposed vectors report `+π`.
///
/// # Panics
/// In debug builds, if either vector has zero length.
pub fn angle_between(v1: &Vector2<Real>, v2: &Vector2<Real>) -> Real {
    debug_assert!(
        v1.norm_squared() > 0.0 && v2.norm_squared() > 0.0,
        "angle_between called with a zero-length vector"
    );
    let unsigned = v1.angle(v2);
    if v1.perp(v2) < 0.0 { -unsigned } else { unsigned }
}

/// Which side of `anchor` the point `other` lies on, seen from the vertex.
///
/// Returns `None` when both lie on the same ray.
pub fn side_of(anchor: &Point2<Real>, other: &Point2<Real>) -> Option<Side> {
    let angle = angle_between(&vector_vertex_to(anchor), &vector_vertex_to(other));
    if angle > 0.0 {
        Some(Side::Left)
    } else if angle < 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{FRAC_PI_2, PI};

    fn close(a: Real, b: Real) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn angle_sign_follows_counter_clockwise() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(close(angle_between(&x, &y), FRAC_PI_2));
        assert!(close(angle_between(&y, &x), -FRAC_PI_2));
    }

    #[test]
    fn opposed_vectors_report_positive_pi() {
        let v = Vector2::new(-2.0, 0.0);
        let x = Vector2::new(1.0, 0.0);
        assert!(close(angle_between(&v, &x), PI));
        assert!(close(angle_between(&x, &v), PI));
    }

    #[test]
    fn rotation_preserves_vertex_distance() {
        let p = Point2::new(0.3, 0.4);
        let q = rotate_about_vertex(&p, 73.0);
        assert!(close(distance_to_vertex(&q), 0.5));
        let back = rotate_about_vertex(&q, -73.0);
        assert!(distance(&p, &back) < 1e-6);
    }

    #[test]
    fn quarter_turn_moves_x_onto_y() {
        let q = rotate_about_vertex(&Point2::new(1.0, 0.0), 90.0);
        assert!(close(q.x, 0.0));
        assert!(close(q.y, 1.0));
    }

    #[test]
    fn side_is_measured_from_the_vertex() {
        let anchor = Point2::new(0.0, 1.0);
        assert_eq!(side_of(&anchor, &Point2::new(-0.5, 1.0)), Some(Side::Left));
        assert_eq!(side_of(&anchor, &Point2::new(0.5, 1.0)), Some(Side::Right));
        assert_eq!(side_of(&anchor, &Point2::new(0.0, 3.0)), None);
    }
}
