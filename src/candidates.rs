//! Child-disk candidates and the slot metrics that bound the frontier window.
//!
//! All functions here work on disks as placed; none of them accounts for
//! the rotational identification of the sector. Callers hand in rotated
//! copies where they need to reason across the seam.

use crate::disk::Disk;
use crate::float_types::{Real, tolerance};
use crate::geometry;
use nalgebra::Vector2;

/// The disk tangent to both parents, on the side away from the vertex.
///
/// All disks share one radius `r`, so the child sits at distance `2r` from
/// each parent. Returns `None` when the parents are more than `4r` apart
/// (beyond [`tolerance`]) or coincide, or when the tangent position is not between them as seen from
/// the vertex (see [`is_between_parents`]).
pub fn child_disk(parent1: &Disk, parent2: &Disk) -> Option<Disk> {
    let radius = parent1.radius();
    let distance = parent1.distance_to(parent2);

    if distance > 4.0 * radius + tolerance() || distance < tolerance() {
        return None;
    }

    let p1_to_p2 = parent2.pos() - parent1.pos();
    let normal = Vector2::new(-p1_to_p2.y, p1_to_p2.x) / distance;
    // clamped: at or just past 4r the radicand is zero or slightly negative
    let offset = 0.5 * (16.0 * radius * radius - distance * distance).max(0.0).sqrt();
    let halfway = nalgebra::center(&parent1.pos(), &parent2.pos());

    let location1 = halfway + normal * offset;
    let location2 = halfway - normal * offset;

    let location = if geometry::distance_to_vertex(&location1)
        > geometry::distance_to_vertex(&location2)
    {
        location1
    } else {
        location2
    };

    let child = Disk::new(location, radius);
    is_between_parents(&child, parent1, parent2).then_some(child)
}

/// Opposedness test: whether the child's direction from the vertex lies
/// strictly between the parents' directions.
///
/// Directions are measured against the `+x` axis. When the parents straddle
/// the sign flip of that measure (one just above `-x`, one just below) the
/// "between" arc is the one through `-x`.
pub fn is_between_parents(child: &Disk, parent1: &Disk, parent2: &Disk) -> bool {
    let axis = Vector2::x();
    let direction = |disk: &Disk| {
        geometry::angle_between(&geometry::vector_vertex_to(&disk.pos()), &axis)
    };

    let child_angle = direction(child);
    let parent1_angle = direction(parent1);
    let parent2_angle = direction(parent2);
    let low = parent1_angle.min(parent2_angle);
    let high = parent1_angle.max(parent2_angle);

    if child_angle > low && child_angle < high {
        return true;
    }
    low < 0.0 && high > 0.0 && (child_angle > high || child_angle < low)
}

/// Metric 1: how many disks fit in the angular gap between `disk1` and
/// `disk2`, placing them at `disk1`'s distance from the vertex.
///
/// `-1` means the two are on the same ray.
pub fn angular_slots(disk1: &Disk, disk2: &Disk) -> Real {
    let between = geometry::angle_between(
        &geometry::vector_vertex_to(&disk1.pos()),
        &geometry::vector_vertex_to(&disk2.pos()),
    )
    .abs();
    let ratio = (disk1.radius() / disk1.distance_to_vertex()).min(1.0);
    let adjacent = (2.0 * ratio.asin()).abs();
    between / adjacent - 1.0
}

/// Metric 2: how many disks fit on the straight line between `disk1` and
/// `disk2` as placed. Negative values mean overlap.
pub fn literal_slots(disk1: &Disk, disk2: &Disk) -> Real {
    disk1.distance_to(disk2) / (2.0 * disk1.radius()) - 1.0
}

/// The smaller of [`angular_slots`] and [`literal_slots`].
///
/// Once this exceeds [`bridge_limit`], no single disk can bridge `disk1`
/// and `disk2`.
pub fn slot_distance(disk1: &Disk, disk2: &Disk) -> Real {
    angular_slots(disk1, disk2).min(literal_slots(disk1, disk2))
}

/// One slot, widened by [`tolerance`] expressed in slots of `radius`.
///
/// Parents exactly `4r` apart sit one slot apart up to roundoff.
pub fn bridge_limit(radius: Real) -> Real {
    1.0 + tolerance() / (2.0 * radius)
}

/// Every child `newest` can form with a member of `window`.
///
/// Only the newest disk is paired: children of older pairs were generated
/// when the younger of the two was placed, and are still in the pool if
/// they survived.
pub fn generate_candidates(window: &[Disk], newest: &Disk) -> Vec<Disk> {
    window
        .iter()
        .filter_map(|neighbour| child_disk(newest, neighbour))
        .collect()
}

/// Index of the candidate closest to the vertex; the first one wins ties.
pub fn lowest_candidate(candidates: &[Disk]) -> Option<usize> {
    let mut lowest: Option<(usize, Real)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = candidate.distance_to_vertex();
        match lowest {
            Some((_, best)) if distance >= best => {},
            _ => lowest = Some((index, distance)),
        }
    }
    lowest.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::Sector;
    use nalgebra::Point2;

    fn disk(x: Real, y: Real) -> Disk {
        Disk::new(Point2::new(x, y), 0.1)
    }

    #[test]
    fn child_is_tangent_to_both_parents() {
        let p1 = disk(-0.1, 1.0);
        let p2 = disk(0.1, 1.0);
        let child = child_disk(&p1, &p2).unwrap();
        assert!((child.distance_to(&p1) - 0.2).abs() < 1e-9);
        assert!((child.distance_to(&p2) - 0.2).abs() < 1e-9);
        // the higher of the two tangent positions
        assert!(child.y() > 1.0);
        assert_eq!(child.id(), None);
    }

    #[test]
    fn parent_order_does_not_matter() {
        let p1 = disk(-0.12, 0.9);
        let p2 = disk(0.07, 1.0);
        let a = child_disk(&p1, &p2).unwrap();
        let b = child_disk(&p2, &p1).unwrap();
        assert!(a.coincides_with(&b, 1e-9));
    }

    #[test]
    fn far_parents_have_no_child() {
        assert!(child_disk(&disk(-0.21, 1.0), &disk(0.21, 1.0)).is_none());
    }

    #[test]
    fn coincident_parents_have_no_child() {
        assert!(child_disk(&disk(0.0, 1.0), &disk(0.0, 1.0)).is_none());
    }

    #[test]
    fn tangent_limit_gives_the_midpoint() {
        let p1 = disk(-0.2, 1.0);
        let p2 = disk(0.2, 1.0);
        let child = child_disk(&p1, &p2).unwrap();
        assert!(child.x().is_finite() && child.y().is_finite());
        let midpoint = nalgebra::center(&p1.pos(), &p2.pos());
        assert!((child.pos() - midpoint).norm() < 1e-6);
    }

    #[test]
    fn rotated_copies_at_the_tangent_limit_have_a_child() {
        // a seed at full height sits 4r from its own copy, give or take roundoff
        for angle in [40.0, 80.0, 85.0, 140.0] {
            let sector = Sector::new(angle).unwrap();
            let half_angle: Real = (angle / 2.0).to_radians();
            let seed = Disk::new(Point2::from(sector.left_edge() * (0.1 / half_angle.sin())), 0.05);
            let image = sector.rotate_right(&seed);
            assert!((seed.distance_to(&image) - 0.2).abs() < 1e-9);

            let child = child_disk(&seed, &image).unwrap_or_else(|| panic!("no child at {angle}"));
            assert!((child.distance_to(&seed) - 0.1).abs() < 1e-6);
            assert!((child.distance_to(&image) - 0.1).abs() < 1e-6);
            assert!(slot_distance(&seed, &image) <= bridge_limit(0.05));
        }
    }

    #[test]
    fn radial_parents_fail_the_opposedness_test() {
        // Stacked on one ray: the tangent points are off to the sides.
        assert!(child_disk(&disk(0.0, 1.0), &disk(0.0, 1.3)).is_none());
    }

    #[test]
    fn opposedness_wraps_through_negative_x() {
        let p1 = disk(-1.0, 0.1);
        let p2 = disk(-1.0, -0.1);
        assert!(is_between_parents(&disk(-1.0, 0.0), &p1, &p2));
    }

    #[test]
    fn opposedness_rejects_children_outside_the_parents() {
        let p1 = disk(0.1, 1.0);
        let p2 = disk(0.3, 1.0);
        assert!(is_between_parents(&disk(0.2, 1.2), &p1, &p2));
        assert!(!is_between_parents(&disk(-0.5, 1.0), &p1, &p2));
    }

    #[test]
    fn slot_metrics() {
        let a = disk(0.0, 1.0);
        let b = disk(0.6, 1.0);
        assert!((literal_slots(&a, &b) - 2.0).abs() < 1e-9);
        assert!((angular_slots(&a, &a) + 1.0).abs() < 1e-9);
        assert!(slot_distance(&a, &b) <= literal_slots(&a, &b));
        assert!(slot_distance(&a, &disk(0.2, 1.0)) < 1.0);
    }

    #[test]
    fn lowest_candidate_prefers_the_first_tie() {
        let pool = [disk(0.0, 1.0), disk(0.5, 0.5), disk(-0.5, 0.5), disk(0.0, 0.9)];
        assert_eq!(lowest_candidate(&pool), Some(1));
        assert_eq!(lowest_candidate(&[]), None);
    }

    #[test]
    fn only_the_newest_disk_is_paired() {
        let newest = disk(0.0, 1.0);
        let window = [disk(-0.2, 1.0), newest.clone(), disk(0.2, 1.0), disk(2.0, 1.0)];
        let pool = generate_candidates(&window, &newest);
        assert_eq!(pool.len(), 2);
    }
}
