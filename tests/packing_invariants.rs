mod support;

use conestack::{Cone, ConeConfig};

use crate::support::{grown_cone, off_cone, overlapping_pairs};

fn assert_sound(cone: &Cone) {
    let pairs = overlapping_pairs(cone);
    assert!(pairs.is_empty(), "overlapping disks: {pairs:?}");
    let outside = off_cone(cone);
    assert!(outside.is_empty(), "disks off the cone: {outside:?}");
}

#[test]
fn narrow_cone_packs_without_overlap() {
    assert_sound(&grown_cone(85.0, 0.05, 0.9, 600));
}

#[test]
fn wide_cone_packs_without_overlap() {
    assert_sound(&grown_cone(130.0, 0.05, 0.7, 600));
}

#[test]
fn low_seed_packs_without_overlap() {
    assert_sound(&grown_cone(90.0, 0.1, 0.0, 200));
}

#[test]
fn full_height_seed_grows_at_any_angle() {
    for angle in [40.0, 80.0, 85.0, 140.0] {
        let mut cone = Cone::new(ConeConfig::new(angle, 0.05, 1.0)).unwrap();
        cone.step().unwrap_or_else(|err| panic!("first step at {angle} degrees: {err}"));
        assert_eq!(cone.front().len(), 2);
        cone.run(199).unwrap_or_else(|err| panic!("{angle} degrees: {err}"));
        assert_sound(&cone);
    }
}

#[test]
fn pending_candidates_stay_on_the_cone() {
    let mut cone = Cone::new(ConeConfig::new(85.0, 0.1, 0.9)).unwrap();
    for _ in 0..100 {
        cone.step().unwrap();
        for candidate in cone.candidates() {
            assert!(!cone.sector().is_off_cone(candidate));
            assert_eq!(candidate.id(), None);
        }
    }
}

#[test]
fn canonical_positions_are_fixed_points() {
    let cone = grown_cone(85.0, 0.1, 0.9, 100);
    for disk in cone.disks() {
        let folded = cone.sector().canonical(disk);
        assert!(folded.coincides_with(disk, 0.0));
    }
}

#[test]
fn ghosts_are_rotated_copies() {
    let cone = grown_cone(85.0, 0.1, 0.9, 60);
    assert!(!cone.extra_disks().is_empty());
    for ghost in cone.extra_disks() {
        let placed = cone.registry().get(ghost.id().unwrap()).unwrap();
        let left = cone.sector().rotate_left(placed);
        let right = cone.sector().rotate_right(placed);
        assert!(ghost.coincides_with(&left, 1e-9) || ghost.coincides_with(&right, 1e-9));
    }
}
