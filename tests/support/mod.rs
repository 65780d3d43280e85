//! Test support library
//! Provides various helper functions & utilities for tests.

use conestack::{
    Cone, ConeConfig, DiskId, ParastichyCounts,
    float_types::{Real, tolerance},
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// A cone grown for `steps` iterations. Panics if the packing stalls.
pub fn grown_cone(angle: Real, radius: Real, height: Real, steps: usize) -> Cone {
    let mut cone = Cone::new(ConeConfig::new(angle, radius, height)).expect("valid parameters");
    cone.run(steps).expect("packing stalled");
    cone
}

/// Every pair of placed disks whose nearest copies overlap.
pub fn overlapping_pairs(cone: &Cone) -> Vec<(DiskId, DiskId)> {
    let sector = cone.sector();
    let disks = cone.disks();
    let mut pairs = Vec::new();
    for (i, a) in disks.iter().enumerate() {
        for b in &disks[i + 1..] {
            if sector.min_distance(a, b) < a.radius() + b.radius() - tolerance() {
                pairs.push((a.id().expect("placed"), b.id().expect("placed")));
            }
        }
    }
    pairs
}

/// Ids of placed disks whose centre lies outside the fundamental domain.
pub fn off_cone(cone: &Cone) -> Vec<DiskId> {
    cone.disks()
        .iter()
        .filter(|disk| cone.sector().is_off_cone(disk))
        .filter_map(|disk| disk.id())
        .collect()
}

/// `(smaller, larger)` of the up and down counts; chirality is not asserted.
pub fn unordered(counts: ParastichyCounts) -> (usize, usize) {
    (counts.up.min(counts.down), counts.up.max(counts.down))
}
