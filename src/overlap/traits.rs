//! Traits for candidate overlap filtering.

use crate::disk::Disk;
use crate::sector::Sector;

/// Trait for dropping candidates that collide with placed disks.
pub trait OverlapOps {
    /// Whether `candidate` overlaps any disk in `placed`, on the cone.
    fn overlaps_any(&self, candidate: &Disk, placed: &[Disk], sector: &Sector) -> bool {
        placed.iter().any(|disk| sector.is_overlap(disk, candidate))
    }

    /// Keeps the candidates that overlap nothing in `placed`, in their original order.
    fn retain_clear(&self, candidates: Vec<Disk>, placed: &[Disk], sector: &Sector) -> Vec<Disk>;
}
