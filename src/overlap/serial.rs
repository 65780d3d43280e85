//! Serial implementation of overlap filtering.

use super::traits::OverlapOps;
use crate::disk::Disk;
use crate::sector::Sector;

/// Serial implementation of `OverlapOps`.
#[derive(Debug, Clone, Copy)]
pub struct SerialOverlapOps;

impl Default for SerialOverlapOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialOverlapOps {
    pub const fn new() -> Self {
        Self
    }
}

impl OverlapOps for SerialOverlapOps {
    fn retain_clear(&self, mut candidates: Vec<Disk>, placed: &[Disk], sector: &Sector) -> Vec<Disk> {
        candidates.retain(|candidate| !self.overlaps_any(candidate, placed, sector));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::Real;
    use nalgebra::Point2;

    fn disk(x: Real, y: Real) -> Disk {
        Disk::new(Point2::new(x, y), 0.1)
    }

    #[test]
    fn drops_overlapping_and_keeps_order() {
        let sector = Sector::new(90.0).unwrap();
        let placed = [disk(0.0, 1.0)];
        let candidates = vec![disk(0.0, 1.25), disk(0.05, 1.05), disk(0.2, 1.0), disk(0.0, 1.19)];
        let clear = SerialOverlapOps::new().retain_clear(candidates, &placed, &sector);
        assert_eq!(clear.len(), 2);
        assert!(clear[0].coincides_with(&disk(0.0, 1.25), 0.0));
        assert!(clear[1].coincides_with(&disk(0.2, 1.0), 0.0));
    }

    #[test]
    fn nothing_placed_keeps_everything() {
        let sector = Sector::new(90.0).unwrap();
        let candidates = vec![disk(0.0, 1.0), disk(0.0, 1.0)];
        let clear = SerialOverlapOps::new().retain_clear(candidates, &[], &sector);
        assert_eq!(clear.len(), 2);
    }
}
