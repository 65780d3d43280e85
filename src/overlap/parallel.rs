//! Parallel implementation of overlap filtering.

use super::traits::OverlapOps;
use crate::disk::Disk;
use crate::sector::Sector;
use rayon::prelude::*;

/// Parallel implementation of `OverlapOps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelOverlapOps;

impl ParallelOverlapOps {
    pub const fn new() -> Self {
        Self
    }
}

impl OverlapOps for ParallelOverlapOps {
    fn retain_clear(&self, candidates: Vec<Disk>, placed: &[Disk], sector: &Sector) -> Vec<Disk> {
        candidates
            .into_par_iter()
            .filter(|candidate| !self.overlaps_any(candidate, placed, sector))
            .collect()
    }
}
