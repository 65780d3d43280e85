//! The frontier: the exposed lower boundary of the packing.
//!
//! Disks are kept left to right (counter-clockwise to clockwise, seen from
//! the vertex). The sequence is a ring on the cone: its last disk neighbours
//! the right-rotated copy of its first.

use crate::candidates::{bridge_limit, slot_distance};
use crate::disk::{Disk, DiskId};
use crate::errors::ConeError;
use crate::geometry;
use crate::sector::Sector;

/// Ordered frontier disks, stored by value.
///
/// Members may be rotated copies of the disks in the registry; they are
/// matched by [`DiskId`], never by position.
#[derive(Debug, Clone)]
pub struct Front {
    disks: Vec<Disk>,
}

impl Front {
    /// A frontier holding only `seed`.
    pub fn seeded(seed: Disk) -> Self {
        Front { disks: vec![seed] }
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Always false for a frontier built by [`Front::seeded`].
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Disk> {
        self.disks.get(index)
    }

    pub fn first(&self) -> Option<&Disk> {
        self.disks.first()
    }

    pub fn last(&self) -> Option<&Disk> {
        self.disks.last()
    }

    pub fn as_slice(&self) -> &[Disk] {
        &self.disks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Disk> {
        self.disks.iter()
    }

    /// Index of the first member carrying `id`.
    pub fn position_of(&self, id: DiskId) -> Option<usize> {
        self.disks.iter().position(|disk| disk.has_id(id))
    }

    fn require(&self, id: DiskId) -> Result<usize, ConeError> {
        self.position_of(id).ok_or(ConeError::ParentNotFound { id })
    }

    /// The stretch of frontier around the member at `anchor`, extended past
    /// either end with rotated copies from the far end.
    ///
    /// Each side stops at the first disk whose [`slot_distance`] from the
    /// anchor exceeds one disk (see [`bridge_limit`]), or once every member has been visited on that
    /// side. The anchor itself is included.
    pub fn window(&self, anchor: usize, sector: &Sector) -> Vec<Disk> {
        let count = self.disks.len();
        let Some(anchor_disk) = self.disks.get(anchor) else {
            return Vec::new();
        };
        let limit = bridge_limit(anchor_disk.radius());
        let within_reach = |disk: &Disk| slot_distance(anchor_disk, disk) <= limit;

        // walk left: anchor, anchor-1, ..., 0, then rotated copies of the tail
        let mut window: Vec<Disk> = (0..=anchor + count)
            .map(|step| {
                if step <= anchor {
                    self.disks[anchor - step].clone()
                } else {
                    sector.rotate_left(&self.disks[count + anchor - step])
                }
            })
            .take_while(within_reach)
            .collect();
        window.reverse();

        // walk right: anchor+1, ..., count-1, then rotated copies of the head
        let right = (anchor + 1..2 * count)
            .map(|index| {
                if index < count {
                    self.disks[index].clone()
                } else {
                    sector.rotate_right(&self.disks[index - count])
                }
            })
            .take_while(within_reach);
        window.extend(right);

        window
    }

    /// Remove every member strictly between the parents, leaving one gap.
    ///
    /// * same parent on both sides: only that parent survives
    /// * left before right: the open interval between them goes
    /// * left after right (the gap wraps the seam): only the closed interval
    ///   from right to left survives
    pub fn splice_between(&mut self, left: DiskId, right: DiskId) -> Result<(), ConeError> {
        let left_index = self.require(left)?;
        let right_index = self.require(right)?;

        if left == right {
            let parent = self.disks.swap_remove(left_index);
            self.disks = vec![parent];
        } else if left_index < right_index {
            self.disks.drain(left_index + 1..right_index);
        } else {
            self.disks.truncate(left_index + 1);
            self.disks.drain(..right_index);
        }
        Ok(())
    }

    /// Insert `child` into the gap left by [`Front::splice_between`].
    ///
    /// Returns the index the child now occupies.
    pub fn insert_child(
        &mut self,
        left: DiskId,
        right: DiskId,
        child: Disk,
    ) -> Result<usize, ConeError> {
        let left_index = self.require(left)?;
        let right_index = self.require(right)?;

        let index = if left == right {
            // lone parent: go to whichever side of it the child is on
            let parent = &self.disks[left_index];
            let turn = geometry::angle_between(
                &geometry::vector_vertex_to(&parent.pos()),
                &geometry::vector_vertex_to(&child.pos()),
            );
            if turn < 0.0 { left_index + 1 } else { left_index }
        } else if right_index == left_index + 1 {
            right_index
        } else {
            // parents are the two ends of the sequence: join the nearer one
            let to_left = child.distance_to(&self.disks[left_index]);
            let to_right = child.distance_to(&self.disks[right_index]);
            if to_left < to_right { left_index + 1 } else { right_index }
        };

        self.disks.insert(index, child);
        Ok(index)
    }
}
