//! Append-only record of every disk ever placed on a cone.

use crate::disk::{Disk, DiskId};

/// Hands out [`DiskId`]s in creation order and keeps the promoted disks.
///
/// The id of a disk is always its index in [`DiskRegistry::as_slice`].
#[derive(Debug, Clone, Default)]
pub struct DiskRegistry {
    disks: Vec<Disk>,
}

impl DiskRegistry {
    pub const fn new() -> Self {
        DiskRegistry { disks: Vec::new() }
    }

    /// The id the next promoted disk will receive.
    pub fn next_id(&self) -> DiskId {
        DiskId(self.disks.len())
    }

    /// Append a disk that was stamped with [`DiskRegistry::next_id`].
    ///
    /// # Panics
    /// If the disk carries any other id. That would break the
    /// id == creation index invariant the frontier relies on.
    pub(crate) fn push(&mut self, disk: Disk) -> DiskId {
        let id = self.next_id();
        assert_eq!(
            disk.id(),
            Some(id),
            "disk promoted out of order: expected id {id}"
        );
        self.disks.push(disk);
        id
    }

    pub fn get(&self, id: DiskId) -> Option<&Disk> {
        self.disks.get(id.index())
    }

    pub fn last(&self) -> Option<&Disk> {
        self.disks.last()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn as_slice(&self) -> &[Disk] {
        &self.disks
    }

    /// The `count` most recently placed disks, oldest first.
    pub fn recent(&self, count: usize) -> &[Disk] {
        let start = self.disks.len().saturating_sub(count);
        &self.disks[start..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Disk> {
        self.disks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::Real;
    use nalgebra::Point2;

    fn stamped(registry: &DiskRegistry, y: Real) -> Disk {
        Disk::new(Point2::new(0.0, y), 0.1).with_id(registry.next_id())
    }

    #[test]
    fn ids_follow_creation_order() {
        let mut registry = DiskRegistry::new();
        for step in 0..5 {
            let disk = stamped(&registry, 1.0 + step as Real);
            assert_eq!(registry.push(disk), DiskId(step));
        }
        for (index, disk) in registry.iter().enumerate() {
            assert_eq!(disk.id(), Some(DiskId(index)));
        }
        assert_eq!(registry.next_id(), DiskId(5));
    }

    #[test]
    fn recent_window_is_clamped() {
        let mut registry = DiskRegistry::new();
        for step in 0..3 {
            let disk = stamped(&registry, step as Real);
            registry.push(disk);
        }
        assert_eq!(registry.recent(2).len(), 2);
        assert_eq!(registry.recent(2)[0].id(), Some(DiskId(1)));
        assert_eq!(registry.recent(10).len(), 3);
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn rejects_foreign_ids() {
        let mut registry = DiskRegistry::new();
        registry.push(Disk::new(Point2::new(0.0, 1.0), 0.1).with_id(DiskId(3)));
    }
}
