//! Struct and functions for working with the `Disk`s stacked on a cone.

use crate::float_types::Real;
use crate::geometry;
use nalgebra::Point2;
use std::fmt::Display;

/// Stable identity of a placed disk.
///
/// Equal to the disk's creation index, and shared by every rotated copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiskId(pub usize);

impl DiskId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for DiskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One parent of a placed disk, in the rotated position where it touches its child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentRef {
    pub id: DiskId,
    pub pos: Point2<Real>,
}

/// The two frontier disks a child was placed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parents {
    pub left: ParentRef,
    pub right: ParentRef,
}

/// A circle of fixed radius on the unrolled cone.
///
/// Position and radius never change once the disk exists; rotated copies
/// are new values that keep the original's id. A candidate disk has neither
/// id nor parents until it is promoted onto the frontier.
#[derive(Debug, Clone)]
pub struct Disk {
    pos: Point2<Real>,
    radius: Real,
    id: Option<DiskId>,
    parents: Option<Parents>,
}

impl Disk {
    /// Create a new candidate [`Disk`] centred at `pos`.
    pub const fn new(pos: Point2<Real>, radius: Real) -> Self {
        Disk {
            pos,
            radius,
            id: None,
            parents: None,
        }
    }

    pub const fn pos(&self) -> Point2<Real> {
        self.pos
    }

    pub fn x(&self) -> Real {
        self.pos.x
    }

    pub fn y(&self) -> Real {
        self.pos.y
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub const fn id(&self) -> Option<DiskId> {
        self.id
    }

    pub const fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    /// Whether this disk carries `id`. Candidates never match.
    pub fn has_id(&self, id: DiskId) -> bool {
        self.id == Some(id)
    }

    /// The same disk moved to `pos`: identity and parents are kept.
    pub(crate) fn relocated(&self, pos: Point2<Real>) -> Self {
        Disk {
            pos,
            radius: self.radius,
            id: self.id,
            parents: self.parents,
        }
    }

    pub(crate) fn with_id(mut self, id: DiskId) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn with_parents(mut self, parents: Parents) -> Self {
        self.parents = Some(parents);
        self
    }

    /// A reference to this disk, in its current position, for use as a parent.
    ///
    /// Returns `None` for a candidate.
    pub fn as_parent(&self) -> Option<ParentRef> {
        self.id.map(|id| ParentRef { id, pos: self.pos })
    }

    /// Centre-to-centre distance. Does not account for rotation.
    pub fn distance_to(&self, other: &Disk) -> Real {
        geometry::distance(&self.pos, &other.pos)
    }

    pub fn distance_to_vertex(&self) -> Real {
        geometry::distance_to_vertex(&self.pos)
    }

    /// Geometric equality: same centre (within `eps`) and same radius.
    ///
    /// This says nothing about identity; compare [`Disk::id`] for that.
    pub fn coincides_with(&self, other: &Disk, eps: Real) -> bool {
        self.distance_to(other) <= eps && (self.radius - other.radius).abs() <= eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_have_no_identity() {
        let disk = Disk::new(Point2::new(0.0, 1.0), 0.1);
        assert_eq!(disk.id(), None);
        assert!(disk.parents().is_none());
        assert!(disk.as_parent().is_none());
        assert!(!disk.has_id(DiskId(0)));
    }

    #[test]
    fn relocation_keeps_identity() {
        let disk = Disk::new(Point2::new(0.0, 1.0), 0.1).with_id(DiskId(7));
        let moved = disk.relocated(Point2::new(1.0, 0.0));
        assert_eq!(moved.id(), Some(DiskId(7)));
        assert_eq!(moved.radius(), 0.1);
        assert!(!moved.coincides_with(&disk, 1e-6));
    }

    #[test]
    fn geometric_equality_ignores_identity() {
        let a = Disk::new(Point2::new(0.2, 0.3), 0.1).with_id(DiskId(1));
        let b = Disk::new(Point2::new(0.2, 0.3), 0.1).with_id(DiskId(2));
        assert!(a.coincides_with(&b, 1e-9));
        assert_ne!(a.id(), b.id());
    }
}
