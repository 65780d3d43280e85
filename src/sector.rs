//! The cone's fundamental domain: an angular sector whose two straight edges
//! are identified by a rotation about the vertex.
//!
//! The sector opens along `+y` and spans `angle` degrees, so its edges are the
//! rays at `90° ± angle/2`. Rotating "left" (counter-clockwise) by `angle`
//! carries the right edge onto the left edge; rotating "right" by
//! `360° − angle` is the inverse modulo a full turn.

use crate::disk::Disk;
use crate::errors::ConeError;
use crate::float_types::{FULL_TURN_DEGREES, Real, tolerance};
use crate::geometry::{self, Side};
use nalgebra::{Rotation2, Vector2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    angle: Real,
    left: Rotation2<Real>,
    right: Rotation2<Real>,
}

impl Sector {
    /// Build a sector spanning `angle` degrees.
    ///
    /// Angles of 180° and above are accepted but the off-cone test and the
    /// single-turn folding assumptions become unreliable there.
    pub fn new(angle: Real) -> Result<Self, ConeError> {
        if !angle.is_finite() || angle <= 0.0 || angle >= FULL_TURN_DEGREES {
            return Err(ConeError::InvalidAngle(angle));
        }
        Ok(Sector {
            angle,
            left: geometry::rotation(angle),
            right: geometry::rotation(FULL_TURN_DEGREES - angle),
        })
    }

    /// Full angular width of the sector, in degrees.
    pub const fn angle(&self) -> Real {
        self.angle
    }

    /// Unit vector along the left edge.
    pub fn left_edge(&self) -> Vector2<Real> {
        let theta = (90.0 - self.angle / 2.0).to_radians();
        Vector2::new(-theta.cos(), theta.sin())
    }

    /// Unit vector along the right edge.
    pub fn right_edge(&self) -> Vector2<Real> {
        let theta = (90.0 - self.angle / 2.0).to_radians();
        Vector2::new(theta.cos(), theta.sin())
    }

    /// The copy of `disk` one period counter-clockwise.
    pub fn rotate_left(&self, disk: &Disk) -> Disk {
        disk.relocated(self.left * disk.pos())
    }

    /// The copy of `disk` one period clockwise.
    pub fn rotate_right(&self, disk: &Disk) -> Disk {
        disk.relocated(self.right * disk.pos())
    }

    /// The copy of `disk` one period toward the other side of the sector:
    /// disks right of the axis rotate left, everything else rotates right.
    pub fn rotated(&self, disk: &Disk) -> Disk {
        if disk.x() > 0.0 {
            self.rotate_left(disk)
        } else {
            self.rotate_right(disk)
        }
    }

    /// The copy of `disk` one period toward `side`.
    pub fn rotate_toward(&self, disk: &Disk, side: Side) -> Disk {
        match side {
            Side::Left => self.rotate_left(disk),
            Side::Right => self.rotate_right(disk),
        }
    }

    /// Whether the centre of `disk` lies outside the fundamental domain.
    ///
    /// Below the vertex is always off. Otherwise the disk is compared to the
    /// edge on its own side of the axis, allowing [`tolerance`] degrees of slack.
    pub fn is_off_cone(&self, disk: &Disk) -> bool {
        if disk.y() < 0.0 {
            return true;
        }

        let vertex_to_disk = geometry::vector_vertex_to(&disk.pos());
        let inside_by = if disk.x() < 0.0 {
            geometry::angle_between(&vertex_to_disk, &self.left_edge())
        } else {
            geometry::angle_between(&self.right_edge(), &vertex_to_disk)
        };

        inside_by.to_degrees() < -tolerance()
    }

    /// Upper bound on the number of folds needed to bring any point on-cone.
    fn max_folds(&self) -> usize {
        (FULL_TURN_DEGREES / self.angle).ceil() as usize + 1
    }

    /// The physically equivalent copy of `disk` inside the fundamental domain.
    ///
    /// Idempotent: a disk that is already on the cone is returned unchanged.
    pub fn canonical(&self, disk: &Disk) -> Disk {
        let mut folded = disk.clone();
        for _ in 0..self.max_folds() {
            if !self.is_off_cone(&folded) {
                return folded;
            }
            folded = self.rotated(&folded);
        }
        if self.is_off_cone(&folded) {
            tracing::warn!(
                angle = self.angle,
                x = folded.x(),
                y = folded.y(),
                "disk did not fold onto the cone"
            );
        }
        folded
    }

    /// Centre distance between `a` and the nearest copy of `b`
    /// (itself, or one period either way).
    pub fn min_distance(&self, a: &Disk, b: &Disk) -> Real {
        let direct = a.distance_to(b);
        let left = a.distance_to(&self.rotate_left(b));
        let right = a.distance_to(&self.rotate_right(b));
        direct.min(left).min(right)
    }

    /// Whether `a` and `b` overlap on the cone, beyond [`tolerance`].
    ///
    /// Symmetric in its arguments.
    pub fn is_overlap(&self, a: &Disk, b: &Disk) -> bool {
        self.min_distance(a, b) < a.radius() + b.radius() - tolerance()
    }

    /// Whether two disks touch or overlap as placed. Does not account for rotation.
    pub fn are_touching(&self, a: &Disk, b: &Disk) -> bool {
        a.distance_to(b) < a.radius() + b.radius() + tolerance()
    }

    /// The copy of `other` that touches `disk` on `side`, if any.
    ///
    /// Tries `other` as placed, then its copy one period toward `side`.
    pub fn touching_on(&self, disk: &Disk, other: &Disk, side: Side) -> Option<Disk> {
        let touches = |candidate: &Disk| {
            geometry::side_of(&disk.pos(), &candidate.pos()) == Some(side)
                && self.are_touching(disk, candidate)
        };

        if touches(other) {
            return Some(other.clone());
        }
        let rotated = self.rotate_toward(other, side);
        touches(&rotated).then_some(rotated)
    }
}
