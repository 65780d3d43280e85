//! The stacking cone: configuration, seeding, and one-disk-at-a-time growth.
//!
//! A [`Cone`] owns every disk ever placed, the current frontier, the pool of
//! candidate positions still in play, and the per-iteration parastichy
//! counts. [`Cone::step`] places exactly one disk: the lowest candidate that
//! overlaps nothing, folded into the fundamental domain.

use crate::candidates::{angular_slots, generate_candidates, lowest_candidate};
use crate::disk::{Disk, DiskId, ParentRef, Parents};
use crate::errors::ConeError;
use crate::float_types::Real;
use crate::front::Front;
use crate::geometry::Side;
use crate::overlap::{DefaultOverlapOps, OverlapOps};
use crate::parastichy::{ParastichyCounts, ParastichyHistory};
use crate::registry::DiskRegistry;
use crate::sector::Sector;
use nalgebra::Point2;
use tracing::{debug, trace, warn};

/// Which placed disks a candidate is checked against for overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapScan {
    /// The disks placed in the last `2 × frontier length` iterations.
    /// Older disks are buried too deep to reach a new tangent position.
    #[default]
    Recent,
    /// Every disk ever placed.
    All,
}

/// Parameters of one cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeConfig {
    /// Where renderers should draw the vertex. Disk positions are always
    /// relative to the vertex and do not depend on this.
    pub vertex: Point2<Real>,
    /// Full angular width of the unrolled sector, in degrees.
    pub angle: Real,
    /// Radius shared by every disk.
    pub disk_radius: Real,
    /// Seed height in `[0, 1]`: 0 places the seed touching its own rotated
    /// copy, 1 one disk diameter higher.
    pub height: Real,
    pub overlap_scan: OverlapScan,
}

impl Default for ConeConfig {
    fn default() -> Self {
        ConeConfig {
            vertex: Point2::origin(),
            angle: 50.0,
            disk_radius: 0.1,
            height: 0.9,
            overlap_scan: OverlapScan::Recent,
        }
    }
}

impl ConeConfig {
    pub fn new(angle: Real, disk_radius: Real, height: Real) -> Self {
        ConeConfig {
            angle,
            disk_radius,
            height,
            ..Self::default()
        }
    }

    pub const fn with_vertex(mut self, vertex: Point2<Real>) -> Self {
        self.vertex = vertex;
        self
    }

    pub const fn with_angle(mut self, angle: Real) -> Self {
        self.angle = angle;
        self
    }

    pub const fn with_disk_radius(mut self, disk_radius: Real) -> Self {
        self.disk_radius = disk_radius;
        self
    }

    pub const fn with_height(mut self, height: Real) -> Self {
        self.height = height;
        self
    }

    pub const fn with_overlap_scan(mut self, overlap_scan: OverlapScan) -> Self {
        self.overlap_scan = overlap_scan;
        self
    }

    /// Check every precondition, returning the sector on success.
    pub fn validate(&self) -> Result<Sector, ConeError> {
        if !(self.vertex.x.is_finite() && self.vertex.y.is_finite()) {
            return Err(ConeError::InvalidVertex);
        }
        if !self.disk_radius.is_finite() || self.disk_radius <= 0.0 {
            return Err(ConeError::InvalidRadius(self.disk_radius));
        }
        if !(0.0..=1.0).contains(&self.height) {
            return Err(ConeError::InvalidHeight(self.height));
        }
        let sector = Sector::new(self.angle)?;
        if self.angle >= 180.0 {
            warn!(
                angle = self.angle,
                "sector angles of 180 degrees or more are outside the reliable range"
            );
        }
        Ok(sector)
    }
}

/// A cone being stacked with disks.
#[derive(Debug, Clone)]
pub struct Cone {
    config: ConeConfig,
    sector: Sector,
    registry: DiskRegistry,
    front: Front,
    /// Index into `front` of the most recently placed disk.
    newest_front_index: usize,
    candidates: Vec<Disk>,
    extra_disks: Vec<Disk>,
    history: ParastichyHistory,
}

impl Cone {
    /// Build a cone from `config` and place the seed disk.
    pub fn new(config: ConeConfig) -> Result<Self, ConeError> {
        let sector = config.validate()?;
        let seed = seed_disk(&sector, config.disk_radius, config.height).with_id(DiskId(0));

        let mut registry = DiskRegistry::new();
        registry.push(seed.clone());

        let mut cone = Cone {
            config,
            sector,
            registry,
            front: Front::seeded(seed),
            newest_front_index: 0,
            candidates: Vec::new(),
            extra_disks: Vec::new(),
            history: ParastichyHistory::new(),
        };
        cone.update_extra_disks();
        cone.history.record(ParastichyCounts::of(&cone.front, &cone.sector));
        debug!(
            angle = config.angle,
            radius = config.disk_radius,
            height = config.height,
            "seeded cone"
        );
        Ok(cone)
    }

    /// Shorthand for [`Cone::new`] with the default overlap scan.
    pub fn initialize(
        vertex: Point2<Real>,
        angle: Real,
        disk_radius: Real,
        height: Real,
    ) -> Result<Self, ConeError> {
        Self::new(ConeConfig::new(angle, disk_radius, height).with_vertex(vertex))
    }

    /// Start over with a new angle and seed height, keeping radius and vertex.
    ///
    /// On error the cone is left untouched.
    pub fn reset(&mut self, angle: Real, height: Real) -> Result<(), ConeError> {
        let config = self.config.with_angle(angle).with_height(height);
        *self = Self::new(config)?;
        Ok(())
    }

    /// Place the next disk.
    ///
    /// On error nothing is committed: disks, frontier, candidate pool and
    /// history are exactly as before the call.
    pub fn step(&mut self) -> Result<(), ConeError> {
        let iteration = self.registry.len();
        let Some(newest) = self.registry.last() else {
            return Err(ConeError::NoCandidate { iteration });
        };

        let window = self.front.window(self.newest_front_index, &self.sector);
        let mut pool = self.candidates.clone();
        pool.extend(generate_candidates(&window, newest));
        trace!(iteration, window = window.len(), pool = pool.len(), "generated candidates");

        let pool = DefaultOverlapOps::default().retain_clear(pool, self.overlap_scope(), &self.sector);
        let mut pool: Vec<Disk> = pool
            .iter()
            .map(|candidate| self.sector.canonical(candidate))
            .collect();

        let winner = lowest_candidate(&pool).ok_or(ConeError::NoCandidate { iteration })?;
        let child = pool.remove(winner).with_id(self.registry.next_id());

        let parents = self.find_parents(&child)?;
        let child = child.with_parents(parents);

        let mut front = self.front.clone();
        front.splice_between(parents.left.id, parents.right.id)?;
        let index = front.insert_child(parents.left.id, parents.right.id, child.clone())?;

        let id = self.registry.push(child);
        self.front = front;
        self.newest_front_index = index;
        self.candidates = pool;
        self.update_extra_disks();

        let counts = ParastichyCounts::of(&self.front, &self.sector);
        self.history.record(counts);
        debug!(
            id = id.index(),
            left = parents.left.id.index(),
            right = parents.right.id.index(),
            front = self.front.len(),
            up = counts.up,
            down = counts.down,
            "placed disk"
        );
        Ok(())
    }

    /// Place `steps` disks, stopping at the first error.
    pub fn run(&mut self, steps: usize) -> Result<(), ConeError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    /// The placed disks the overlap filter has to consider.
    fn overlap_scope(&self) -> &[Disk] {
        match self.config.overlap_scan {
            OverlapScan::Recent => self.registry.recent(self.front.len() * 2),
            OverlapScan::All => self.registry.as_slice(),
        }
    }

    /// The frontier disks that actually end up adjacent to `child`: among
    /// those touching it on each side, the one angularly farthest away.
    ///
    /// These can differ from the pair that generated the candidate.
    fn find_parents(&self, child: &Disk) -> Result<Parents, ConeError> {
        let left = self.farthest_touching(child, Side::Left)?;
        let right = self.farthest_touching(child, Side::Right)?;
        Ok(Parents { left, right })
    }

    fn farthest_touching(&self, child: &Disk, side: Side) -> Result<ParentRef, ConeError> {
        let child_id = child.id().unwrap_or_else(|| self.registry.next_id());
        let mut farthest: Option<(Disk, Real)> = None;

        for disk in self.front.iter() {
            let Some(touching) = self.sector.touching_on(child, disk, side) else {
                continue;
            };
            let slots = angular_slots(child, &touching);
            match &farthest {
                Some((_, best)) if slots <= *best => {},
                _ => farthest = Some((touching, slots)),
            }
        }

        farthest
            .and_then(|(disk, _)| disk.as_parent())
            .ok_or(ConeError::NoTouchingParent { child: child_id, side })
    }

    /// Record rotated copies of the disks at both ends of the frontier, once per id.
    fn update_extra_disks(&mut self) {
        let len = self.front.len();
        let ends = [Some(0), Some(1), len.checked_sub(2), len.checked_sub(1)];
        for index in ends.into_iter().flatten() {
            let Some(disk) = self.front.get(index) else {
                continue;
            };
            let Some(id) = disk.id() else {
                continue;
            };
            if !self.extra_disks.iter().any(|extra| extra.has_id(id)) {
                self.extra_disks.push(self.sector.rotated(disk));
            }
        }
    }

    pub const fn config(&self) -> &ConeConfig {
        &self.config
    }

    pub const fn sector(&self) -> &Sector {
        &self.sector
    }

    pub const fn vertex(&self) -> Point2<Real> {
        self.config.vertex
    }

    pub const fn angle(&self) -> Real {
        self.config.angle
    }

    pub const fn disk_radius(&self) -> Real {
        self.config.disk_radius
    }

    /// Number of completed steps.
    pub fn iteration(&self) -> usize {
        self.registry.len() - 1
    }

    /// Every disk placed so far, in creation order.
    pub fn disks(&self) -> &[Disk] {
        self.registry.as_slice()
    }

    pub const fn registry(&self) -> &DiskRegistry {
        &self.registry
    }

    pub const fn front(&self) -> &Front {
        &self.front
    }

    /// Candidate positions that survived earlier steps without being chosen.
    pub fn candidates(&self) -> &[Disk] {
        &self.candidates
    }

    /// Rotated copies of disks near the seam, for drawing.
    pub fn extra_disks(&self) -> &[Disk] {
        &self.extra_disks
    }

    pub const fn history(&self) -> &ParastichyHistory {
        &self.history
    }

    pub fn up_counts(&self) -> &[usize] {
        self.history.up_counts()
    }

    pub fn down_counts(&self) -> &[usize] {
        self.history.down_counts()
    }
}

/// The first disk: on the left edge of the sector, `height` of the way
/// between touching its own rotated copy and sitting one diameter higher.
fn seed_disk(sector: &Sector, radius: Real, height: Real) -> Disk {
    let half_angle = (sector.angle() / 2.0).to_radians();
    let distance = (1.0 + height) * radius / half_angle.sin();
    Disk::new(Point2::from(sector.left_edge() * distance), radius)
}
