//! Parastichy counts read off the frontier.
//!
//! Each segment between neighbouring frontier disks runs along one of the two
//! spiral families. A segment is "up" when walking it from its left disk to
//! its right disk moves away from the vertex, "down" otherwise.

use crate::disk::Disk;
use crate::front::Front;
use crate::geometry;
use crate::sector::Sector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentDirection {
    Up,
    Down,
}

/// One frontier segment, with both ends as positioned on the segment.
#[derive(Debug, Clone)]
pub struct Segment {
    pub left: Disk,
    pub right: Disk,
    pub direction: SegmentDirection,
    /// True for the closing segment from the last disk to the rotated first disk.
    pub wraps: bool,
}

/// Whether the segment from `left` to `right` points away from the vertex.
pub fn is_up_segment(left: &Disk, right: &Disk) -> bool {
    let vertex_to_left = geometry::vector_vertex_to(&left.pos());
    let left_to_right = right.pos() - left.pos();
    vertex_to_left.dot(&left_to_right) > 0.0
}

fn segment(left: &Disk, right: &Disk, wraps: bool) -> Segment {
    let direction = if is_up_segment(left, right) {
        SegmentDirection::Up
    } else {
        SegmentDirection::Down
    };
    Segment {
        left: left.clone(),
        right: right.clone(),
        direction,
        wraps,
    }
}

/// Every segment of the frontier, left to right.
///
/// The closing segment, from the last disk to the right-rotated copy of the
/// first, is only included when those two disks touch.
pub fn front_segments(front: &Front, sector: &Sector) -> Vec<Segment> {
    let disks = front.as_slice();
    let mut segments: Vec<Segment> = disks
        .windows(2)
        .map(|pair| segment(&pair[0], &pair[1], false))
        .collect();

    if let (Some(first), Some(last)) = (front.first(), front.last()) {
        let rotated_first = sector.rotate_right(first);
        if sector.are_touching(&rotated_first, last) {
            segments.push(segment(last, &rotated_first, true));
        }
    }
    segments
}

/// Up and down segment counts of one frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParastichyCounts {
    pub up: usize,
    pub down: usize,
}

impl ParastichyCounts {
    pub fn of(front: &Front, sector: &Sector) -> Self {
        front_segments(front, sector)
            .iter()
            .fold(Self::default(), |mut counts, segment| {
                match segment.direction {
                    SegmentDirection::Up => counts.up += 1,
                    SegmentDirection::Down => counts.down += 1,
                }
                counts
            })
    }

    pub const fn total(&self) -> usize {
        self.up + self.down
    }
}

/// Per-iteration parastichy counts; entry `n` describes the frontier after
/// `n` steps (entry 0 is the seed alone).
#[derive(Debug, Clone, Default)]
pub struct ParastichyHistory {
    up: Vec<usize>,
    down: Vec<usize>,
}

impl ParastichyHistory {
    pub const fn new() -> Self {
        ParastichyHistory {
            up: Vec::new(),
            down: Vec::new(),
        }
    }

    pub fn record(&mut self, counts: ParastichyCounts) {
        self.up.push(counts.up);
        self.down.push(counts.down);
    }

    pub fn up_counts(&self) -> &[usize] {
        &self.up
    }

    pub fn down_counts(&self) -> &[usize] {
        &self.down
    }

    pub fn get(&self, iteration: usize) -> Option<ParastichyCounts> {
        Some(ParastichyCounts {
            up: *self.up.get(iteration)?,
            down: *self.down.get(iteration)?,
        })
    }

    pub fn latest(&self) -> Option<ParastichyCounts> {
        self.get(self.len().checked_sub(1)?)
    }

    pub fn len(&self) -> usize {
        self.up.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ParastichyCounts> + '_ {
        self.up
            .iter()
            .zip(&self.down)
            .map(|(&up, &down)| ParastichyCounts { up, down })
    }

    /// Largest single count seen in any iteration.
    pub fn max_count(&self) -> usize {
        self.up.iter().chain(&self.down).copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::DiskId;
    use crate::float_types::Real;
    use nalgebra::Point2;

    fn placed(id: usize, x: Real, y: Real) -> Disk {
        Disk::new(Point2::new(x, y), 0.1).with_id(DiskId(id))
    }

    #[test]
    fn up_means_moving_away_from_the_vertex() {
        let low = placed(0, -0.1, 1.0);
        let high = placed(1, 0.1, 1.2);
        assert!(is_up_segment(&low, &high));
        assert!(!is_up_segment(&high, &low));
    }

    #[test]
    fn lone_seed_far_from_its_image_has_no_segments() {
        let sector = Sector::new(90.0).unwrap();
        let seed = Disk::new(Point2::from(sector.left_edge() * 0.5), 0.1).with_id(DiskId(0));
        let front = Front::seeded(seed);
        assert!(front_segments(&front, &sector).is_empty());
        assert_eq!(ParastichyCounts::of(&front, &sector), ParastichyCounts::default());
    }

    #[test]
    fn closing_segment_counts_when_touching() {
        let sector = Sector::new(90.0).unwrap();
        // radius / sin(45°): the seed exactly touches its own rotated copy
        let distance = 0.1 / (45.0 as Real).to_radians().sin();
        let seed = Disk::new(Point2::from(sector.left_edge() * distance), 0.1).with_id(DiskId(0));
        let front = Front::seeded(seed);
        let segments = front_segments(&front, &sector);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].wraps);
    }

    #[test]
    fn history_tracks_iterations() {
        let mut history = ParastichyHistory::new();
        assert_eq!(history.latest(), None);
        history.record(ParastichyCounts { up: 0, down: 0 });
        history.record(ParastichyCounts { up: 1, down: 2 });
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(ParastichyCounts { up: 1, down: 2 }));
        assert_eq!(history.up_counts(), &[0, 1]);
        assert_eq!(history.down_counts(), &[0, 2]);
        assert_eq!(history.max_count(), 2);
        assert_eq!(history.iter().map(|c| c.total()).collect::<Vec<_>>(), vec![0, 3]);
    }
}
