//! Rings and disks of lattice points.
//!
//! # Ring Structure
//!
//! - Ring 0: just the center (1 point)
//! - Ring n > 0: every point at hex distance exactly n (6n points)
//!
//! A ring is produced by an iterative walk: start `n` steps out along
//! `NEIGHBOR_DIRECTIONS[0]`, then take `n` steps along each of the six
//! directions in turn. Every side of the hexagon is a contiguous run, and
//! ring 1 comes out in exactly `NEIGHBOR_DIRECTIONS` order.
//!
//! A disk is the union of consecutive rings, walked from the outermost ring
//! inwards.

use std::iter::FusedIterator;

use crate::HexPoint;

/// Number of points in ring n.
///
/// - Ring 0: 1 point (the center)
/// - Ring n > 0: 6n points
#[inline]
pub const fn points_in_ring(radius: u32) -> usize {
    if radius == 0 {
        1
    } else {
        6 * radius as usize
    }
}

/// Number of points in rings 0 through n (inclusive).
///
/// Formula: 1 + 3n(n+1)
#[inline]
pub const fn points_through_ring(radius: u32) -> usize {
    let r = radius as usize;
    1 + 3 * r * (r + 1)
}

/// Iterator over the points of a single ring.
#[derive(Debug, Clone)]
pub struct Ring {
    next: HexPoint,
    radius: u32,
    emitted: usize,
    total: usize,
}

impl Ring {
    /// Points at exact hex distance `radius` from `center`.
    pub fn new(center: HexPoint, radius: u32) -> Self {
        Self {
            next: center + HexPoint::NEIGHBOR_DIRECTIONS[0] * i64::from(radius),
            radius,
            emitted: 0,
            total: points_in_ring(radius),
        }
    }

    /// Radius this ring was built with.
    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl Iterator for Ring {
    type Item = HexPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.total {
            return None;
        }

        let point = self.next;
        if self.radius > 0 {
            let side = self.emitted / self.radius as usize;
            self.next = point + HexPoint::NEIGHBOR_DIRECTIONS[(side + 2) % 6];
        }
        self.emitted += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ring {}
impl FusedIterator for Ring {}

/// Iterator over every ring from an outer radius down to an inner one.
#[derive(Debug, Clone)]
pub struct Disk {
    center: HexPoint,
    ring: Option<Ring>,
    min_radius: u32,
}

impl Disk {
    /// Points with hex distance in `min_radius..=radius` from `center`.
    ///
    /// Empty when `min_radius > radius`.
    pub fn new(center: HexPoint, radius: u32, min_radius: u32) -> Self {
        let ring = (min_radius <= radius).then(|| Ring::new(center, radius));
        Self {
            center,
            ring,
            min_radius,
        }
    }
}

impl Iterator for Disk {
    type Item = HexPoint;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ring = self.ring.as_mut()?;
            if let Some(point) = ring.next() {
                return Some(point);
            }

            let radius = ring.radius();
            self.ring = (radius > self.min_radius).then(|| Ring::new(self.center, radius - 1));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.ring {
            None => 0,
            Some(ring) => {
                let inner = ring.radius();
                let below = if inner > self.min_radius {
                    points_through_ring(inner - 1)
                        - self
                            .min_radius
                            .checked_sub(1)
                            .map_or(0, points_through_ring)
                } else {
                    0
                };
                ring.len() + below
            }
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Disk {}
impl FusedIterator for Disk {}

/// Points at exact hex distance `radius` from `center`.
pub fn ring(center: HexPoint, radius: u32) -> Ring {
    Ring::new(center, radius)
}

/// Points within hex distance `radius` of `center`, skipping those closer
/// than `min_radius`.
pub fn disk(center: HexPoint, radius: u32, min_radius: u32) -> Disk {
    Disk::new(center, radius, min_radius)
}
