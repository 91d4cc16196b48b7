//! Borderland Lattice Topology
//!
//! Hexagonal lattice algebra for the territory overlay.
//!
//! # Coordinates
//!
//! Points use axial coordinates `(x, y)` with an implicit third axis
//! `z = -x - y`. The lattice distance between two points is
//! `max(|dx|, |dy|, |dx + dy|)`.
//!
//! # Rings and Disks
//!
//! Ring `n` around a center holds the `6n` points at exact distance `n`
//! (ring 0 is the center itself). A disk of radius `n` is the union of rings
//! `0..=n` and holds `1 + 3n(n+1)` points. Both are produced by iterative
//! walks, so large radii cost no stack.

mod hex;
mod layout;
mod ring;

pub use hex::{HexPoint, KeyError};
pub use layout::{HexLayout, PlanePoint};
pub use ring::{disk, points_in_ring, points_through_ring, ring, Disk, Ring};

/// Number of lattice neighbors of every point.
pub const NEIGHBOR_COUNT: usize = 6;

const _: () = assert!(HexPoint::NEIGHBOR_DIRECTIONS.len() == NEIGHBOR_COUNT);
