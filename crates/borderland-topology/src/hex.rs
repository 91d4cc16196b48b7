//! Hexagonal lattice points using axial coordinates.
//!
//! Axial coordinates use two axes (x, y) at 60 degrees, with an implicit
//! third axis z = -x - y. Two points are lattice neighbors when their
//! difference is one of [`HexPoint::NEIGHBOR_DIRECTIONS`].
//!
//! Lattice arithmetic is only defined for points within
//! [`HexPoint::MAX_COORDINATE`] of the origin; check [`HexPoint::in_range`]
//! before doing neighborhood work around untrusted input.
//!
//! The canonical textual key of a point is `"<x>,<y>"`. It only appears at
//! the serialization boundary; everything else keys on the value type.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a hex key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key has no `,` between its components.
    #[error("hex key {0:?} should contain a comma")]
    MissingSeparator(String),

    /// One of the components is not an integer.
    #[error("hex key {key:?} has a non-numeric {position} component")]
    InvalidComponent {
        key: String,
        position: &'static str,
    },
}

/// A point on the axial hexagonal lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HexPoint {
    /// First axial coordinate
    pub x: i64,
    /// Second axial coordinate
    pub y: i64,
}

impl HexPoint {
    /// Origin of the lattice.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// The six unit directions, in the order edges are numbered.
    ///
    /// Edge `i` of a hex sits between `HexLayout::vertices()[i]` and
    /// `vertices()[(i + 1) % 6]` and faces `NEIGHBOR_DIRECTIONS[i]`.
    pub const NEIGHBOR_DIRECTIONS: [Self; 6] = [
        Self { x: -1, y: 1 },
        Self { x: 0, y: 1 },
        Self { x: 1, y: 0 },
        Self { x: 1, y: -1 },
        Self { x: 0, y: -1 },
        Self { x: -1, y: 0 },
    ];

    /// Largest supported value of `|x|`, `|y|` and `|z|`.
    pub const MAX_COORDINATE: i64 = 1 << 40;

    /// Create a new point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The implicit third axis: z = -x - y.
    pub const fn z(&self) -> i64 {
        -self.x - self.y
    }

    /// Whether every axis is within [`Self::MAX_COORDINATE`].
    pub fn in_range(&self) -> bool {
        let max = Self::MAX_COORDINATE.unsigned_abs();
        self.x.unsigned_abs() <= max
            && self.y.unsigned_abs() <= max
            && self.x.checked_add(self.y).is_some_and(|s| s.unsigned_abs() <= max)
    }

    /// Number of lattice steps between two points.
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.unsigned_abs()
            .max(dy.unsigned_abs())
            .max((dx + dy).unsigned_abs())
    }

    /// Straight-line distance in coordinate space.
    ///
    /// Not a lattice metric; ring membership always uses [`Self::hex_distance`].
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// The six neighbors, in [`Self::NEIGHBOR_DIRECTIONS`] order.
    pub fn neighbors(&self) -> [Self; 6] {
        Self::NEIGHBOR_DIRECTIONS.map(|d| *self + d)
    }

    /// Canonical key, `"<x>,<y>"`.
    pub fn to_key(&self) -> String {
        self.to_string()
    }

    /// Parse a canonical key. Exact inverse of [`Self::to_key`].
    pub fn from_key(key: &str) -> Result<Self, KeyError> {
        let (x, y) = key
            .split_once(',')
            .ok_or_else(|| KeyError::MissingSeparator(key.to_owned()))?;

        let component = |raw: &str, position| {
            raw.parse::<i64>().map_err(|_| KeyError::InvalidComponent {
                key: key.to_owned(),
                position,
            })
        };

        Ok(Self::new(component(x, "first")?, component(y, "second")?))
    }
}

impl Add for HexPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for HexPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for HexPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i64> for HexPoint {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl fmt::Display for HexPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for HexPoint {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl From<(i64, i64)> for HexPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexPoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexPoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_key(&key).map_err(serde::de::Error::custom)
    }
}
