//! Projection between the lattice and the drawing plane.
//!
//! Hexes are flat-topped. Moving one step along `(1, 1)` moves one full
//! column to the right; moving along `(1, -1)` moves one row down.
//!
//! ```text
//! px = (x + y) * (base_width + width) / 2
//! py = (x - y) * height / 2
//! ```

use std::ops::{Add, Mul, Sub};

use crate::HexPoint;

/// A point with real coordinates: either a pixel position or a fractional
/// axial position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Round each component to the nearest integer, halves rounding up.
    pub fn round(&self) -> HexPoint {
        let round_half_up = |v: f64| (v + 0.5).floor() as i64;
        HexPoint::new(round_half_up(self.x), round_half_up(self.y))
    }
}

impl Add for PlanePoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for PlanePoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for PlanePoint {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl From<HexPoint> for PlanePoint {
    fn from(point: HexPoint) -> Self {
        Self::new(point.x as f64, point.y as f64)
    }
}

/// Hex dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexLayout {
    /// Length of the flat top and bottom edges
    pub base_width: f64,
    /// Distance between the left and right corners
    pub width: f64,
    /// Distance between the top and bottom edges
    pub height: f64,
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            base_width: 24.0,
            width: 48.0,
            height: 42.0,
        }
    }
}

impl HexLayout {
    fn column_step(&self) -> f64 {
        self.base_width + self.width
    }

    /// Pixel position of a hex center.
    pub fn to_pixel(&self, hex: HexPoint) -> PlanePoint {
        let (x, y) = (hex.x as f64, hex.y as f64);
        PlanePoint::new(
            (x + y) * self.column_step() / 2.0,
            (x - y) * self.height / 2.0,
        )
    }

    /// Fractional axial position of a pixel.
    pub fn to_axial(&self, pixel: PlanePoint) -> PlanePoint {
        let across = pixel.x / self.column_step();
        let down = pixel.y / self.height;
        PlanePoint::new(across + down, across - down)
    }

    /// The hex whose center is nearest to a pixel.
    ///
    /// Rounds in cube space so points near a corner land on the correct hex,
    /// which plain per-component rounding does not guarantee.
    pub fn hex_at(&self, pixel: PlanePoint) -> HexPoint {
        let axial = self.to_axial(pixel);
        let (fx, fy) = (axial.x, axial.y);
        let fz = -fx - fy;

        let (mut rx, mut ry, rz) = (fx.round(), fy.round(), fz.round());
        let (dx, dy, dz) = ((rx - fx).abs(), (ry - fy).abs(), (rz - fz).abs());

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        }

        HexPoint::new(rx as i64, ry as i64)
    }

    /// Corners of a hex relative to its center, starting top-left and going
    /// clockwise. Edge `i` runs from corner `i` to corner `(i + 1) % 6`.
    pub fn vertices(&self) -> [PlanePoint; 6] {
        let (half_base, half_width, half_height) =
            (self.base_width / 2.0, self.width / 2.0, self.height / 2.0);
        [
            PlanePoint::new(-half_base, -half_height),
            PlanePoint::new(half_base, -half_height),
            PlanePoint::new(half_width, 0.0),
            PlanePoint::new(half_base, half_height),
            PlanePoint::new(-half_base, half_height),
            PlanePoint::new(-half_width, 0.0),
        ]
    }

    /// Whether an offset from a hex center falls inside that hex.
    pub fn contains(&self, offset: PlanePoint) -> bool {
        let abs_x = offset.x.abs();
        let abs_y = offset.y.abs();
        let slope = (self.width - self.base_width) / self.height;

        abs_y <= self.height / 2.0
            && (abs_x <= self.base_width / 2.0 || self.width / 2.0 - abs_x >= abs_y * slope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: PlanePoint, b: PlanePoint) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn origin_projects_to_origin() {
        let layout = HexLayout::default();
        assert!(close(layout.to_pixel(HexPoint::ORIGIN), PlanePoint::default()));
    }

    #[test]
    fn axial_projection_inverts_pixel_projection() {
        let layout = HexLayout::default();
        for hex in [HexPoint::new(3, -1), HexPoint::new(-5, 8), HexPoint::new(0, 7)] {
            let back = layout.to_axial(layout.to_pixel(hex));
            assert!(close(back, hex.into()), "{hex} came back as {back:?}");
            assert_eq!(back.round(), hex);
            assert_eq!(layout.hex_at(layout.to_pixel(hex)), hex);
        }
    }

    #[test]
    fn neighbor_edges_face_their_neighbors() {
        let layout = HexLayout::default();
        let vertices = layout.vertices();

        for (index, direction) in HexPoint::NEIGHBOR_DIRECTIONS.iter().enumerate() {
            let midpoint = (vertices[index] + vertices[(index + 1) % 6]) * 0.5;
            // The edge midpoint lies halfway to the neighbor's center
            let neighbor_center = layout.to_pixel(*direction);
            assert!(
                close(midpoint * 2.0, neighbor_center),
                "edge {index} does not face {direction}"
            );
        }
    }

    #[test]
    fn hit_test_accepts_center_and_rejects_far_points() {
        let layout = HexLayout::default();
        assert!(layout.contains(PlanePoint::default()));
        assert!(layout.contains(PlanePoint::new(layout.base_width / 2.0, 0.0)));
        assert!(!layout.contains(PlanePoint::new(0.0, layout.height)));
        assert!(!layout.contains(PlanePoint::new(layout.width, 0.0)));
    }

    #[test]
    fn hex_at_picks_the_hex_containing_the_pixel() {
        let layout = HexLayout::default();
        let hex = HexPoint::new(2, -1);
        let center = layout.to_pixel(hex);

        for offset in [
            PlanePoint::new(5.0, 5.0),
            PlanePoint::new(-10.0, 3.0),
            PlanePoint::new(20.0, -2.0),
        ] {
            assert!(layout.contains(offset));
            assert_eq!(layout.hex_at(center + offset), hex);
        }
    }

    #[test]
    fn round_prefers_up_on_halves() {
        assert_eq!(PlanePoint::new(0.5, -0.5).round(), HexPoint::new(1, 0));
        assert_eq!(PlanePoint::new(1.49, -1.51).round(), HexPoint::new(1, -2));
    }
}
