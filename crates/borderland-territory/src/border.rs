//! Claim geometry and the local coverage scan.
//!
//! A claimant at `c` claims `disk(c, R)`. Its inner disk `disk(c, R - 1)` is
//! always interior; its edge `ring(c, R)` is border unless some other
//! claimant's inner disk covers it.
//!
//! Two claim disks can only touch when their centers are within `2R` of each
//! other, so every recomputation looks at `disk(changed, 2R)` and nothing
//! else.

use std::collections::HashSet;

use borderland_topology::{disk, ring, Disk, HexPoint, Ring};

use crate::registry::TerritoryRegistry;

/// Default claim radius.
pub const CLAIM_RADIUS: u32 = 2;

/// Largest claim radius a territory accepts.
pub const MAX_CLAIM_RADIUS: u32 = 64;

/// Claim geometry for one radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimShape {
    radius: u32,
}

impl ClaimShape {
    /// `radius` must lie in `1..=MAX_CLAIM_RADIUS`; a zero radius has no inner
    /// disk.
    pub(crate) const fn new(radius: u32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Every hex a claimant at `center` claims.
    pub fn claim_disk(&self, center: HexPoint) -> Disk {
        disk(center, self.radius, 0)
    }

    /// Hexes that are interior no matter what else is around.
    pub fn inner_disk(&self, center: HexPoint) -> Disk {
        disk(center, self.radius - 1, 0)
    }

    /// Outermost ring of the claim.
    pub fn edge(&self, center: HexPoint) -> Ring {
        ring(center, self.radius)
    }

    /// Centers of every claimant whose claim can overlap one at `center`.
    pub fn reach(&self, center: HexPoint) -> Disk {
        disk(center, 2 * self.radius, 0)
    }
}

impl Default for ClaimShape {
    fn default() -> Self {
        Self::new(CLAIM_RADIUS)
    }
}

/// What the claimants around a hex cover.
#[derive(Debug, Default)]
pub(crate) struct Coverage {
    /// Union of the claimants' inner disks
    pub inner: HashSet<HexPoint>,
    /// Union of the claimants' edges, minus anything in `inner`
    pub edge: HashSet<HexPoint>,
}

impl Coverage {
    /// Collect coverage from every claimant within reach of `center`.
    pub fn scan(registry: &TerritoryRegistry, shape: ClaimShape, center: HexPoint) -> Self {
        let mut coverage = Self::default();

        for hex in shape.reach(center) {
            if registry.is_claimant(hex) {
                coverage.inner.extend(shape.inner_disk(hex));
                coverage.edge.extend(shape.edge(hex));
            }
        }

        let Coverage { inner, edge } = &mut coverage;
        edge.retain(|hex| !inner.contains(hex));
        coverage
    }
}
