//! Territory state and the incremental border maintenance.
//!
//! # Adding a claimant at `h`
//!
//! 1. Put the claimant on `h`, replacing whatever was there.
//! 2. Collect the inner disks of every claimant within `2R` of `h`.
//! 3. Fill `disk(h, R)` with `Blank` wherever nothing stands yet.
//! 4. Every point of `ring(h, R)` outside the collected inner disks joins the
//!    border.
//! 5. `disk(h, R - 1)` leaves the border.
//!
//! # Removing the claimant at `h`
//!
//! 1. Put a `Blank` on `h`.
//! 2. Collect edges and inner disks of the remaining claimants within `2R`;
//!    edges lose anything an inner disk covers.
//! 3. For every point of `disk(h, R)`: on a remaining edge it is border;
//!    inside a remaining inner disk it stays as is; otherwise it leaves the
//!    registry and the border and is queued for destruction.

use std::collections::{BTreeMap, HashSet};
use std::mem;

use borderland_topology::HexPoint;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::border::{ClaimShape, Coverage, CLAIM_RADIUS, MAX_CLAIM_RADIUS};
use crate::building::{BuildingKind, Claimant};
use crate::error::{Error, Result};
use crate::events::{TerritoryEvent, TerritorySnapshot};
use crate::registry::TerritoryRegistry;
use crate::render::{DrawList, RenderAttachment};

/// Configuration for a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerritoryConfig {
    /// Radius of the disk each claimant claims
    pub claim_radius: u32,
}

impl Default for TerritoryConfig {
    fn default() -> Self {
        Self {
            claim_radius: CLAIM_RADIUS,
        }
    }
}

impl TerritoryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.claim_radius == 0 {
            return Err(Error::InvalidConfig(
                "claim_radius must be at least 1".to_owned(),
            ));
        }
        if self.claim_radius > MAX_CLAIM_RADIUS {
            return Err(Error::InvalidConfig(format!(
                "claim_radius {} exceeds {MAX_CLAIM_RADIUS}",
                self.claim_radius
            )));
        }
        Ok(())
    }
}

/// One step of a scripted setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Place(HexPoint, Claimant),
    Remove(HexPoint),
}

/// Starting territory laid down by [`TerritoryState::initialize`].
pub const DEMO_SEED: [SeedStep; 4] = [
    SeedStep::Place(HexPoint::new(0, 0), Claimant::TownCenter),
    SeedStep::Place(HexPoint::new(2, -2), Claimant::Tower),
    SeedStep::Place(HexPoint::new(3, -1), Claimant::Tower),
    SeedStep::Remove(HexPoint::new(2, -2)),
];

/// Registry, border set and pending destructions for one session.
#[derive(Debug)]
pub struct TerritoryState<R = DrawList> {
    shape: ClaimShape,
    registry: TerritoryRegistry,
    border: HashSet<HexPoint>,
    pending_destruction: HashSet<HexPoint>,
    events: Vec<TerritoryEvent>,
    sequence: u64,
    renderer: R,
}

impl TerritoryState<DrawList> {
    /// Empty territory with the default claim radius.
    pub fn new() -> Self {
        Self::build(ClaimShape::default(), DrawList::new())
    }

    pub fn with_config(config: TerritoryConfig) -> Result<Self> {
        Self::with_renderer(config, DrawList::new())
    }
}

impl Default for TerritoryState<DrawList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RenderAttachment> TerritoryState<R> {
    /// Empty territory attaching its drawables to `renderer`.
    pub fn with_renderer(config: TerritoryConfig, renderer: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(ClaimShape::new(config.claim_radius), renderer))
    }

    fn build(shape: ClaimShape, renderer: R) -> Self {
        Self {
            shape,
            registry: TerritoryRegistry::new(),
            border: HashSet::new(),
            pending_destruction: HashSet::new(),
            events: Vec::new(),
            sequence: 0,
            renderer,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Clear the registry, the border and anything pending.
    pub fn reset(&mut self) {
        self.registry.clear(&mut self.renderer);
        self.border.clear();
        self.pending_destruction.clear();
        self.events.clear();

        let sequence = self.next_sequence();
        self.events.push(TerritoryEvent::Reset { sequence });
    }

    /// Reset, then lay down [`DEMO_SEED`].
    pub fn initialize(&mut self) -> Result<()> {
        self.reset();
        self.seed(&DEMO_SEED)?;

        info!(
            buildings = self.registry.len(),
            border = self.border.len(),
            "Territory initialized"
        );
        Ok(())
    }

    /// Apply scripted steps in order, stopping at the first failure.
    pub fn seed(&mut self, steps: &[SeedStep]) -> Result<()> {
        for step in steps {
            match *step {
                SeedStep::Place(hex, claimant) => self.place_claimant(hex, claimant)?,
                SeedStep::Remove(hex) => {
                    self.remove_claimant(hex)?;
                }
            }
        }
        Ok(())
    }

    /// Build a claimant on `hex` and extend the territory around it.
    ///
    /// `hex` may be empty or hold a non-claimant, which gets replaced.
    pub fn place_claimant(&mut self, hex: HexPoint, claimant: Claimant) -> Result<()> {
        if !hex.in_range() {
            return Err(Error::OutOfRange(hex));
        }
        if let Some(existing) = self.registry.get(hex).filter(|b| b.kind.is_claimant()) {
            return Err(Error::AlreadyClaimant {
                hex,
                kind: existing.kind,
            });
        }

        let registered_before = self.registry.len();
        self.registry
            .place(hex, claimant.into(), true, &mut self.renderer);

        let coverage = Coverage::scan(&self.registry, self.shape, hex);

        for point in self.shape.claim_disk(hex) {
            self.registry
                .place(point, BuildingKind::Blank, false, &mut self.renderer);
        }

        for point in self.shape.edge(hex) {
            if !coverage.inner.contains(&point) {
                self.border.insert(point);
            }
        }

        for point in self.shape.inner_disk(hex) {
            self.border.remove(&point);
        }

        let claimed = self.registry.len() - registered_before;
        debug!(
            %hex,
            kind = %BuildingKind::from(claimant),
            claimed,
            border = self.border.len(),
            "Claimant placed"
        );

        let sequence = self.next_sequence();
        self.events.push(TerritoryEvent::ClaimantPlaced {
            hex,
            kind: claimant,
            claimed,
            sequence,
        });
        Ok(())
    }

    /// Tear down the claimant on `hex` and shrink the territory around it.
    ///
    /// Hexes that leave the territory are queued in the pending-destruction
    /// set. Fails without touching anything if `hex` holds no claimant.
    pub fn remove_claimant(&mut self, hex: HexPoint) -> Result<Claimant> {
        let kind = self.registry.kind_at(hex).ok_or(Error::Vacant(hex))?;
        let claimant =
            Claimant::try_from(kind).map_err(|kind| Error::NotClaimant { hex, kind })?;

        self.registry
            .place(hex, BuildingKind::Blank, true, &mut self.renderer);

        let coverage = Coverage::scan(&self.registry, self.shape, hex);
        let mut released = Vec::new();

        for point in self.shape.claim_disk(hex) {
            if coverage.edge.contains(&point) {
                self.border.insert(point);
            } else if !coverage.inner.contains(&point) {
                if let Some(building) = self.registry.evict(point, &mut self.renderer) {
                    trace!(hex = %point, kind = %building.kind, "Hex released");
                    self.pending_destruction.insert(point);
                    released.push(point);
                }
                self.border.remove(&point);
            }
        }

        released.sort();
        debug!(
            %hex,
            kind = %kind,
            released = released.len(),
            border = self.border.len(),
            "Claimant removed"
        );

        let sequence = self.next_sequence();
        self.events.push(TerritoryEvent::ClaimantRemoved {
            hex,
            kind: claimant,
            released,
            sequence,
        });
        Ok(claimant)
    }

    /// Put a non-claimant building on `hex`.
    ///
    /// Claimant kinds are routed through [`Self::place_claimant`]. Whether
    /// `hex` lies inside the territory is not checked.
    pub fn place_building(&mut self, hex: HexPoint, kind: BuildingKind) -> Result<()> {
        if let Ok(claimant) = Claimant::try_from(kind) {
            return self.place_claimant(hex, claimant);
        }
        if kind == BuildingKind::Blank {
            return Err(Error::Placeholder(hex));
        }
        if !hex.in_range() {
            return Err(Error::OutOfRange(hex));
        }
        if let Some(existing) = self.registry.get(hex).filter(|b| b.kind.is_claimant()) {
            return Err(Error::AlreadyClaimant {
                hex,
                kind: existing.kind,
            });
        }

        self.registry.place(hex, kind, true, &mut self.renderer);
        debug!(%hex, %kind, "Building placed");

        let sequence = self.next_sequence();
        self.events
            .push(TerritoryEvent::BuildingPlaced { hex, kind, sequence });
        Ok(())
    }

    /// Hand over the hexes evicted since the last drain.
    pub fn drain_pending_destruction(&mut self) -> HashSet<HexPoint> {
        mem::take(&mut self.pending_destruction)
    }
}

impl<R> TerritoryState<R> {
    pub fn pending_destruction(&self) -> &HashSet<HexPoint> {
        &self.pending_destruction
    }

    pub fn registry(&self) -> &TerritoryRegistry {
        &self.registry
    }

    pub fn border(&self) -> &HashSet<HexPoint> {
        &self.border
    }

    pub fn shape(&self) -> ClaimShape {
        self.shape
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Whether `hex` lies in some claimant's inner disk.
    pub fn is_interior(&self, hex: HexPoint) -> bool {
        self.shape
            .inner_disk(hex)
            .any(|point| self.registry.is_claimant(point))
    }

    /// Events recorded since the last reset.
    pub fn events(&self) -> &[TerritoryEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> TerritorySnapshot {
        let buildings: BTreeMap<_, _> = self
            .registry
            .iter()
            .map(|b| (b.hex, b.kind))
            .collect();

        TerritorySnapshot {
            sequence: self.sequence,
            buildings,
            border: self.border.iter().copied().collect(),
            claimant_count: self.registry.claimants().count(),
        }
    }
}
