//! Territory events and snapshots.

use std::collections::{BTreeMap, BTreeSet};

use borderland_topology::HexPoint;
use serde::{Deserialize, Serialize};

use crate::building::{BuildingKind, Claimant};
use crate::error::Result;
use crate::render::Detached;
use crate::state::{TerritoryConfig, TerritoryState};

/// Mutations applied to a territory, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TerritoryEvent {
    /// Everything was cleared
    Reset { sequence: u64 },

    /// A claimant was built and its disk claimed
    ClaimantPlaced {
        hex: HexPoint,
        kind: Claimant,
        /// Hexes that were not registered before
        claimed: usize,
        sequence: u64,
    },

    /// A claimant was torn down
    ClaimantRemoved {
        hex: HexPoint,
        kind: Claimant,
        /// Hexes that dropped out of the territory
        released: Vec<HexPoint>,
        sequence: u64,
    },

    /// A non-claimant building was put on a hex
    BuildingPlaced {
        hex: HexPoint,
        kind: BuildingKind,
        sequence: u64,
    },
}

impl TerritoryEvent {
    /// Position of this event in the mutation sequence.
    pub fn sequence(&self) -> u64 {
        match self {
            TerritoryEvent::Reset { sequence } => *sequence,
            TerritoryEvent::ClaimantPlaced { sequence, .. } => *sequence,
            TerritoryEvent::ClaimantRemoved { sequence, .. } => *sequence,
            TerritoryEvent::BuildingPlaced { sequence, .. } => *sequence,
        }
    }
}

/// The territory at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritorySnapshot {
    pub sequence: u64,
    pub buildings: BTreeMap<HexPoint, BuildingKind>,
    pub border: BTreeSet<HexPoint>,
    pub claimant_count: usize,
}

impl TerritorySnapshot {
    /// Rebuild the territory by applying `events` to an empty state.
    pub fn replay(events: &[TerritoryEvent], config: TerritoryConfig) -> Result<Self> {
        let mut state = TerritoryState::with_renderer(config, Detached::default())?;

        for event in events {
            match event {
                TerritoryEvent::Reset { .. } => state.reset(),
                TerritoryEvent::ClaimantPlaced { hex, kind, .. } => {
                    state.place_claimant(*hex, *kind)?;
                }
                TerritoryEvent::ClaimantRemoved { hex, .. } => {
                    state.remove_claimant(*hex)?;
                    state.drain_pending_destruction();
                }
                TerritoryEvent::BuildingPlaced { hex, kind, .. } => {
                    state.place_building(*hex, *kind)?;
                }
            }
        }

        Ok(state.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization() {
        let event = TerritoryEvent::ClaimantRemoved {
            hex: HexPoint::new(2, -2),
            kind: Claimant::Tower,
            released: vec![HexPoint::new(4, -4)],
            sequence: 7,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ClaimantRemoved"));
        assert!(json.contains("\"2,-2\""));
        assert!(json.contains("\"tower\""));

        let parsed: TerritoryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.sequence(), 7);
    }

    #[test]
    fn snapshot_keys_are_hex_keys() {
        let mut snapshot = TerritorySnapshot::default();
        snapshot.buildings.insert(HexPoint::new(0, 0), BuildingKind::TownCenter);
        snapshot.border.insert(HexPoint::new(-2, 2));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["buildings"]["0,0"], "townCenter");
        assert_eq!(json["border"][0], "-2,2");
    }
}
