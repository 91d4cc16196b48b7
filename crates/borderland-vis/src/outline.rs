//! Border outline geometry.
//!
//! A border hex is stroked only along the edges that face an unregistered
//! neighbor, so the outline traces the outside of the territory and never
//! cuts through it.

use borderland_territory::TerritoryState;
use borderland_topology::{HexLayout, HexPoint, PlanePoint};
use serde::Serialize;

/// One straight stroke, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: PlanePoint,
    pub to: PlanePoint,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance(&self.to)
    }
}

/// Indices of the edges of `hex` that face unoccupied hexes.
pub fn open_edges<R>(state: &TerritoryState<R>, hex: HexPoint) -> impl Iterator<Item = usize> + '_ {
    hex.neighbors()
        .into_iter()
        .enumerate()
        .filter(move |(_, neighbor)| !state.registry().contains(*neighbor))
        .map(|(index, _)| index)
}

/// Every outline segment of the current border, ordered by hex.
pub fn border_outline<R>(state: &TerritoryState<R>, layout: &HexLayout) -> Vec<Segment> {
    let vertices = layout.vertices();
    let mut border: Vec<HexPoint> = state.border().iter().copied().collect();
    border.sort();

    let mut segments = Vec::new();
    for hex in border {
        let center = layout.to_pixel(hex);
        for index in open_edges(state, hex) {
            segments.push(Segment {
                from: center + vertices[index],
                to: center + vertices[(index + 1) % 6],
            });
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use borderland_territory::Claimant;

    #[test]
    fn lone_claim_outline_is_closed() {
        let mut state = TerritoryState::new();
        state.place_claimant(HexPoint::ORIGIN, Claimant::TownCenter).unwrap();

        let segments = border_outline(&state, &HexLayout::default());
        // Six corner hexes show three edges, six side hexes show two
        assert_eq!(segments.len(), 6 * 3 + 6 * 2);

        // Every endpoint is shared by exactly two segments
        let endpoints: Vec<PlanePoint> = segments.iter().flat_map(|s| [s.from, s.to]).collect();
        for point in &endpoints {
            let shared = endpoints.iter().filter(|p| p.distance(point) < 1e-9).count();
            assert_eq!(shared, 2, "dangling outline vertex at {point:?}");
        }
    }

    #[test]
    fn empty_territory_has_no_outline() {
        let state = TerritoryState::new();
        assert!(border_outline(&state, &HexLayout::default()).is_empty());
    }

    #[test]
    fn edges_facing_buildings_are_skipped() {
        let mut state = TerritoryState::new();
        state.place_claimant(HexPoint::ORIGIN, Claimant::TownCenter).unwrap();
        let corner = HexPoint::new(-2, 2);
        let before = open_edges(&state, corner).count();

        // A hut just outside the claim closes one edge of the corner hex
        let outside = corner + HexPoint::NEIGHBOR_DIRECTIONS[0];
        state
            .place_building(outside, borderland_territory::BuildingKind::LumberjackHut)
            .unwrap();
        assert_eq!(open_edges(&state, corner).count(), before - 1);
        assert!(!open_edges(&state, corner).any(|i| i == 0));
    }
}
