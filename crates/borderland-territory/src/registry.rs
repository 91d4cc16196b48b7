//! Which building stands on which hex.

use std::collections::HashMap;

use borderland_topology::HexPoint;

use crate::building::{Building, BuildingKind};
use crate::render::{Drawable, RenderAttachment};

/// Map from hex to the building occupying it.
///
/// Holds explicitly placed buildings plus the `Blank` placeholders that fill
/// every claim disk.
#[derive(Debug, Default, Clone)]
pub struct TerritoryRegistry {
    buildings: HashMap<HexPoint, Building>,
}

impl TerritoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a building on `hex`.
    ///
    /// An occupied hex is left alone unless `overwrite` is set, in which case
    /// the previous occupant's drawable is detached first.
    pub fn place<R: RenderAttachment + ?Sized>(
        &mut self,
        hex: HexPoint,
        kind: BuildingKind,
        overwrite: bool,
        renderer: &mut R,
    ) {
        if let Some(previous) = self.buildings.get(&hex) {
            if !overwrite {
                return;
            }
            renderer.detach(previous.handle);
        }

        let handle = renderer.attach(Drawable::for_building(kind, hex), hex);
        self.buildings.insert(hex, Building { kind, hex, handle });
    }

    /// Remove whatever stands on `hex`, detaching its drawable.
    pub fn evict<R: RenderAttachment + ?Sized>(
        &mut self,
        hex: HexPoint,
        renderer: &mut R,
    ) -> Option<Building> {
        let building = self.buildings.remove(&hex)?;
        renderer.detach(building.handle);
        Some(building)
    }

    /// Remove every building, detaching all drawables.
    pub fn clear<R: RenderAttachment + ?Sized>(&mut self, renderer: &mut R) {
        for (_, building) in self.buildings.drain() {
            renderer.detach(building.handle);
        }
    }

    pub fn get(&self, hex: HexPoint) -> Option<&Building> {
        self.buildings.get(&hex)
    }

    pub fn kind_at(&self, hex: HexPoint) -> Option<BuildingKind> {
        self.get(hex).map(|b| b.kind)
    }

    pub fn contains(&self, hex: HexPoint) -> bool {
        self.buildings.contains_key(&hex)
    }

    /// Whether a territory-claiming building stands on `hex`.
    pub fn is_claimant(&self, hex: HexPoint) -> bool {
        self.get(hex).is_some_and(|b| b.kind.is_claimant())
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    /// Every registered claimant.
    pub fn claimants(&self) -> impl Iterator<Item = &Building> {
        self.iter().filter(|b| b.kind.is_claimant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;

    #[test]
    fn place_without_overwrite_keeps_occupant() {
        let mut registry = TerritoryRegistry::new();
        let mut renderer = DrawList::new();
        let hex = HexPoint::new(2, 3);

        registry.place(hex, BuildingKind::Tower, false, &mut renderer);
        let handle = registry.get(hex).map(|b| b.handle);

        registry.place(hex, BuildingKind::Blank, false, &mut renderer);
        assert_eq!(registry.kind_at(hex), Some(BuildingKind::Tower));
        assert_eq!(registry.get(hex).map(|b| b.handle), handle);
        assert_eq!(renderer.len(), 1);
    }

    #[test]
    fn overwrite_swaps_drawables() {
        let mut registry = TerritoryRegistry::new();
        let mut renderer = DrawList::new();
        let hex = HexPoint::new(-1, 0);

        registry.place(hex, BuildingKind::Blank, true, &mut renderer);
        let old = registry.get(hex).unwrap().handle;
        registry.place(hex, BuildingKind::TownCenter, true, &mut renderer);
        let new = registry.get(hex).unwrap().handle;

        assert_ne!(old, new);
        assert!(renderer.get(old).is_none());
        assert_eq!(renderer.get(new).map(|d| d.label), Some("town center"));
        assert_eq!(renderer.len(), 1);
        assert!(registry.is_claimant(hex));
    }

    #[test]
    fn evict_and_clear_detach() {
        let mut registry = TerritoryRegistry::new();
        let mut renderer = DrawList::new();
        for x in 0..4 {
            registry.place(HexPoint::new(x, 0), BuildingKind::Blank, false, &mut renderer);
        }

        let evicted = registry.evict(HexPoint::new(0, 0), &mut renderer);
        assert_eq!(evicted.map(|b| b.kind), Some(BuildingKind::Blank));
        assert!(registry.evict(HexPoint::new(0, 0), &mut renderer).is_none());
        assert_eq!(renderer.len(), 3);

        registry.clear(&mut renderer);
        assert!(registry.is_empty());
        assert!(renderer.is_empty());
    }
}
