//! A territory wired to a drawing plane and a dash animation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use borderland_territory::{
    Building, Claimant, DrawList, Result, TerritoryConfig, TerritoryState,
};
use borderland_topology::{HexLayout, HexPoint, PlanePoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{DashAnimation, DashStyle};
use crate::outline::{border_outline, Segment};
use crate::scheduler::{CallbackId, FrameScheduler};

/// Configuration for the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisConfig {
    /// Frames to run before exiting
    pub frames: u64,
    /// Milliseconds between frames
    pub tick_ms: u64,
    pub layout: HexLayout,
    pub dash: DashStyle,
    pub territory: TerritoryConfig,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            tick_ms: 16,
            layout: HexLayout::default(),
            dash: DashStyle::default(),
            territory: TerritoryConfig::default(),
        }
    }
}

/// A building label placed in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: &'static str,
    pub hex: HexPoint,
    pub at: PlanePoint,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub frame: u64,
    pub dash_offset: f64,
    pub labels: Vec<Label>,
    pub outline: Vec<Segment>,
}

/// Territory plus the view state that draws it.
#[derive(Debug)]
pub struct BorderScene {
    state: TerritoryState<DrawList>,
    layout: HexLayout,
    animation: Rc<RefCell<DashAnimation>>,
    destroyed: HashSet<HexPoint>,
}

impl BorderScene {
    pub fn new(config: &VisConfig) -> Result<Self> {
        Ok(Self {
            state: TerritoryState::with_config(config.territory)?,
            layout: config.layout,
            animation: Rc::new(RefCell::new(DashAnimation::new(config.dash))),
            destroyed: HashSet::new(),
        })
    }

    /// Advance the dash animation on every tick of `scheduler`.
    pub fn animate_with(&self, scheduler: &mut FrameScheduler) -> CallbackId {
        let animation = Rc::clone(&self.animation);
        scheduler.register(move |frame| animation.borrow_mut().tick(frame))
    }

    /// Reset the territory to its starting layout.
    pub fn initialize(&mut self) -> Result<()> {
        self.state.initialize()?;
        self.collect_destroyed();
        Ok(())
    }

    pub fn place_claimant(&mut self, hex: HexPoint, claimant: Claimant) -> Result<()> {
        self.state.place_claimant(hex, claimant)
    }

    /// Remove a claimant and take over whatever dropped out of the territory.
    pub fn remove_claimant(&mut self, hex: HexPoint) -> Result<Claimant> {
        let claimant = self.state.remove_claimant(hex)?;
        self.collect_destroyed();
        Ok(claimant)
    }

    fn collect_destroyed(&mut self) {
        let drained = self.state.drain_pending_destruction();
        if !drained.is_empty() {
            debug!(count = drained.len(), "Hexes destroyed");
        }
        self.destroyed.extend(drained);
    }

    /// Hexes that left the territory since the last call.
    pub fn take_destroyed(&mut self) -> HashSet<HexPoint> {
        std::mem::take(&mut self.destroyed)
    }

    /// The building under a pixel, if any.
    pub fn building_at(&self, pixel: PlanePoint) -> Option<&Building> {
        let hex = self.layout.hex_at(pixel);
        let offset = pixel - self.layout.to_pixel(hex);
        if !self.layout.contains(offset) {
            return None;
        }
        self.state.registry().get(hex)
    }

    pub fn state(&self) -> &TerritoryState<DrawList> {
        &self.state
    }

    pub fn dash_offset(&self) -> f64 {
        self.animation.borrow().offset()
    }

    /// Labels and outline as they should be drawn now.
    pub fn render(&self) -> SceneFrame {
        let animation = self.animation.borrow();
        let labels = self
            .state
            .renderer()
            .iter()
            .map(|(_, drawable, hex)| Label {
                text: drawable.label,
                hex,
                at: self.layout.to_pixel(hex),
            })
            .collect();

        SceneFrame {
            frame: animation.frame(),
            dash_offset: animation.offset(),
            labels,
            outline: border_outline(&self.state, &self.layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_drives_dash_offset() {
        let scene = BorderScene::new(&VisConfig::default()).unwrap();
        let mut scheduler = FrameScheduler::new();
        scene.animate_with(&mut scheduler);

        assert_eq!(scene.dash_offset(), 0.0);
        for _ in 0..24 {
            scheduler.tick();
        }
        assert!((scene.dash_offset() - 5.0).abs() < 1e-9);
        assert_eq!(scene.render().frame, 24);
    }

    #[test]
    fn removal_hands_over_destroyed_hexes() {
        let mut scene = BorderScene::new(&VisConfig::default()).unwrap();
        scene.place_claimant(HexPoint::ORIGIN, Claimant::Tower).unwrap();
        scene.remove_claimant(HexPoint::ORIGIN).unwrap();

        assert_eq!(scene.take_destroyed().len(), 19);
        assert!(scene.take_destroyed().is_empty());
        assert!(scene.state().pending_destruction().is_empty());
    }

    #[test]
    fn render_labels_every_registered_hex() {
        let mut scene = BorderScene::new(&VisConfig::default()).unwrap();
        scene.initialize().unwrap();

        let frame = scene.render();
        assert_eq!(frame.labels.len(), scene.state().registry().len());
        assert!(frame.labels.iter().any(|l| l.text == "town center"));
        assert!(!frame.outline.is_empty());
    }

    #[test]
    fn pointer_lookup_finds_buildings() {
        let mut scene = BorderScene::new(&VisConfig::default()).unwrap();
        scene.initialize().unwrap();

        let layout = HexLayout::default();
        let tower = layout.to_pixel(HexPoint::new(3, -1)) + PlanePoint::new(4.0, -3.0);
        assert_eq!(
            scene.building_at(tower).map(|b| b.hex),
            Some(HexPoint::new(3, -1))
        );
        assert!(scene.building_at(layout.to_pixel(HexPoint::new(40, 40))).is_none());
    }
}
